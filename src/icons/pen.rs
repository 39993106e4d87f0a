// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static PEN_DEF: IconDefinition = IconDefinition {
    name: "Pen",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[(
            "d",
            "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z",
        )],
    }],
};

pub static PEN: IconComponent = create_icon(&PEN_DEF);

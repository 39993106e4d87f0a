// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static PLUS_DEF: IconDefinition = IconDefinition {
    name: "Plus",
    nodes: &[
        IconNode {
            kind: "path",
            attrs: &[("d", "M5 12h14")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M12 5v14")],
        },
    ],
};

pub static PLUS: IconComponent = create_icon(&PLUS_DEF);

// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static ARROW_RIGHT_DEF: IconDefinition = IconDefinition {
    name: "ArrowRight",
    nodes: &[
        IconNode {
            kind: "path",
            attrs: &[("d", "M5 12h14")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m12 5 7 7-7 7")],
        },
    ],
};

pub static ARROW_RIGHT: IconComponent = create_icon(&ARROW_RIGHT_DEF);

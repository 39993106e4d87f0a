// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static SMILE_DEF: IconDefinition = IconDefinition {
    name: "Smile",
    nodes: &[
        IconNode {
            kind: "circle",
            attrs: &[("cx", "12"), ("cy", "12"), ("r", "10")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M8 14s1.5 2 4 2 4-2 4-2")],
        },
        IconNode {
            kind: "line",
            attrs: &[("x1", "9"), ("x2", "9.01"), ("y1", "9"), ("y2", "9")],
        },
        IconNode {
            kind: "line",
            attrs: &[("x1", "15"), ("x2", "15.01"), ("y1", "9"), ("y2", "9")],
        },
    ],
};

pub static SMILE: IconComponent = create_icon(&SMILE_DEF);

// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static SUN_DEF: IconDefinition = IconDefinition {
    name: "Sun",
    nodes: &[
        IconNode {
            kind: "circle",
            attrs: &[("cx", "12"), ("cy", "12"), ("r", "4")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M12 2v2")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M12 20v2")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m4.93 4.93 1.41 1.41")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m17.66 17.66 1.41 1.41")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M2 12h2")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M20 12h2")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m6.34 17.66-1.41 1.41")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m19.07 4.93-1.41 1.41")],
        },
    ],
};

pub static SUN: IconComponent = create_icon(&SUN_DEF);

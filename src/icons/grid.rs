// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static GRID_DEF: IconDefinition = IconDefinition {
    name: "Grid",
    nodes: &[
        IconNode {
            kind: "rect",
            attrs: &[
                ("width", "18"),
                ("height", "18"),
                ("x", "3"),
                ("y", "3"),
                ("rx", "2"),
            ],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M3 9h18")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M3 15h18")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M9 3v18")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "M15 3v18")],
        },
    ],
};

pub static GRID: IconComponent = create_icon(&GRID_DEF);

// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static MENU_DEF: IconDefinition = IconDefinition {
    name: "Menu",
    nodes: &[
        IconNode {
            kind: "line",
            attrs: &[("x1", "4"), ("x2", "20"), ("y1", "12"), ("y2", "12")],
        },
        IconNode {
            kind: "line",
            attrs: &[("x1", "4"), ("x2", "20"), ("y1", "6"), ("y2", "6")],
        },
        IconNode {
            kind: "line",
            attrs: &[("x1", "4"), ("x2", "20"), ("y1", "18"), ("y2", "18")],
        },
    ],
};

pub static MENU: IconComponent = create_icon(&MENU_DEF);

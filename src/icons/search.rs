// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static SEARCH_DEF: IconDefinition = IconDefinition {
    name: "Search",
    nodes: &[
        IconNode {
            kind: "circle",
            attrs: &[("cx", "11"), ("cy", "11"), ("r", "8")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m21 21-4.3-4.3")],
        },
    ],
};

pub static SEARCH: IconComponent = create_icon(&SEARCH_DEF);

// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static HOUSE_DEF: IconDefinition = IconDefinition {
    name: "House",
    nodes: &[
        IconNode {
            kind: "path",
            attrs: &[("d", "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8")],
        },
        IconNode {
            kind: "path",
            attrs: &[(
                "d",
                "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            )],
        },
    ],
};

pub static HOUSE: IconComponent = create_icon(&HOUSE_DEF);

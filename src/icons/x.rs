// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static X_DEF: IconDefinition = IconDefinition {
    name: "X",
    nodes: &[
        IconNode {
            kind: "path",
            attrs: &[("d", "M18 6 6 18")],
        },
        IconNode {
            kind: "path",
            attrs: &[("d", "m6 6 12 12")],
        },
    ],
};

pub static X: IconComponent = create_icon(&X_DEF);

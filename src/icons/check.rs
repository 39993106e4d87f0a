// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static CHECK_DEF: IconDefinition = IconDefinition {
    name: "Check",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[("d", "M20 6 9 17l-5-5")],
    }],
};

pub static CHECK: IconComponent = create_icon(&CHECK_DEF);

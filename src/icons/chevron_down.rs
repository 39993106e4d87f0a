// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static CHEVRON_DOWN_DEF: IconDefinition = IconDefinition {
    name: "ChevronDown",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[("d", "m6 9 6 6 6-6")],
    }],
};

pub static CHEVRON_DOWN: IconComponent = create_icon(&CHEVRON_DOWN_DEF);

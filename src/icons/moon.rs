// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static MOON_DEF: IconDefinition = IconDefinition {
    name: "Moon",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[("d", "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
    }],
};

pub static MOON: IconComponent = create_icon(&MOON_DEF);

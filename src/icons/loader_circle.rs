// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static LOADER_CIRCLE_DEF: IconDefinition = IconDefinition {
    name: "LoaderCircle",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[("d", "M21 12a9 9 0 1 1-6.219-8.56")],
    }],
};

pub static LOADER_CIRCLE: IconComponent = create_icon(&LOADER_CIRCLE_DEF);

// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static DROPLET_DEF: IconDefinition = IconDefinition {
    name: "Droplet",
    nodes: &[IconNode {
        kind: "path",
        attrs: &[(
            "d",
            "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z",
        )],
    }],
};

pub static DROPLET: IconComponent = create_icon(&DROPLET_DEF);

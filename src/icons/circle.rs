// Generated from the shared icon dataset. Do not edit by hand.

use crate::component::{IconComponent, IconDefinition, IconNode, create_icon};

static CIRCLE_DEF: IconDefinition = IconDefinition {
    name: "Circle",
    nodes: &[IconNode {
        kind: "circle",
        attrs: &[("cx", "12"), ("cy", "12"), ("r", "10")],
    }],
};

pub static CIRCLE: IconComponent = create_icon(&CIRCLE_DEF);

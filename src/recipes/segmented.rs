use rand::RngCore;

use super::builder::{stacked, CompositeBuilder};
use super::Structure;
use crate::types::{Material, PrimitiveNode, ShapeKind};

pub const SPINE_SEGMENTS: usize = 5;

const VERTEBRA_SPACING: f32 = 0.5;
const DISC_OFFSET: f32 = 0.2;

/// Column of vertebrae, each capped by an intervertebral disc
pub fn spine(_rng: &mut dyn RngCore) -> Structure {
    let bone = Material::tissue(0xEEEEEE);
    let disc_mat = Material::tissue(0x888888);

    let segments = stacked(SPINE_SEGMENTS, VERTEBRA_SPACING, |_, y| {
        vec![
            PrimitiveNode::new(ShapeKind::cylinder(0.4, 0.4, 0.3, 16), bone)
                .labeled("vertebra")
                .at(0.0, y, 0.0),
            PrimitiveNode::new(ShapeKind::cylinder(0.35, 0.35, 0.1, 16), disc_mat)
                .labeled("disc")
                .at(0.0, y + DISC_OFFSET, 0.0),
        ]
    });

    Structure::new("Spine", CompositeBuilder::new().add_all(segments).build())
}

use rand::RngCore;

use super::builder::{outward_transform, random_direction, CompositeBuilder};
use super::Structure;
use crate::types::{Material, PrimitiveNode, ShapeKind};

pub const T_CELL_SPIKES: usize = 20;

const BODY_RADIUS: f32 = 1.0;

/// Lymphocyte body covered with receptor spikes pointing away from the center.
/// Spike directions are random on every call.
pub fn t_cells(rng: &mut dyn RngCore) -> Structure {
    let mat = Material::tissue_with(0x00FF41, 0.9, 0.3);
    let spike = PrimitiveNode::new(ShapeKind::cone(0.1, 0.5, 8), mat).labeled("spike");

    let spikes: Vec<_> = (0..T_CELL_SPIKES)
        .map(|_| {
            let direction = random_direction(rng);
            spike.clone().with_transform(outward_transform(direction, BODY_RADIUS))
        })
        .collect();

    let body = CompositeBuilder::new()
        .labeled("cell body")
        .add(PrimitiveNode::new(ShapeKind::icosahedron(BODY_RADIUS, 1), mat).labeled("body"))
        .add_all(spikes)
        .build();

    Structure::new("T-Cells", CompositeBuilder::new().add_group(body).build())
}

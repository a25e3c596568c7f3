use rand::RngCore;

use super::builder::{random_in_cube, CompositeBuilder};
use super::Structure;
use crate::types::{Material, PrimitiveNode, ShapeKind};

pub const ALVEOLI_SACS: usize = 8;

/// Grape-like bunch of air sacs. Positions differ on every call.
pub fn alveoli(rng: &mut dyn RngCore) -> Structure {
    let sac = PrimitiveNode::new(ShapeKind::sphere(0.4), Material::tissue(0xFF8888)).labeled("sac");

    let sacs: Vec<_> = (0..ALVEOLI_SACS)
        .map(|_| {
            let p = random_in_cube(rng, 0.5);
            sac.clone().at(p.x, p.y, p.z)
        })
        .collect();

    Structure::new("Alveoli", CompositeBuilder::new().add_all(sacs).build())
}

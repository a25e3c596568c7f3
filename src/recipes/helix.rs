use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, PI};

use super::builder::{helix_point, CompositeBuilder};
use super::Structure;
use crate::types::{CompositeNode, Material, PrimitiveNode, ShapeKind};

pub const HELIX_SEGMENTS: usize = 40;
pub const HELIX_RADIUS: f32 = 0.6;
pub const HELIX_HEIGHT: f32 = 4.0;
pub const HELIX_ANGULAR_STEP: f32 = 0.5;

const BACKBONE_COLOR: u32 = 0x0088FF;
const RUNG_COLOR: u32 = 0x00FF41;

fn build_helix(double: bool) -> CompositeNode {
    let backbone_mat = Material::physical(BACKBONE_COLOR).with_metalness(0.5);
    let rung_mat = Material::physical(RUNG_COLOR).with_metalness(0.5);
    let backbone = PrimitiveNode::new(ShapeKind::sphere_segments(0.15, 8, 8), backbone_mat).labeled("backbone");

    let mut strand = CompositeBuilder::new().labeled("helix");

    for i in 0..HELIX_SEGMENTS {
        let (p, angle) = helix_point(i, HELIX_SEGMENTS, HELIX_RADIUS, HELIX_HEIGHT, HELIX_ANGULAR_STEP, 0.0);
        strand = strand.add(backbone.clone().at(p.x, p.y, p.z));

        if double {
            let (q, _) = helix_point(i, HELIX_SEGMENTS, HELIX_RADIUS, HELIX_HEIGHT, HELIX_ANGULAR_STEP, PI);
            // Rung lies flat across the axis, pointing at both backbones
            let rung = PrimitiveNode::new(ShapeKind::cylinder(0.05, 0.05, HELIX_RADIUS * 2.0, 4), rung_mat)
                .labeled("rung")
                .at(0.0, p.y, 0.0)
                .rotated(0.0, -angle, FRAC_PI_2);
            strand = strand.add(backbone.clone().at(q.x, q.y, q.z)).add(rung);
        }
    }

    CompositeBuilder::new().add_group(strand.build()).build()
}

pub fn dna(_rng: &mut dyn RngCore) -> Structure {
    Structure::new("DNA Helix", build_helix(true))
}

pub fn rna(_rng: &mut dyn RngCore) -> Structure {
    Structure::new("RNA Strand", build_helix(false))
}

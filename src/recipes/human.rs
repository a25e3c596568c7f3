use rand::RngCore;

use super::builder::CompositeBuilder;
use super::{Flow, FlowKind, Structure};
use crate::math::hex_to_rgb;
use crate::types::{Material, PrimitiveNode, ShapeKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    fn skin_color(self) -> u32 {
        match self {
            Sex::Male => 0x00F3FF,
            Sex::Female => 0xFF00AA,
        }
    }
}

fn limb(skin: Material, x: f32, y: f32, width: f32, length: f32, angle_z: f32) -> PrimitiveNode {
    PrimitiveNode::new(ShapeKind::cylinder(width, width * 0.7, length, 6), skin)
        .at(x, y, 0.0)
        .rotated(0.0, 0.0, angle_z)
}

/// Glassy low-poly figure standing on the origin, about 1.75 units tall
fn figure(name: &str, sex: Sex) -> Structure {
    let skin = Material::physical(sex.skin_color())
        .with_metalness(0.8)
        .with_roughness(0.2)
        .with_transmission(0.4)
        .with_opacity(0.9)
        .double_sided();

    let torso = match sex {
        Sex::Male => ShapeKind::cylinder(0.28, 0.18, 0.65, 8),
        // Narrower shoulders, wider hips
        Sex::Female => ShapeKind::cylinder(0.20, 0.24, 0.60, 8),
    };

    let root = CompositeBuilder::new()
        .add(PrimitiveNode::new(ShapeKind::icosahedron(0.12, 1), skin).labeled("head").at(0.0, 1.65, 0.0))
        .add(PrimitiveNode::new(torso, skin).labeled("torso").at(0.0, 1.2, 0.0))
        .add(PrimitiveNode::new(ShapeKind::cylinder(0.18, 0.15, 0.2, 8), skin).labeled("hips").at(0.0, 0.8, 0.0))
        .add(limb(skin, -0.35, 1.35, 0.06, 0.7, 0.2).labeled("arm"))
        .add(limb(skin, 0.35, 1.35, 0.06, 0.7, -0.2).labeled("arm"))
        .add(limb(skin, -0.15, 0.4, 0.08, 0.8, 0.0).labeled("leg"))
        .add(limb(skin, 0.15, 0.4, 0.08, 0.8, 0.0).labeled("leg"))
        .build();

    Structure::new(name, root).with_flow(Flow {
        kind: FlowKind::Halo,
        color: hex_to_rgb(sex.skin_color()),
    })
}

pub fn male(_rng: &mut dyn RngCore) -> Structure {
    figure("Human Male", Sex::Male)
}

pub fn female(_rng: &mut dyn RngCore) -> Structure {
    figure("Human Female", Sex::Female)
}

//! Structures built from a handful of primitives at literal offsets.

use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::builder::CompositeBuilder;
use super::Structure;
use crate::types::{Material, PrimitiveNode, ShapeKind};

const PROTEIN_BLUE: u32 = 0x0088FF;
const NEURAL_PINK: u32 = 0xFF00D2;
const BLOOD_RED: u32 = 0xFF0000;
const VENOUS_BLUE: u32 = 0x0033FF;
const GUT_ORANGE: u32 = 0xFF8800;
const IMMUNE_GREEN: u32 = 0x00FF41;

fn single(name: &str, primitive: PrimitiveNode) -> Structure {
    Structure::new(name, CompositeBuilder::new().add(primitive).build())
}

/// Folded chain, shown as a knot
pub fn protein(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Protein",
        PrimitiveNode::new(ShapeKind::torus_knot(0.7, 0.2, 64, 8, 3, 5), Material::tissue(PROTEIN_BLUE)),
    )
}

/// Globule with its active site cut out
pub fn enzyme(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Enzyme",
        PrimitiveNode::new(ShapeKind::partial_sphere(1.0, 32, PI * 1.7), Material::tissue(PROTEIN_BLUE)),
    )
}

/// Star-shaped soma inside a faint shell of dendrites
pub fn neurons(_rng: &mut dyn RngCore) -> Structure {
    let root = CompositeBuilder::new()
        .add(PrimitiveNode::new(ShapeKind::icosahedron(0.5, 0), Material::tissue(NEURAL_PINK)).labeled("soma"))
        .add(
            PrimitiveNode::new(ShapeKind::icosahedron(1.2, 0), Material::tissue_with(NEURAL_PINK, 0.3, 0.3))
                .labeled("dendrites"),
        )
        .build();
    Structure::new("Neurons", root)
}

fn vessel_arc(name: &str, color: u32) -> Structure {
    single(
        name,
        PrimitiveNode::new(ShapeKind::torus_arc(1.0, 0.2, 16, 50, PI * 1.5), Material::tissue(color)).labeled("vessel"),
    )
}

pub fn arteries(_rng: &mut dyn RngCore) -> Structure {
    vessel_arc("Arteries", BLOOD_RED)
}

pub fn veins(_rng: &mut dyn RngCore) -> Structure {
    vessel_arc("Veins", VENOUS_BLUE)
}

/// Biconcave disc approximated by a flattened torus
pub fn red_blood_cells(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Red Blood Cells",
        PrimitiveNode::new(ShapeKind::torus(0.7, 0.35, 16, 50), Material::tissue(BLOOD_RED)).scaled(1.0, 1.0, 0.3),
    )
}

/// Cross-section of a long bone: open shell, marrow core and two end rings
pub fn bone_marrow(_rng: &mut dyn RngCore) -> Structure {
    let bone = Material::tissue_with(0xFFFFFF, 1.0, 0.8);
    let marrow = Material::tissue_with(0xAA0000, 1.0, 0.9);
    let cap = ShapeKind::ring(0.9, 1.0, 32);

    let root = CompositeBuilder::new()
        .add(PrimitiveNode::new(ShapeKind::open_cylinder(1.0, 3.0, 32), bone).labeled("shell"))
        .add(PrimitiveNode::new(ShapeKind::cylinder(0.9, 0.9, 2.9, 32), marrow).labeled("marrow"))
        .add(
            PrimitiveNode::new(cap.clone(), bone)
                .labeled("cap")
                .at(0.0, 1.5, 0.0)
                .rotated(-FRAC_PI_2, 0.0, 0.0),
        )
        .add(
            PrimitiveNode::new(cap, bone)
                .labeled("cap")
                .at(0.0, -1.5, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .rotate(0.0, 0.0, FRAC_PI_4)
        .build();

    Structure::new("Bone Marrow", root)
}

/// J-shaped torus segment
pub fn stomach(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Stomach",
        PrimitiveNode::new(ShapeKind::torus_arc(0.8, 0.45, 16, 20, 3.5), Material::tissue(GUT_ORANGE)).rotated(0.0, 0.0, 2.0),
    )
}

/// Four-sided wedge
pub fn liver(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Liver",
        PrimitiveNode::new(ShapeKind::cone(1.2, 2.0, 4), Material::tissue(0x8B0000))
            .rotated(FRAC_PI_2, 0.0, 0.0)
            .scaled(1.0, 1.0, 0.6),
    )
}

/// Horizontal tapered capsule
pub fn pancreas(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Pancreas",
        PrimitiveNode::new(ShapeKind::capsule(0.3, 2.0, 4, 16), Material::tissue(0xFFDD00)).rotated(0.0, 0.0, FRAC_PI_2),
    )
}

/// Tightly coiled knot
pub fn intestine(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Intestine",
        PrimitiveNode::new(ShapeKind::torus_knot(0.7, 0.25, 100, 16, 3, 4), Material::tissue(GUT_ORANGE)),
    )
}

pub fn bladder(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Bladder",
        PrimitiveNode::new(ShapeKind::sphere_segments(0.9, 32, 32), Material::tissue(0xFFFF00)),
    )
}

/// Y-shaped immunoglobulin: a stem and two angled arms
pub fn antibodies(_rng: &mut dyn RngCore) -> Structure {
    let rod = PrimitiveNode::new(ShapeKind::cylinder(0.1, 0.1, 1.0, 8), Material::tissue(IMMUNE_GREEN));

    let root = CompositeBuilder::new()
        .add(rod.clone().labeled("stem").at(0.0, -0.5, 0.0))
        .add(rod.clone().labeled("arm").at(-0.5, 0.5, 0.0).rotated(0.0, 0.0, -0.8))
        .add(rod.labeled("arm").at(0.5, 0.5, 0.0).rotated(0.0, 0.0, 0.8))
        .build();

    Structure::new("Antibodies", root)
}

/// Geometric capsid
pub fn virus(_rng: &mut dyn RngCore) -> Structure {
    single(
        "Virus",
        PrimitiveNode::new(ShapeKind::icosahedron(0.8, 0), Material::tissue(BLOOD_RED)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bone_marrow_layers() {
        let mut rng = StdRng::seed_from_u64(0);
        let marrow = bone_marrow(&mut rng);
        assert_eq!(marrow.root.primitive_count(), 4);
        assert_eq!(marrow.root.count_labeled("cap"), 2);
        assert_eq!(marrow.root.transform.rotation.z, FRAC_PI_4);
    }

    #[test]
    fn test_antibody_arms_mirror() {
        let mut rng = StdRng::seed_from_u64(0);
        let antibody = antibodies(&mut rng);
        let arms: Vec<_> = antibody
            .root
            .primitives()
            .into_iter()
            .filter(|p| p.label.as_deref() == Some("arm"))
            .collect();
        assert_eq!(arms.len(), 2);
        assert_eq!(arms[0].transform.position.x, -arms[1].transform.position.x);
        assert_eq!(arms[0].transform.rotation.z, -arms[1].transform.rotation.z);
    }

    #[test]
    fn test_vessels_share_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = arteries(&mut rng);
        let v = veins(&mut rng);
        assert_eq!(a.root.primitives()[0].shape, v.root.primitives()[0].shape);
        assert_ne!(a.root.primitives()[0].material.color, v.root.primitives()[0].material.color);
    }

    #[test]
    fn test_enzyme_has_wedge_removed() {
        let mut rng = StdRng::seed_from_u64(0);
        let enzyme = enzyme(&mut rng);
        match &enzyme.root.primitives()[0].shape {
            ShapeKind::Sphere { phi_length, .. } => assert!(*phi_length < std::f32::consts::TAU),
            other => panic!("unexpected shape {:?}", other),
        }
    }
}

use rand::RngCore;

use super::builder::{mirrored_pair, CompositeBuilder};
use super::Structure;
use crate::types::{Material, PrimitiveNode, ShapeKind};

const NEURAL_PINK: u32 = 0xFF00D2;
const KIDNEY_BROWN: u32 = 0x8B4513;
const LUNG_TISSUE: u32 = 0xFF8888;
const CARTILAGE: u32 = 0xEEEEEE;

/// Two hemispheres plus the cerebellum tucked underneath at the back
pub fn brain(_rng: &mut dyn RngCore) -> Structure {
    let mat = Material::tissue(NEURAL_PINK);
    let lobe = PrimitiveNode::new(ShapeKind::sphere_segments(0.8, 32, 32), mat).scaled(0.8, 1.0, 1.2);
    let [left, right] = mirrored_pair(lobe, 0.65, 0.1);

    let root = CompositeBuilder::new()
        .add(left.labeled("left lobe"))
        .add(right.labeled("right lobe"))
        .add(
            PrimitiveNode::new(ShapeKind::sphere_segments(0.5, 32, 32), mat)
                .labeled("cerebellum")
                .at(0.0, -0.6, -0.5)
                .scaled(1.5, 0.8, 0.8),
        )
        .build();

    Structure::new("Brain", root)
}

/// Bean-shaped pair
pub fn kidneys(_rng: &mut dyn RngCore) -> Structure {
    let bean = PrimitiveNode::new(ShapeKind::sphere_segments(0.6, 32, 32), Material::tissue(KIDNEY_BROWN))
        .labeled("kidney")
        .scaled(1.0, 1.5, 0.8);

    let root = CompositeBuilder::new().add_mirrored(bean, 0.8, 0.2).build();
    Structure::new("Kidneys", root)
}

/// Slightly asymmetric lungs under the trachea; the right lung is the larger one
pub fn lungs(_rng: &mut dyn RngCore) -> Structure {
    let tissue = Material::tissue_with(LUNG_TISSUE, 0.9, 0.3);

    let root = CompositeBuilder::new()
        .add(
            PrimitiveNode::new(ShapeKind::capsule(0.7, 1.4, 4, 16), tissue)
                .labeled("right lung")
                .at(0.75, 0.0, 0.0)
                .scaled(1.0, 1.0, 1.2),
        )
        .add(
            PrimitiveNode::new(ShapeKind::capsule(0.65, 1.3, 4, 16), tissue)
                .labeled("left lung")
                .at(-0.75, 0.0, 0.0),
        )
        .add(
            PrimitiveNode::new(ShapeKind::cylinder(0.3, 0.3, 1.5, 16), Material::tissue(CARTILAGE))
                .labeled("trachea")
                .at(0.0, 1.2, 0.0),
        )
        .build();

    Structure::new("Lungs", root)
}

/// Two terminals facing each other across the cleft, with a spark between them
pub fn synapse(_rng: &mut dyn RngCore) -> Structure {
    let terminal = PrimitiveNode::new(ShapeKind::sphere(0.6), Material::tissue(NEURAL_PINK)).labeled("terminal");

    let root = CompositeBuilder::new()
        .add_mirrored(terminal, 0.8, 0.0)
        .add(PrimitiveNode::new(ShapeKind::icosahedron(0.3, 0), Material::tissue(0xFFFFFF)).labeled("spark"))
        .build();

    Structure::new("Synapse", root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_brain_lobes_are_mirrored() {
        let mut rng = StdRng::seed_from_u64(0);
        let brain = brain(&mut rng);
        let parts = brain.root.primitives();
        assert_eq!(parts.len(), 3);

        let (left, right) = (parts[0], parts[1]);
        assert_eq!(left.transform.position.x, -0.65);
        assert_eq!(right.transform.position.x, 0.65);
        assert_eq!(left.transform.rotation.z, 0.1);
        assert_eq!(right.transform.rotation.z, -0.1);
        assert_eq!(left.transform.scale, right.transform.scale);
    }

    #[test]
    fn test_kidneys_counter_rotated() {
        let mut rng = StdRng::seed_from_u64(0);
        let kidneys = kidneys(&mut rng);
        let parts = kidneys.root.primitives();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].transform.position.x, -0.8);
        assert!((parts[0].transform.rotation.z - 0.2).abs() < 1e-6);
        assert!((parts[1].transform.rotation.z + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_lungs_have_trachea() {
        let mut rng = StdRng::seed_from_u64(0);
        let lungs = lungs(&mut rng);
        assert_eq!(lungs.root.primitive_count(), 3);
        assert_eq!(lungs.root.count_labeled("trachea"), 1);
    }

    #[test]
    fn test_brain_bounds_symmetric() {
        let mut rng = StdRng::seed_from_u64(0);
        let bounds = brain(&mut rng).root.bounds().unwrap();
        assert!((bounds.min.x + bounds.max.x).abs() < 1e-4);
    }
}

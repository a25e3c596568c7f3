use rand::RngCore;
use std::f32::consts::FRAC_PI_2;

use super::builder::CompositeBuilder;
use super::{BehaviorFlags, Flow, FlowKind, Structure};
use crate::math::hex_to_rgb;
use crate::types::{Material, PrimitiveNode, ShapeKind};

const MUSCLE: u32 = 0xCC0000;
const VESSEL: u32 = 0x0055FF;
const ARTERIAL_RED: u32 = 0xFF0000;

/// Beating heart with an arterial blood stream
pub fn heart(_rng: &mut dyn RngCore) -> Structure {
    let muscle = Material::tissue_with(MUSCLE, 1.0, 0.4);
    let vessel = Material::tissue_with(VESSEL, 1.0, 0.2);

    let root = CompositeBuilder::new()
        .add(
            PrimitiveNode::new(ShapeKind::sphere_segments(1.0, 32, 32), muscle)
                .labeled("ventricles")
                .scaled(1.0, 1.3, 0.8)
                .rotated(0.0, 0.0, 0.3),
        )
        .add(
            PrimitiveNode::new(ShapeKind::sphere(0.6), muscle)
                .labeled("left atrium")
                .at(-0.6, 0.8, 0.0),
        )
        .add(
            PrimitiveNode::new(ShapeKind::sphere(0.6), muscle)
                .labeled("right atrium")
                .at(0.4, 0.9, 0.2),
        )
        .add(
            PrimitiveNode::new(ShapeKind::cylinder(0.3, 0.3, 1.0, 16), vessel)
                .labeled("aorta")
                .at(0.2, 1.2, 0.0)
                .rotated(0.0, 0.0, -0.3),
        )
        .rotate(0.0, -FRAC_PI_2, 0.0)
        .build();

    Structure::new("Heart", root)
        .with_flags(BehaviorFlags::PULSING)
        .with_flow(Flow {
            kind: FlowKind::Fountain,
            color: hex_to_rgb(ARTERIAL_RED),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_heart_declares_pulse_and_flow() {
        let mut rng = StdRng::seed_from_u64(0);
        let heart = heart(&mut rng);
        assert!(heart.flags.pulses);
        assert_eq!(heart.flow.map(|f| f.kind), Some(FlowKind::Fountain));
        assert_eq!(heart.flow.map(|f| f.color), Some([1.0, 0.0, 0.0]));
        assert_eq!(heart.root.primitive_count(), 4);
    }

    #[test]
    fn test_heart_faces_sideways() {
        let mut rng = StdRng::seed_from_u64(0);
        let heart = heart(&mut rng);
        assert_eq!(heart.root.transform.rotation.y, -FRAC_PI_2);
    }
}

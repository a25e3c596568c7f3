use glam::{Quat, Vec3};
use rand::{Rng, RngCore};
use serde::Serialize;

use crate::config::{FountainConfig, HaloConfig};
use crate::types::Transform;

/// How a particle cloud moves each tick
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowMotion {
    /// `y -= velocity`; anything below `lower_bound` reappears at `upper_bound`
    Fountain { lower_bound: f32, upper_bound: f32 },
    /// Rotation about the vertical axis by `velocity` radians, clockwise seen from above
    Halo,
}

/// Point cloud with one scalar velocity per point.
///
/// The position buffer is packed `xyz` triples so it can be uploaded as-is.
/// Both buffers are owned by the system and only mutated through [`ParticleSystem::advance`],
/// which takes `&mut self`; there is never another reader during a tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleSystem {
    positions: Vec<f32>,
    velocities: Vec<f32>,
    pub color: [f32; 3],
    pub point_size: f32,
    pub opacity: f32,
    pub motion: FlowMotion,
    /// Placement of the whole cloud; positions are local to it
    pub transform: Transform,
}

impl ParticleSystem {
    /// Builds a system from explicit buffers. Panics if `positions.len() != 3 * velocities.len()`.
    pub fn from_buffers(positions: Vec<f32>, velocities: Vec<f32>, color: [f32; 3], motion: FlowMotion) -> Self {
        assert_eq!(
            positions.len(),
            velocities.len() * 3,
            "position buffer must hold one xyz triple per velocity"
        );
        Self {
            positions,
            velocities,
            color,
            point_size: 0.05,
            opacity: 0.6,
            motion,
            transform: Transform::IDENTITY,
        }
    }

    /// Falling stream filling a box. Heights start inside `[lower_bound, upper_bound]`,
    /// X and Z inside `±spawn_half_extent`.
    pub fn fountain(config: &FountainConfig, color: [f32; 3], rng: &mut dyn RngCore) -> Self {
        let n = config.particle_count;
        let half = config.spawn_half_extent;

        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(rng.random_range(-half..=half));
            positions.push(rng.random_range(config.lower_bound..=config.upper_bound));
            positions.push(rng.random_range(-half..=half));
            velocities.push(rng.random_range(config.min_speed..=config.max_speed));
        }

        let mut system = Self::from_buffers(
            positions,
            velocities,
            color,
            FlowMotion::Fountain {
                lower_bound: config.lower_bound,
                upper_bound: config.upper_bound,
            },
        );
        system.point_size = config.point_size;
        system.opacity = config.opacity;
        system
    }

    /// Cloud around a standing figure, all points orbiting at the same rate
    pub fn halo(config: &HaloConfig, color: [f32; 3], rng: &mut dyn RngCore) -> Self {
        let n = config.particle_count;
        let r = config.radius;

        let mut positions = Vec::with_capacity(n * 3);
        for _ in 0..n {
            positions.push(rng.random_range(-r..=r));
            positions.push(rng.random_range(0.0..=config.height));
            positions.push(rng.random_range(-r..=r));
        }

        let mut system = Self::from_buffers(positions, vec![config.angular_speed; n], color, FlowMotion::Halo);
        system.point_size = config.point_size;
        system.opacity = config.opacity;
        system
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    /// Position of particle `index` after the cloud's own transform
    pub fn world_position(&self, index: usize) -> Vec3 {
        self.transform.matrix().transform_point3(self.position(index))
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.positions.chunks_exact(3).map(|p| p[1])
    }

    /// Position buffer as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// One tick of motion, applied in place
    pub fn advance(&mut self) {
        match self.motion {
            FlowMotion::Fountain {
                lower_bound,
                upper_bound,
            } => {
                for (p, v) in self.positions.chunks_exact_mut(3).zip(&self.velocities) {
                    p[1] -= v;
                    if p[1] < lower_bound {
                        p[1] = upper_bound;
                    }
                }
            }
            FlowMotion::Halo => {
                for (p, v) in self.positions.chunks_exact_mut(3).zip(&self.velocities) {
                    let rotated = Quat::from_rotation_y(-v) * Vec3::new(p[0], p[1], p[2]);
                    p[0] = rotated.x;
                    p[2] = rotated.z;
                }
            }
        }
    }
}

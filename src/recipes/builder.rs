use glam::{Quat, Vec3};
use rand::{Rng, RngCore};

use crate::types::{CompositeNode, PrimitiveNode, SceneNode, Transform};

// ============================================================================
// Pattern Generators - Placement rules shared by several recipes
// ============================================================================

/// Point `i` of a vertical helix: angle `i * angular_step` and height
/// `i * height / segments - height / 2`, offset by `phase` around the axis
pub fn helix_point(i: usize, segments: usize, radius: f32, height: f32, angular_step: f32, phase: f32) -> (Vec3, f32) {
    let angle = i as f32 * angular_step;
    let y = i as f32 * (height / segments as f32) - height * 0.5;
    let theta = angle + phase;
    (Vec3::new(theta.cos() * radius, y, theta.sin() * radius), angle)
}

/// Two copies of `template` at `±offset_x`, tilted in opposite directions about Z.
/// The left copy sits at `-offset_x` with rotation `+tilt_z`.
pub fn mirrored_pair(template: PrimitiveNode, offset_x: f32, tilt_z: f32) -> [PrimitiveNode; 2] {
    let mut left = template.clone();
    left.transform.position.x -= offset_x;
    left.transform.rotation.z += tilt_z;

    let mut right = template;
    right.transform.position.x += offset_x;
    right.transform.rotation.z -= tilt_z;

    [left, right]
}

/// `count` copies produced by `make`, each shifted `spacing` further along Y, centered on 0
pub fn stacked(count: usize, spacing: f32, make: impl Fn(usize, f32) -> Vec<PrimitiveNode>) -> Vec<PrimitiveNode> {
    let center = (count as f32 - 1.0) * 0.5;
    (0..count)
        .flat_map(|i| make(i, (i as f32 - center) * spacing))
        .collect()
}

/// Uniform point inside the axis-aligned cube `[-half, half)^3`
pub fn random_in_cube(rng: &mut dyn RngCore, half: f32) -> Vec3 {
    if half <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
    )
}

/// Random direction from a normalized point of the unit cube; +Y for the zero draw
pub fn random_direction(rng: &mut dyn RngCore) -> Vec3 {
    random_in_cube(rng, 1.0).try_normalize().unwrap_or(Vec3::Y)
}

/// Transform placing an object at `radius * direction` with its local +Y axis
/// along the outward radius
pub fn outward_transform(direction: Vec3, radius: f32) -> Transform {
    let mut transform = Transform {
        position: direction * radius,
        ..Transform::IDENTITY
    };
    transform.set_quat(Quat::from_rotation_arc(Vec3::Y, direction));
    transform
}

// ============================================================================
// CompositeBuilder - Fluent API for recipe construction
// ============================================================================

/// Builder for composites with a fluent API
pub struct CompositeBuilder {
    node: CompositeNode,
}

impl CompositeBuilder {
    /// Creates a new empty builder
    pub fn new() -> Self {
        Self {
            node: CompositeNode::new(),
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.node.label = Some(label.into());
        self
    }

    /// Adds a single primitive
    pub fn add(mut self, primitive: PrimitiveNode) -> Self {
        self.node.push(primitive);
        self
    }

    /// Adds primitives from any iterator
    pub fn add_all(mut self, primitives: impl IntoIterator<Item = PrimitiveNode>) -> Self {
        self.node.children.extend(primitives.into_iter().map(SceneNode::Primitive));
        self
    }

    /// Adds a nested group
    pub fn add_group(mut self, group: CompositeNode) -> Self {
        self.node.push(group);
        self
    }

    /// Adds `primitive` twice, mirrored across the YZ plane
    pub fn add_mirrored(self, primitive: PrimitiveNode, offset_x: f32, tilt_z: f32) -> Self {
        self.add_all(mirrored_pair(primitive, offset_x, tilt_z))
    }

    /// Sets the group's own rotation (Euler XYZ)
    pub fn rotate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.rotation = Vec3::new(x, y, z);
        self
    }

    /// Returns the number of primitives added so far
    pub fn count(&self) -> usize {
        self.node.primitive_count()
    }

    pub fn build(self) -> CompositeNode {
        self.node
    }
}

impl Default for CompositeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

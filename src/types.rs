use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::math::{hex_to_rgb, scale_rgb, AABB};
use crate::mesh::Mesh;

/// Local transform: translation, Euler XYZ rotation in radians, scale
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn set_quat(&mut self, rotation: Quat) {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        self.rotation = Vec3::new(x, y, z);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Surface description handed to the renderer
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub transparent: bool,
    pub double_sided: bool,
}

impl Material {
    /// Plain opaque physical material
    pub fn physical(hex: u32) -> Self {
        Self {
            color: hex_to_rgb(hex),
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            transmission: 0.0,
            emissive: [0.0; 3],
            emissive_intensity: 1.0,
            transparent: false,
            double_sided: false,
        }
    }

    /// Translucent, faintly self-lit material shared by most organ recipes
    pub fn tissue(hex: u32) -> Self {
        Self::tissue_with(hex, 0.9, 0.3)
    }

    pub fn tissue_with(hex: u32, opacity: f32, roughness: f32) -> Self {
        let color = hex_to_rgb(hex);
        Self {
            color,
            opacity,
            roughness,
            metalness: 0.1,
            transmission: 0.1,
            emissive: color,
            emissive_intensity: 0.2,
            transparent: true,
            double_sided: true,
        }
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = opacity < 1.0 || self.transparent;
        self
    }

    pub fn with_transmission(mut self, transmission: f32) -> Self {
        self.transmission = transmission;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Effective emitted radiance
    pub fn emission(&self) -> [f32; 3] {
        scale_rgb(self.emissive, self.emissive_intensity)
    }
}

/// Geometry of a primitive. Parameters follow the usual real-time conventions:
/// cylinders, cones and capsules stand along Y, tori and rings lie in the XY plane.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
        phi_start: f32,
        phi_length: f32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        open_ended: bool,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Capsule {
        radius: f32,
        length: f32,
        cap_segments: u32,
        radial_segments: u32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
    DisplacedSphere {
        mesh: Mesh,
    },
}

impl ShapeKind {
    pub fn sphere(radius: f32) -> Self {
        Self::sphere_segments(radius, 32, 16)
    }

    pub fn sphere_segments(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
            phi_start: 0.0,
            phi_length: std::f32::consts::TAU,
        }
    }

    /// Sphere with a wedge cut out around the vertical axis
    pub fn partial_sphere(radius: f32, segments: u32, phi_length: f32) -> Self {
        Self::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
            phi_start: 0.0,
            phi_length,
        }
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::torus_arc(radius, tube, radial_segments, tubular_segments, std::f32::consts::TAU)
    }

    pub fn torus_arc(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32, arc: f32) -> Self {
        Self::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
            arc,
        }
    }

    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Self::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
            open_ended: false,
        }
    }

    /// Tube without end caps
    pub fn open_cylinder(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            radial_segments,
            open_ended: true,
        }
    }

    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self::Cone {
            radius,
            height,
            radial_segments,
        }
    }

    pub fn capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Self {
        Self::Capsule {
            radius,
            length,
            cap_segments,
            radial_segments,
        }
    }

    pub fn icosahedron(radius: f32, detail: u32) -> Self {
        Self::Icosahedron { radius, detail }
    }

    pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Self {
        Self::TorusKnot {
            radius,
            tube,
            tubular_segments,
            radial_segments,
            p,
            q,
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> Self {
        Self::Ring {
            inner_radius,
            outer_radius,
            theta_segments,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::Capsule { .. } => "capsule",
            Self::Icosahedron { .. } => "icosahedron",
            Self::TorusKnot { .. } => "torus_knot",
            Self::Ring { .. } => "ring",
            Self::DisplacedSphere { .. } => "displaced_sphere",
        }
    }

    /// Conservative half extents of the untransformed shape, centered on the origin
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Self::Sphere { radius, .. } => Vec3::splat(*radius),
            Self::Torus { radius, tube, .. } => Vec3::new(radius + tube, radius + tube, *tube),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(*radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Self::Cone { radius, height, .. } => Vec3::new(*radius, height * 0.5, *radius),
            Self::Capsule { radius, length, .. } => Vec3::new(*radius, length * 0.5 + radius, *radius),
            Self::Icosahedron { radius, .. } => Vec3::splat(*radius),
            Self::TorusKnot { radius, tube, .. } => {
                let planar = radius * 1.5 + tube;
                Vec3::new(planar, planar, radius * 0.5 + tube)
            }
            Self::Ring { outer_radius, .. } => Vec3::new(*outer_radius, *outer_radius, 0.0),
            Self::DisplacedSphere { mesh } => mesh.half_extents(),
        }
    }
}

/// Renderable leaf
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimitiveNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub shape: ShapeKind,
    pub material: Material,
    pub transform: Transform,
}

impl PrimitiveNode {
    pub fn new(shape: ShapeKind, material: Material) -> Self {
        Self {
            label: None,
            shape,
            material,
            transform: Transform::IDENTITY,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vec3::new(x, y, z);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn local_bounds(&self) -> AABB {
        AABB::from_half_extents(self.shape.half_extents()).transformed(&self.transform.matrix())
    }
}

/// Child of a composite
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum SceneNode {
    Primitive(PrimitiveNode),
    Composite(CompositeNode),
}

impl From<PrimitiveNode> for SceneNode {
    fn from(primitive: PrimitiveNode) -> Self {
        SceneNode::Primitive(primitive)
    }
}

impl From<CompositeNode> for SceneNode {
    fn from(composite: CompositeNode) -> Self {
        SceneNode::Composite(composite)
    }
}

/// Ordered group of nodes sharing one transform. Children are owned and dropped with it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CompositeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub transform: Transform,
    pub children: Vec<SceneNode>,
}

impl CompositeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn push(&mut self, node: impl Into<SceneNode>) {
        self.children.push(node.into());
    }

    /// Number of primitives in the whole subtree
    pub fn primitive_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                SceneNode::Primitive(_) => 1,
                SceneNode::Composite(composite) => composite.primitive_count(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// Depth-first list of every primitive in the subtree
    pub fn primitives(&self) -> Vec<&PrimitiveNode> {
        let mut out = Vec::new();
        self.for_each_primitive(Mat4::IDENTITY, &mut |_, primitive| out.push(primitive));
        out
    }

    pub fn count_labeled(&self, label: &str) -> usize {
        self.primitives()
            .iter()
            .filter(|p| p.label.as_deref() == Some(label))
            .count()
    }

    /// Visits every primitive together with its transform relative to this node.
    /// This node's own transform is not applied.
    pub fn for_each_primitive<'a>(&'a self, parent: Mat4, visit: &mut impl FnMut(Mat4, &'a PrimitiveNode)) {
        for child in &self.children {
            match child {
                SceneNode::Primitive(primitive) => visit(parent, primitive),
                SceneNode::Composite(composite) => {
                    composite.for_each_primitive(parent * composite.transform.matrix(), visit)
                }
            }
        }
    }

    /// Bounds of the subtree in this node's local space, `None` when it holds no primitives
    pub fn bounds(&self) -> Option<AABB> {
        let mut bounds: Option<AABB> = None;
        self.for_each_primitive(Mat4::IDENTITY, &mut |parent, primitive| {
            let local = AABB::from_half_extents(primitive.shape.half_extents());
            let placed = local.transformed(&(parent * primitive.transform.matrix()));
            bounds = Some(match bounds {
                Some(acc) => acc.union(&placed),
                None => placed,
            });
        });
        bounds
    }
}

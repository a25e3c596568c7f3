use glam::Vec3;
use rand::RngCore;

use super::builder::CompositeBuilder;
use super::Structure;
use crate::mesh::Mesh;
use crate::types::{Material, PrimitiveNode, ShapeKind};

const MEMBRANE_SEGMENTS: u32 = 48;
const RIPPLE_FREQUENCY: f32 = 4.0;
const RIPPLE_AMPLITUDE: f32 = 0.1;

/// Radial scale applied to a membrane vertex
pub fn membrane_ripple(p: Vec3) -> f32 {
    1.0 + (p.x * RIPPLE_FREQUENCY).sin() * (p.y * RIPPLE_FREQUENCY).sin() * RIPPLE_AMPLITUDE
}

/// Unit sphere with a deterministic rippled surface
pub fn membrane_mesh() -> Mesh {
    let mut mesh = Mesh::uv_sphere(1.0, MEMBRANE_SEGMENTS, MEMBRANE_SEGMENTS);
    mesh.displace(membrane_ripple);
    mesh.compute_vertex_normals();
    mesh
}

/// Solid white, amorphous leukocyte
pub fn white_blood_cells(_rng: &mut dyn RngCore) -> Structure {
    let mesh = membrane_mesh();
    log::debug!(
        "Membrane mesh: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    let cell = PrimitiveNode::new(
        ShapeKind::DisplacedSphere { mesh },
        Material::tissue_with(0xFFFFFF, 1.0, 0.4),
    )
    .labeled("membrane");

    Structure::new("White Blood Cells", CompositeBuilder::new().add(cell).build())
}

use glam::Vec3;
use serde::Serialize;
use std::f32::consts::{PI, TAU};

/// Mesh vertex laid out for direct upload into a GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Indexed triangle mesh
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Latitude/longitude sphere with `(width + 1) * (height + 1)` vertices.
    ///
    /// Vertices along the seam and at the poles are duplicated so every ring has the
    /// same vertex count; the degenerate pole triangles are skipped.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);
        let stride = width_segments + 1;

        let mut vertices = Vec::with_capacity((stride * (height_segments + 1)) as usize);
        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            let theta = v * PI;

            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let phi = u * TAU;

                let position = Vec3::new(
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                );
                vertices.push(Vertex::new(position, position.normalize_or_zero()));
            }
        }

        let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * stride + ix + 1;
                let b = iy * stride + ix;
                let c = (iy + 1) * stride + ix;
                let d = (iy + 1) * stride + ix + 1;

                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Scales every vertex about the origin by the factor returned for its position.
    /// Normals are stale afterwards; call [`Mesh::compute_vertex_normals`].
    pub fn displace(&mut self, factor: impl Fn(Vec3) -> f32) {
        for vertex in &mut self.vertices {
            let p = vertex.position();
            vertex.position = (p * factor(p)).to_array();
        }
    }

    /// Area-weighted smooth normals accumulated from the indexed faces
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = self.vertices[ia].position();
            let pb = self.vertices[ib].position();
            let pc = self.vertices[ic].position();

            let face = (pc - pb).cross(pa - pb);
            normals[ia] += face;
            normals[ib] += face;
            normals[ic] += face;
        }

        for (vertex, accumulated) in self.vertices.iter_mut().zip(normals) {
            // Seam vertices that no face references keep a radial normal
            let normal = accumulated
                .try_normalize()
                .unwrap_or_else(|| vertex.position().normalize_or_zero());
            vertex.normal = normal.to_array();
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Largest absolute coordinate on each axis
    pub fn half_extents(&self) -> Vec3 {
        self.vertices
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc.max(v.position().abs()))
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

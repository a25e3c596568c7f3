use glam::{Mat4, Vec3};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin
    pub fn from_half_extents(half: Vec3) -> Self {
        Self::new(-half, half)
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Bounds of this box after an affine transform, computed from its 8 corners
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let corners = (0..8).map(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });

        corners
            .map(|corner| matrix.transform_point3(corner))
            .fold(
                AABB::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
                |acc, p| AABB::new(acc.min.min(p), acc.max.max(p)),
            )
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_from_half_extents() {
        let aabb = AABB::from_half_extents(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = AABB::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_aabb_union_contained() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 5.0, 5.0));
        let aabb2 = AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, aabb1.min);
        assert_eq!(union.max, aabb1.max);
    }

    #[test]
    fn test_aabb_transformed_translation() {
        let aabb = AABB::from_half_extents(Vec3::ONE);
        let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0)));
        assert!((moved.min - Vec3::new(2.0, -1.0, -1.0)).length() < 1e-5);
        assert!((moved.max - Vec3::new(4.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_aabb_transformed_rotation_swaps_axes() {
        let aabb = AABB::from_half_extents(Vec3::new(1.0, 3.0, 1.0));
        let rotated = aabb.transformed(&Mat4::from_rotation_z(FRAC_PI_2));
        assert!((rotated.size() - Vec3::new(6.0, 2.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = AABB::from_half_extents(Vec3::ONE);
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::ONE));
        assert!(!aabb.contains(Vec3::new(1.5, 0.0, 0.0)));
    }
}

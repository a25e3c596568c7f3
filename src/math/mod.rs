mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{hex_to_rgb, scale_rgb};

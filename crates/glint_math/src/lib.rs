// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod geometry;
mod interval;
mod ray;

pub use geometry::{intersect_ray_plane, intersect_ray_sphere, normalize_or, reflect, EPSILON};
pub use interval::Interval;
pub use ray::Ray;

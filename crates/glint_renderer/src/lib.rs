//! Glint Renderer - CPU Whitted-style ray tracing.
//!
//! Casts one primary ray per pixel center, finds the nearest surface by a
//! linear scan, and shades it with emissive, diffuse and Phong specular
//! terms from every emissive object plus recursively traced mirror
//! reflections up to a fixed depth.

mod camera;
mod integrator;
mod object;
mod plane;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use integrator::Integrator;
pub use object::SceneObject;
pub use plane::{Plane, TiledPlane};
pub use renderer::{
    color_to_rgba, pack_pixel, render_image, render_into, render_pixel, PixelFormat, RenderError, RenderMode,
};
pub use scene::{Hit, Scene};
pub use sphere::Sphere;

/// Re-export scene configuration and math types
pub use glint_core::{CameraDesc, Color, Material, ObjectDesc, RenderSettings, SceneDesc, SceneError};
pub use glint_math::{Ray, Vec2, Vec3};

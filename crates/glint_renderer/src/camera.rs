//! Pinhole camera for primary ray generation.

use glint_core::{CameraDesc, RenderSettings, SceneError, SceneResult};
use glint_math::{normalize_or, Ray, Vec2, Vec3};

/// Maps pixel coordinates to world-space ray directions.
///
/// The orthonormal basis is computed once from the view direction and a
/// fixed world up (+Y). Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,

    // tan(fov / 2)
    half_angle: f32,
    aspect_ratio: f32,

    image_width: u32,
    image_height: u32,
}

impl Camera {
    /// Build a camera for an image of the configured resolution.
    pub fn new(desc: &CameraDesc, settings: &RenderSettings) -> SceneResult<Self> {
        desc.validate()?;
        if settings.width == 0 || settings.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: settings.width,
                height: settings.height,
            });
        }

        let forward = desc.direction.try_normalize().ok_or(SceneError::DegenerateViewDirection)?;

        // Looking straight up or down leaves no horizon; pick right from +Z instead
        let right = forward
            .cross(Vec3::Y)
            .try_normalize()
            .or_else(|| forward.cross(Vec3::Z).try_normalize())
            .ok_or(SceneError::DegenerateViewDirection)?;
        let up = right.cross(forward).normalize();

        Ok(Self {
            position: desc.position,
            forward,
            right,
            up,
            half_angle: (desc.fov_degrees.to_radians() / 2.0).tan(),
            aspect_ratio: settings.aspect_ratio(),
            image_width: settings.width,
            image_height: settings.height,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Unit direction through the center of pixel (x, y).
    pub fn world_ray(&self, x: u32, y: u32) -> Vec3 {
        self.world_ray_at(Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
    }

    /// Unit direction through a continuous image-plane sample.
    ///
    /// (0, 0) is the top-left corner, (width, height) the bottom-right.
    pub fn world_ray_at(&self, sample: Vec2) -> Vec3 {
        let ndc = Vec2::new(
            sample.x * 2.0 / self.image_width as f32 - 1.0,
            sample.y * 2.0 / self.image_height as f32 - 1.0,
        );

        let dir = self.forward + self.right * (self.half_angle * self.aspect_ratio * ndc.x)
            - self.up * (self.half_angle * ndc.y);
        normalize_or(dir, self.forward)
    }

    /// Primary ray from the camera position through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.position, self.world_ray(x, y))
    }
}

//! Sphere primitive.

use glint_core::Material;
use glint_math::{intersect_ray_sphere, normalize_or, Ray, Vec3};

/// A sphere with a single material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    radius_squared: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        let radius = radius.max(0.0);
        Self {
            center,
            radius,
            radius_squared: radius * radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance to the nearest hit in front of the ray origin.
    ///
    /// The ray direction does not need to be unit length; a zero direction
    /// never hits.
    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        let dir = ray.direction().try_normalize()?;
        intersect_ray_sphere(ray.origin(), dir, self.center, self.radius_squared)
    }

    /// Outward unit normal at a surface point.
    pub fn surface_normal_at(&self, point: Vec3) -> Vec3 {
        normalize_or(point - self.center, Vec3::Y)
    }

    pub fn material_at(&self, _point: Vec3) -> Material {
        self.material
    }

    /// Unit direction from `from` towards the sphere's center.
    pub fn direction_to(&self, from: Vec3) -> Vec3 {
        normalize_or(self.center - from, Vec3::Y)
    }

    pub fn is_emitter(&self) -> bool {
        self.material.is_emissive()
    }
}

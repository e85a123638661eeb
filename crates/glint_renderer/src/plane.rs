//! Infinite planes.

use glint_core::{Color, Material};
use glint_math::{intersect_ray_plane, normalize_or, Ray, Vec3};

/// An infinite one-sided flat surface.
///
/// Only rays approaching from the side the normal points to can hit it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane through `origin`. The normal is normalized here.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normalize_or(normal, Vec3::Y),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        let dir = ray.direction().try_normalize()?;
        intersect_ray_plane(ray.origin(), dir, self.origin, self.normal)
    }

    /// Unit direction from `from` towards the plane's origin point.
    pub fn direction_to(&self, from: Vec3) -> Vec3 {
        normalize_or(self.origin - from, -self.normal)
    }
}

/// A plane with a unit checkerboard in world X/Z.
///
/// Tiles where `floor(x) + floor(z)` is even use the base material's albedo,
/// odd tiles use `alternate_albedo`. Everything else comes from the base
/// material.
#[derive(Debug, Clone, PartialEq)]
pub struct TiledPlane {
    plane: Plane,
    material: Material,
    alternate_albedo: Color,
}

impl TiledPlane {
    pub fn new(origin: Vec3, normal: Vec3, material: Material, alternate_albedo: Color) -> Self {
        Self {
            plane: Plane::new(origin, normal),
            material,
            alternate_albedo,
        }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        self.plane.intersects(ray)
    }

    pub fn surface_normal_at(&self, _point: Vec3) -> Vec3 {
        self.plane.normal()
    }

    pub fn material_at(&self, point: Vec3) -> Material {
        let parity = (point.x.floor() as i64).wrapping_add(point.z.floor() as i64) & 1;
        if parity == 0 {
            self.material
        } else {
            Material {
                albedo: self.alternate_albedo,
                ..self.material
            }
        }
    }

    pub fn direction_to(&self, from: Vec3) -> Vec3 {
        self.plane.direction_to(from)
    }

    /// Emission is shared by every tile.
    pub fn is_emitter(&self) -> bool {
        self.material.is_emissive()
    }
}

//! Closed set of renderable surfaces.

use glint_core::{Material, ObjectDesc};
use glint_math::{Ray, Vec3};

use crate::{Sphere, TiledPlane};

/// A renderable surface.
///
/// Every variant answers the same four queries as pure functions of the
/// query point or ray and its own fixed geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Sphere(Sphere),
    TiledPlane(TiledPlane),
}

impl SceneObject {
    /// Distance along `ray` to the nearest hit strictly in front of its origin.
    #[inline]
    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        match self {
            Self::Sphere(sphere) => sphere.intersects(ray),
            Self::TiledPlane(plane) => plane.intersects(ray),
        }
    }

    /// Unit surface normal at `point`.
    #[inline]
    pub fn surface_normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.surface_normal_at(point),
            Self::TiledPlane(plane) => plane.surface_normal_at(point),
        }
    }

    /// Material snapshot at `point`.
    #[inline]
    pub fn material_at(&self, point: Vec3) -> Material {
        match self {
            Self::Sphere(sphere) => sphere.material_at(point),
            Self::TiledPlane(plane) => plane.material_at(point),
        }
    }

    /// Unit direction from `from` towards this object.
    #[inline]
    pub fn direction_to(&self, from: Vec3) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.direction_to(from),
            Self::TiledPlane(plane) => plane.direction_to(from),
        }
    }

    /// Whether this object can light other surfaces.
    pub fn is_emitter(&self) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.is_emitter(),
            Self::TiledPlane(plane) => plane.is_emitter(),
        }
    }
}

impl From<&ObjectDesc> for SceneObject {
    fn from(desc: &ObjectDesc) -> Self {
        match desc {
            ObjectDesc::Sphere {
                center,
                radius,
                material,
            } => Self::Sphere(Sphere::new(*center, *radius, *material)),
            ObjectDesc::TiledPlane {
                origin,
                normal,
                material,
                alternate_albedo,
            } => Self::TiledPlane(TiledPlane::new(*origin, *normal, *material, *alternate_albedo)),
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<TiledPlane> for SceneObject {
    fn from(plane: TiledPlane) -> Self {
        Self::TiledPlane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Color;

    #[test]
    fn test_from_desc() {
        let desc = ObjectDesc::sphere(Vec3::new(1.0, 2.0, 3.0), 0.5, Material::light(Color::ONE, Color::ONE));
        let object = SceneObject::from(&desc);
        assert!(matches!(object, SceneObject::Sphere(ref s) if s.center() == Vec3::new(1.0, 2.0, 3.0)));
        assert!(object.is_emitter());

        let desc = ObjectDesc::checkered_plane(Vec3::ZERO, Vec3::Y);
        let object = SceneObject::from(&desc);
        assert!(matches!(object, SceneObject::TiledPlane(_)));
        assert!(!object.is_emitter());
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Material::default());
        let object = SceneObject::from(sphere.clone());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        assert_eq!(object.intersects(&ray), sphere.intersects(&ray));
        assert_eq!(object.surface_normal_at(Vec3::X), sphere.surface_normal_at(Vec3::X));
        assert_eq!(object.direction_to(Vec3::X), sphere.direction_to(Vec3::X));
    }
}

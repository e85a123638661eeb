//! Surface material data.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, nominally 0-1 but unbounded above)
pub type Color = Vec3;

/// Optical response of a surface at a point.
///
/// Plain data: objects hand out a `Material` snapshot per queried point, so
/// procedurally patterned surfaces can return a different one for each hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base diffuse color
    pub albedo: Color,

    /// Specular highlight color
    pub specular: Color,

    /// Fraction of the outgoing color taken from the mirror-reflected ray (0-1)
    pub reflectance: f32,

    /// Self-emitted radiance. Non-zero makes the object a light source.
    pub emissive: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::new(0.5, 0.5, 0.5), // Grey default
            specular: Color::ZERO,
            reflectance: 0.0,
            emissive: Color::ZERO,
        }
    }
}

impl Material {
    /// A purely diffuse material.
    pub fn diffuse(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    /// A light-emitting material.
    pub fn light(albedo: Color, emissive: Color) -> Self {
        Self {
            albedo,
            emissive,
            ..Default::default()
        }
    }

    /// Set the specular highlight color.
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    /// Set the reflectance, clamped to [0, 1].
    pub fn with_reflectance(mut self, reflectance: f32) -> Self {
        self.reflectance = reflectance.clamp(0.0, 1.0);
        self
    }

    /// Set the emitted radiance.
    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emissive != Color::ZERO
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflectance > 0.0
    }
}

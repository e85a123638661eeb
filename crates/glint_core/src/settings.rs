//! Render settings shared by every pass over a scene.

use serde::{Deserialize, Serialize};

use crate::{Color, SceneError, SceneResult};

/// Immutable per-render configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output image width in pixels
    pub width: u32,

    /// Output image height in pixels
    pub height: u32,

    /// Recursion limit. A ray traced at this depth contributes black.
    pub max_depth: u32,

    /// Color returned by rays that hit nothing
    pub background: Color,

    /// Phong exponent for specular highlights
    pub shininess: f32,

    /// Offset applied along the surface normal for secondary ray origins
    pub epsilon: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            max_depth: 3,
            background: Color::splat(0.1),
            shininess: 10.0,
            epsilon: 1e-3,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the recursion limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_depth == 0 {
            return Err(SceneError::InvalidMaxDepth);
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SceneError::InvalidEpsilon(self.epsilon));
        }
        if !(self.shininess.is_finite() && self.shininess >= 0.0) {
            return Err(SceneError::InvalidShininess(self.shininess));
        }
        if !self.background.is_finite() {
            return Err(SceneError::NonFiniteValue("background"));
        }
        Ok(())
    }
}

//! Scene descriptors.
//!
//! A `SceneDesc` is the static configuration a renderer is built from: one
//! camera, an ordered list of objects and the render settings. Descriptors
//! can be written in code or loaded from JSON, and are validated before use.

use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Material, RenderSettings};

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Maximum recursion depth must be at least 1")]
    InvalidMaxDepth,

    #[error("Surface offset must be positive and finite, got {0}")]
    InvalidEpsilon(f32),

    #[error("Shininess must be non-negative and finite, got {0}")]
    InvalidShininess(f32),

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("Camera view direction cannot be normalized")]
    DegenerateViewDirection,

    #[error("Object {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Object {index}: plane normal cannot be normalized")]
    DegenerateNormal { index: usize },

    #[error("Object {index}: reflectance must be in [0, 1], got {reflectance}")]
    InvalidReflectance { index: usize, reflectance: f32 },

    #[error("Non-finite value in {0}")]
    NonFiniteValue(&'static str),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Camera position in world space
    pub position: Vec3,

    /// View direction (need not be unit length)
    pub direction: Vec3,

    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            direction: Vec3::NEG_Z,
            fov_degrees: 60.0,
        }
    }
}

impl CameraDesc {
    /// Create a camera at `position` looking along `direction`.
    pub fn new(position: Vec3, direction: Vec3, fov_degrees: f32) -> Self {
        Self {
            position,
            direction,
            fov_degrees,
        }
    }

    /// Create a camera at `position` aimed at `target`.
    pub fn look_at(position: Vec3, target: Vec3, fov_degrees: f32) -> Self {
        Self::new(position, target - position, fov_degrees)
    }

    /// Place the camera on a circle around `target`.
    ///
    /// `angle_degrees` rotates about +Y starting from +Z, `distance` is the
    /// horizontal radius and `height` the vertical offset from the target.
    pub fn orbit(target: Vec3, angle_degrees: f32, distance: f32, height: f32, fov_degrees: f32) -> Self {
        let angle = angle_degrees.to_radians();
        let offset = Vec3::new(angle.sin() * distance, height, angle.cos() * distance);
        Self::look_at(target + offset, target, fov_degrees)
    }

    /// Check that a view basis can be built from this placement.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.position.is_finite() {
            return Err(SceneError::NonFiniteValue("camera position"));
        }
        if self.direction.try_normalize().is_none() {
            return Err(SceneError::DegenerateViewDirection);
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SceneError::InvalidFieldOfView(self.fov_degrees));
        }
        Ok(())
    }
}

/// A renderable surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDesc {
    /// A sphere with a single material.
    Sphere {
        center: Vec3,
        radius: f32,
        material: Material,
    },

    /// An infinite one-sided plane with a unit checker pattern.
    ///
    /// Even tiles use `material.albedo`, odd tiles use `alternate_albedo`.
    /// The other material fields apply to every tile.
    TiledPlane {
        origin: Vec3,
        normal: Vec3,
        material: Material,
        alternate_albedo: Color,
    },
}

impl ObjectDesc {
    /// Create a sphere descriptor.
    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::Sphere {
            center,
            radius,
            material,
        }
    }

    /// Create a white/black checkered plane, non-reflective with a white highlight.
    pub fn checkered_plane(origin: Vec3, normal: Vec3) -> Self {
        Self::TiledPlane {
            origin,
            normal,
            material: Material::diffuse(Color::ONE).with_specular(Color::ONE),
            alternate_albedo: Color::ZERO,
        }
    }

    /// The material shared by the whole object (the even-tile material for planes).
    pub fn material(&self) -> &Material {
        match self {
            Self::Sphere { material, .. } | Self::TiledPlane { material, .. } => material,
        }
    }

    /// Check the geometry and material of the object at `index`.
    pub fn validate(&self, index: usize) -> SceneResult<()> {
        match self {
            Self::Sphere { center, radius, .. } => {
                if !center.is_finite() {
                    return Err(SceneError::NonFiniteValue("sphere center"));
                }
                if !(radius.is_finite() && *radius > 0.0) {
                    return Err(SceneError::InvalidRadius { index, radius: *radius });
                }
            }
            Self::TiledPlane {
                origin,
                normal,
                alternate_albedo,
                ..
            } => {
                if !origin.is_finite() {
                    return Err(SceneError::NonFiniteValue("plane origin"));
                }
                if normal.try_normalize().is_none() {
                    return Err(SceneError::DegenerateNormal { index });
                }
                if !alternate_albedo.is_finite() {
                    return Err(SceneError::NonFiniteValue("plane albedo"));
                }
            }
        }

        let material = self.material();
        if !(0.0..=1.0).contains(&material.reflectance) {
            return Err(SceneError::InvalidReflectance {
                index,
                reflectance: material.reflectance,
            });
        }
        if !(material.albedo.is_finite() && material.specular.is_finite() && material.emissive.is_finite()) {
            return Err(SceneError::NonFiniteValue("material"));
        }
        Ok(())
    }
}

/// Complete static description of a scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub camera: CameraDesc,

    /// Objects in insertion order. Earlier objects win exact distance ties.
    #[serde(default)]
    pub objects: Vec<ObjectDesc>,

    #[serde(default)]
    pub settings: RenderSettings,
}

impl SceneDesc {
    /// Create an empty scene with the given camera and settings.
    pub fn new(camera: CameraDesc, settings: RenderSettings) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            settings,
        }
    }

    /// Append an object.
    pub fn with_object(mut self, object: ObjectDesc) -> Self {
        self.objects.push(object);
        self
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let desc = Self::from_json_str(&json)?;
        log::info!("Loaded scene {} ({} objects)", path.display(), desc.objects.len());
        Ok(desc)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate settings, camera and every object.
    pub fn validate(&self) -> SceneResult<()> {
        self.settings.validate()?;
        self.camera.validate()?;
        for (index, object) in self.objects.iter().enumerate() {
            object.validate(index)?;
        }
        if self.objects.is_empty() {
            log::warn!("Scene has no objects; every pixel will be background");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_camera_faces_target() {
        let camera = CameraDesc::orbit(Vec3::ZERO, 0.0, 8.0, 5.0, 60.0);
        assert!((camera.position - Vec3::new(0.0, 5.0, 8.0)).length() < 1e-5);
        assert!((camera.direction.normalize() - (-camera.position).normalize()).length() < 1e-5);

        let camera = CameraDesc::orbit(Vec3::ZERO, 90.0, 8.0, 0.0, 60.0);
        assert!((camera.position - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_camera_validation() {
        assert!(CameraDesc::default().validate().is_ok());

        let zero_dir = CameraDesc::new(Vec3::ZERO, Vec3::ZERO, 60.0);
        assert!(matches!(zero_dir.validate(), Err(SceneError::DegenerateViewDirection)));

        let bad_fov = CameraDesc::new(Vec3::ZERO, Vec3::NEG_Z, 180.0);
        assert!(matches!(bad_fov.validate(), Err(SceneError::InvalidFieldOfView(_))));
    }

    #[test]
    fn test_sphere_radius_validation() {
        let scene = SceneDesc::default()
            .with_object(ObjectDesc::sphere(Vec3::ZERO, 1.0, Material::default()))
            .with_object(ObjectDesc::sphere(Vec3::ZERO, 0.0, Material::default()));

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRadius { index: 1, .. })
        ));

        let negative = SceneDesc::default().with_object(ObjectDesc::sphere(Vec3::ZERO, -2.0, Material::default()));
        assert!(matches!(negative.validate(), Err(SceneError::InvalidRadius { index: 0, .. })));
    }

    #[test]
    fn test_plane_normal_validation() {
        let scene = SceneDesc::default().with_object(ObjectDesc::checkered_plane(Vec3::ZERO, Vec3::ZERO));
        assert!(matches!(scene.validate(), Err(SceneError::DegenerateNormal { index: 0 })));
    }

    #[test]
    fn test_reflectance_validation() {
        let mut material = Material::default();
        material.reflectance = 2.0;
        let scene = SceneDesc::default().with_object(ObjectDesc::sphere(Vec3::ZERO, 1.0, material));
        assert!(matches!(scene.validate(), Err(SceneError::InvalidReflectance { index: 0, .. })));
    }

    #[test]
    fn test_scene_from_json() {
        let json = r#"{
            "camera": { "position": [0.0, 1.0, 5.0], "direction": [0.0, 0.0, -1.0], "fov_degrees": 45.0 },
            "objects": [
                { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0,
                  "material": { "albedo": [0.7, 0.1, 0.1], "reflectance": 0.25 } },
                { "type": "tiled_plane", "origin": [0.0, -1.0, 0.0], "normal": [0.0, 1.0, 0.0],
                  "material": { "albedo": [1.0, 1.0, 1.0] }, "alternate_albedo": [0.0, 0.0, 0.0] }
            ],
            "settings": { "width": 64, "height": 48 }
        }"#;

        let scene = SceneDesc::from_json_str(json).unwrap();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.settings.width, 64);
        assert_eq!(scene.settings.max_depth, 3);
        assert_eq!(scene.objects[0].material().reflectance, 0.25);
        assert!(matches!(scene.objects[1], ObjectDesc::TiledPlane { .. }));
    }

    #[test]
    fn test_load_sample_scene_file() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/red_ball.json");
        let scene = SceneDesc::load(path).unwrap();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.settings.width, 640);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(SceneDesc::load("/nonexistent/scene.json"), Err(SceneError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(SceneDesc::from_json_str("{ not json"), Err(SceneError::Json(_))));
    }
}

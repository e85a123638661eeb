//! Glint Core - static scene configuration for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene descriptors**: `SceneDesc`, `ObjectDesc`, `CameraDesc`
//! - **Surface data**: `Material`, `Color`
//! - **Render settings**: `RenderSettings` (resolution, recursion depth, background)
//! - **Validation**: every descriptor is checked before a renderer can use it
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDesc;
//!
//! let desc = SceneDesc::load("scene.json")?;
//! desc.validate()?;
//! println!("Loaded {} objects", desc.objects.len());
//! ```

pub mod demo;
pub mod material;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use material::{Color, Material};
pub use scene::{CameraDesc, ObjectDesc, SceneDesc, SceneError, SceneResult};
pub use settings::RenderSettings;

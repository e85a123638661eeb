//! Built-in demo scene: five spheres over a checkered floor.

use glint_math::Vec3;

use crate::{CameraDesc, Color, Material, ObjectDesc, RenderSettings, SceneDesc};

/// The default scene rendered when no scene file is given.
pub fn demo_scene() -> SceneDesc {
    demo_scene_with(CameraDesc::new(Vec3::new(0.0, 6.0, 8.0), Vec3::new(0.0, -0.8, -1.0), 60.0))
}

/// The demo objects seen through a custom camera.
pub fn demo_scene_with(camera: CameraDesc) -> SceneDesc {
    SceneDesc::new(camera, RenderSettings::default())
        // Red ball
        .with_object(ObjectDesc::sphere(
            Vec3::new(0.0, 2.0, 0.0),
            2.0,
            Material::diffuse(Color::new(0.7, 0.1, 0.1))
                .with_specular(Color::new(0.9, 0.1, 0.1))
                .with_reflectance(0.5),
        ))
        // Purple ball
        .with_object(ObjectDesc::sphere(
            Vec3::new(-2.5, 1.0, 2.0),
            1.0,
            Material::diffuse(Color::new(0.7, 0.0, 0.7))
                .with_specular(Color::new(0.9, 0.9, 0.8))
                .with_reflectance(0.5),
        ))
        // Blue ball
        .with_object(ObjectDesc::sphere(
            Vec3::new(0.0, 0.5, 3.0),
            0.5,
            Material::diffuse(Color::new(0.0, 0.3, 1.0)).with_specular(Color::new(0.0, 0.0, 1.0)),
        ))
        // Glowing white ball
        .with_object(ObjectDesc::sphere(
            Vec3::new(2.8, 0.8, 2.0),
            0.8,
            Material::light(Color::ONE, Color::splat(2.0)),
        ))
        // Small distant light
        .with_object(ObjectDesc::sphere(
            Vec3::new(-10.8, 6.4, 10.0),
            0.4,
            Material::light(Color::new(0.0, 0.8, 0.0), Color::ONE),
        ))
        .with_object(ObjectDesc::checkered_plane(Vec3::ZERO, Vec3::Y))
}

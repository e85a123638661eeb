//! Whitted-style recursive shading.
//!
//! Implements:
//! - Emissive self-light
//! - Diffuse and Phong specular terms from every unoccluded emitter
//! - Mirror reflection blended by the material's reflectance
//! - A hard recursion cutoff at `max_depth`

use glint_core::{Color, Material, RenderSettings};
use glint_math::{reflect, Ray, Vec3};

use crate::{Hit, Scene};

/// Traces rays against a scene and returns linear, unclamped colors.
#[derive(Debug, Clone, Copy)]
pub struct Integrator<'a> {
    scene: &'a Scene,
    settings: &'a RenderSettings,
}

impl<'a> Integrator<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            settings: scene.settings(),
        }
    }

    /// Compute the color seen along a ray.
    ///
    /// Rays traced at or beyond `max_depth` contribute black, as does a ray
    /// with a zero direction. Rays that hit nothing return the background.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= self.settings.max_depth {
            return Color::ZERO;
        }

        let Some(ray) = ray.normalized() else {
            return Color::ZERO;
        };

        let Some(hit) = self.scene.find_nearest_hit(&ray) else {
            return self.settings.background;
        };

        let point = ray.at(hit.distance);
        let normal = hit.object.surface_normal_at(point);
        let material = hit.object.material_at(point);

        let local = self.shade_local(&ray, &hit, point, normal, &material);
        if !material.is_reflective() {
            return local;
        }

        let reflected_ray = Ray::new(
            point + normal * self.settings.epsilon,
            reflect(ray.direction(), normal),
        );
        let reflected = self.trace_ray(&reflected_ray, depth + 1);

        local * (1.0 - material.reflectance) + reflected * material.reflectance
    }

    /// Emission plus direct light from every other emitter.
    fn shade_local(&self, ray: &Ray, hit: &Hit<'_>, point: Vec3, normal: Vec3, material: &Material) -> Color {
        let mut color = material.emissive;
        let shadow_origin = point + normal * self.settings.epsilon;
        let view = -ray.direction();

        for &light_index in self.scene.emitters() {
            if light_index == hit.index {
                continue;
            }
            let Some(light) = self.scene.object(light_index) else {
                continue;
            };

            let light_dir = light.direction_to(shadow_origin);
            let diffuse = normal.dot(light_dir);
            if diffuse <= 0.0 {
                continue;
            }

            let Some(emitted) = self.visible_emission(shadow_origin, light_dir, light_index) else {
                continue;
            };

            color += material.albedo * diffuse * emitted;

            let highlight = reflect(-light_dir, normal).dot(view);
            if highlight > 0.0 {
                color += material.specular * highlight.powf(self.settings.shininess);
            }
        }

        color
    }

    /// Radiance arriving from `light_index` along a shadow ray.
    ///
    /// `None` when another object is hit first, or the point reached on the
    /// light does not emit.
    fn visible_emission(&self, origin: Vec3, dir: Vec3, light_index: usize) -> Option<Color> {
        let shadow_ray = Ray::new(origin, dir);
        let hit = self.scene.find_nearest_hit(&shadow_ray)?;
        if hit.index != light_index {
            return None;
        }

        let material = hit.object.material_at(shadow_ray.at(hit.distance));
        material.is_emissive().then_some(material.emissive)
    }
}

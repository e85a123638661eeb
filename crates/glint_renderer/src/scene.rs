//! Immutable scene and nearest-hit query.

use glint_core::{RenderSettings, SceneDesc, SceneResult};
use glint_math::Ray;

use crate::{Camera, SceneObject};

/// The nearest surface along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The object that was hit
    pub object: &'a SceneObject,
    /// Insertion index of the object
    pub index: usize,
    /// Distance along the normalized ray direction
    pub distance: f32,
}

/// A validated, read-only scene: objects, camera and render settings.
///
/// Built once and never mutated, so any number of threads may trace
/// against it concurrently.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    emitters: Vec<usize>,
    camera: Camera,
    settings: RenderSettings,
}

impl Scene {
    /// Validate a descriptor and build the scene from it.
    pub fn new(desc: &SceneDesc) -> SceneResult<Self> {
        desc.validate()?;

        let camera = Camera::new(&desc.camera, &desc.settings)?;
        let objects: Vec<SceneObject> = desc.objects.iter().map(SceneObject::from).collect();
        let emitters = objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.is_emitter())
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        log::debug!(
            "Built scene: {} objects, {} emitters, camera at {:?} facing {:?}",
            objects.len(),
            emitters.len(),
            camera.position(),
            camera.forward()
        );

        Ok(Self {
            objects,
            emitters,
            camera,
            settings: desc.settings,
        })
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Get the object at an insertion index.
    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Insertion indices of every light-contributing object.
    pub fn emitters(&self) -> &[usize] {
        &self.emitters
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Find the closest object along `ray`.
    ///
    /// Distances are measured along the normalized direction. On an exact
    /// distance tie the earlier-inserted object wins. A zero direction hits
    /// nothing.
    pub fn find_nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let ray = ray.normalized()?;
        let mut nearest: Option<Hit<'_>> = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(distance) = object.intersects(&ray) {
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some(Hit {
                        object,
                        index,
                        distance,
                    });
                }
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{CameraDesc, Color, Material, ObjectDesc, SceneError};
    use glint_math::Vec3;

    fn scene_with(objects: Vec<ObjectDesc>) -> Scene {
        let mut desc = SceneDesc::new(CameraDesc::default(), RenderSettings::default().with_resolution(8, 8));
        desc.objects = objects;
        Scene::new(&desc).unwrap()
    }

    #[test]
    fn test_nearest_of_overlapping_spheres() {
        let near = Material::diffuse(Color::new(1.0, 0.0, 0.0));
        let far = Material::diffuse(Color::new(0.0, 0.0, 1.0));

        // Far sphere inserted first so order alone cannot pick the answer
        let scene = scene_with(vec![
            ObjectDesc::sphere(Vec3::new(0.0, 0.0, -6.0), 2.0, far),
            ObjectDesc::sphere(Vec3::new(0.0, 0.0, -4.0), 1.5, near),
        ]);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene.find_nearest_hit(&ray).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 2.5).abs() < 1e-4);
        assert_eq!(hit.object.material_at(ray.at(hit.distance)).albedo, near.albedo);
    }

    #[test]
    fn test_nearest_is_minimum_over_all_objects() {
        let scene = scene_with(vec![
            ObjectDesc::sphere(Vec3::new(0.3, 0.0, -9.0), 1.0, Material::default()),
            ObjectDesc::sphere(Vec3::new(-0.2, 0.1, -5.0), 1.0, Material::default()),
            ObjectDesc::sphere(Vec3::new(0.0, -0.4, -7.0), 1.0, Material::default()),
            ObjectDesc::checkered_plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
        ]);

        for i in -8..=8 {
            let ray = Ray::new(Vec3::ZERO, Vec3::new(i as f32 * 0.05, -0.1, -1.0));
            let Some(hit) = scene.find_nearest_hit(&ray) else {
                continue;
            };
            for object in scene.objects() {
                if let Some(distance) = object.intersects(&ray) {
                    assert!(hit.distance <= distance);
                }
            }
        }
    }

    #[test]
    fn test_tie_goes_to_first_inserted() {
        let first = Material::diffuse(Color::new(1.0, 0.0, 0.0));
        let second = Material::diffuse(Color::new(0.0, 1.0, 0.0));
        let scene = scene_with(vec![
            ObjectDesc::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, first),
            ObjectDesc::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, second),
        ]);

        let hit = scene.find_nearest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_miss_and_degenerate_ray() {
        let scene = scene_with(vec![ObjectDesc::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default())]);

        assert!(scene.find_nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
        assert!(scene.find_nearest_hit(&Ray::new(Vec3::ZERO, Vec3::ZERO)).is_none());
    }

    #[test]
    fn test_emitters_are_indexed() {
        let scene = scene_with(vec![
            ObjectDesc::sphere(Vec3::ZERO, 1.0, Material::default()),
            ObjectDesc::sphere(Vec3::X * 3.0, 1.0, Material::light(Color::ONE, Color::ONE)),
        ]);
        assert_eq!(scene.emitters(), &[1]);
    }

    #[test]
    fn test_invalid_scene_rejected() {
        let desc = SceneDesc::default().with_object(ObjectDesc::sphere(Vec3::ZERO, 0.0, Material::default()));
        assert!(matches!(Scene::new(&desc), Err(SceneError::InvalidRadius { .. })));
    }
}

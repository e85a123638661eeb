use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is stored as given. Consumers that need a unit vector
/// normalize it themselves, so a ray built from a computed direction is
/// always safe to pass around.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray with a unit-length direction, or `None` for a zero direction.
    #[inline]
    pub fn normalized(&self) -> Option<Ray> {
        self.direction
            .try_normalize()
            .map(|direction| Ray::new(self.origin, direction))
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}

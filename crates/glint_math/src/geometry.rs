//! Closed-form ray/primitive intersection and reflection.
//!
//! All routines are pure. Intersection results are `Some(t)` only when the
//! hit lies strictly in front of the ray origin (`t > EPSILON`).

use crate::{Interval, Vec3};

/// Smallest accepted hit distance. Rejects self-intersection at the origin.
pub const EPSILON: f32 = 1e-4;

/// Normalize `v`, returning `fallback` when `v` has zero (or non-finite) length.
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(fallback)
}

/// Distance along a ray to a sphere, if the ray hits it.
///
/// `dir` must be unit length. The nearer root is preferred; when the origin
/// is inside the sphere (or on its surface) the far root is used instead.
pub fn intersect_ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius_squared: f32) -> Option<f32> {
    let diff = center - origin;
    let t0 = diff.dot(dir);
    let d_squared = diff.dot(diff) - t0 * t0;
    if d_squared > radius_squared {
        return None;
    }

    let t1 = (radius_squared - d_squared).max(0.0).sqrt();
    let t = if t0 > t1 + EPSILON { t0 - t1 } else { t0 + t1 };

    Interval::FORWARD.surrounds(t).then_some(t)
}

/// Distance along a ray to an infinite plane, if the ray hits it.
///
/// Both `dir` and `plane_normal` must be unit length. The plane is one-sided:
/// only rays travelling against the normal (approaching from the side the
/// normal points to) register a hit.
pub fn intersect_ray_plane(origin: Vec3, dir: Vec3, plane_origin: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = dir.dot(plane_normal);
    if denom > -EPSILON {
        return None;
    }

    let t = (plane_origin - origin).dot(plane_normal) / denom;
    Interval::FORWARD.surrounds(t).then_some(t)
}

/// Reflect an incident vector about a unit normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * (2.0 * normal.dot(incident))
}

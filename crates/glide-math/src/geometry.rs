// geometry.rs
//
// Ray type and closed-form ray/plane intersection.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A ray in 3D space: `X(t) = origin + t * direction`.
///
/// `direction` is not required to be normalized; `t` is then measured in
/// multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with the plane through `plane_point` with normal
/// `plane_normal`.
///
/// Solves `N . (X - P) = 0` for the ray `X(t) = O + tD`, giving
/// `t = (N . (P - O)) / (D . N)`, and evaluates the ray at `t`.
///
/// A direction perpendicular to the normal makes the denominator zero; the
/// result then has infinite or NaN components. Callers needing robustness
/// must check `dot(direction, normal)` themselves.
#[inline]
pub fn plane_ray_intersect(ray: Ray, plane_point: Vec3, plane_normal: Vec3) -> Vec3 {
    let denominator = ray.direction.dot(plane_normal);
    let numerator = plane_normal.dot(plane_point - ray.origin);
    ray.at(numerator / denominator)
}

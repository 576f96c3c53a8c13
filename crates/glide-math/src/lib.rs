pub mod geometry;
pub mod numeric;
pub mod smoothing;
pub mod transform;
pub mod vector;

// Re-export key items at crate root for convenience
pub use geometry::{plane_ray_intersect, Ray};
pub use numeric::{clamp01, inverse_lerp, lerp, mod_floor, remap};
pub use smoothing::{smooth_damp, smooth_damp_quat, smooth_damp_vec2, smooth_damp_vec3};
pub use transform::{RectTransform, Transform};
pub use vector::VecExt;

// smoothing.rs
//
// Critically damped smoothing for scalars, vectors, and orientations.
// The caller owns the velocity/derivative state and passes it back in every
// step; the library only updates it. Elapsed time is an explicit parameter.

use glam::{Quat, Vec2, Vec3, Vec4};

/// Smallest characteristic time accepted; shorter values behave like this one.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Move `current` toward `target` without overshooting, over roughly
/// `smooth_time` seconds.
///
/// `velocity` is caller-owned state: pass the same variable every step,
/// starting from 0.0. `dt` is the elapsed time since the previous step and
/// must be positive.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Stable approximation of exp(-omega * dt).
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // The spring must not pass the target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Component-wise [`smooth_damp`] for `Vec2`.
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    Vec2::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
    )
}

/// Component-wise [`smooth_damp`] for `Vec3`.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    Vec3::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
        smooth_damp(current.z, target.z, &mut velocity.z, smooth_time, dt),
    )
}

/// Critically damped smoothing between two orientations.
///
/// Smooths each quaternion component independently and renormalizes, which is
/// cheap and visually indistinguishable from a proper spherical filter for
/// frame-to-frame deltas. `deriv` is caller-owned angular-velocity-like state:
/// pass the same `Vec4` every step, starting from `Vec4::ZERO`.
///
/// Steps with `dt` below `f32::EPSILON` return `current` unchanged, since the
/// per-component damping divides by `dt`.
pub fn smooth_damp_quat(
    current: Quat,
    target: Quat,
    deriv: &mut Vec4,
    smooth_time: f32,
    dt: f32,
) -> Quat {
    if dt < f32::EPSILON {
        return current;
    }

    // q and -q are the same rotation; smoothing component-wise takes the
    // short path only when both lie in the same 4D hemisphere.
    let target = if current.dot(target) > 0.0 { target } else { -target };

    let result = Vec4::new(
        smooth_damp(current.x, target.x, &mut deriv.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut deriv.y, smooth_time, dt),
        smooth_damp(current.z, target.z, &mut deriv.z, smooth_time, dt),
        smooth_damp(current.w, target.w, &mut deriv.w, smooth_time, dt),
    )
    .normalize();

    // Normalization moved the result off the component-wise path; drop the
    // radial part of the derivative so it stays tangent to the unit sphere.
    let deriv_error = deriv.project_onto(result);
    *deriv -= deriv_error;

    Quat::from_vec4(result)
}

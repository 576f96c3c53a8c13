// numeric.rs
//
// Scalar helpers: floored modulo, interpolation, and range remapping.
// No dependencies on scene types — just math.

/// Floored modulo — the non-negative representative of `x mod |m|`.
///
/// Unlike `%`, the result is always in `[0, |m|)`, even for negative `x`.
/// The sign of `m` is ignored. Panics if `m == 0`.
#[inline]
pub fn mod_floor(x: i32, m: i32) -> i32 {
    x.rem_euclid(m)
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fractional position of `v` within `[a, b]` — 0 at `a`, 1 at `b`.
///
/// Extrapolates outside `[0, 1]` when `v` lies outside the interval.
/// Returns 0.0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if a == b {
        0.0
    } else {
        (v - a) / (b - a)
    }
}

/// Clamp a value to `[0, 1]`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Remap `t` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// When `clamp` is false the output extrapolates beyond `[out_min, out_max]`
/// for inputs outside the source interval.
#[inline]
pub fn remap(in_min: f32, in_max: f32, out_min: f32, out_max: f32, t: f32, clamp: bool) -> f32 {
    let mut alpha = inverse_lerp(in_min, in_max, t);
    if clamp {
        alpha = clamp01(alpha);
    }
    lerp(out_min, out_max, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_floor_wraps_negatives() {
        assert_eq!(mod_floor(-7, 3), 2);
        assert_eq!(mod_floor(-1, 4), 3);
        assert_eq!(mod_floor(7, 3), 1);
        assert_eq!(mod_floor(0, 5), 0);
    }

    #[test]
    fn mod_floor_ignores_modulus_sign() {
        assert_eq!(mod_floor(7, -3), mod_floor(7, 3));
        assert_eq!(mod_floor(-7, -3), mod_floor(-7, 3));
    }

    #[test]
    fn mod_floor_in_range_and_congruent() {
        for x in -20..=20 {
            for m in [1, 2, 3, 7, 16] {
                let r = mod_floor(x, m);
                assert!(r >= 0 && r < m, "mod_floor({}, {}) = {}", x, m, r);
                assert_eq!((x - r) % m, 0);
            }
        }
    }

    #[test]
    fn remap_midpoint() {
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 5.0, false), 50.0);
    }

    #[test]
    fn remap_clamped_vs_extrapolated() {
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 15.0, true), 100.0);
        assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 15.0, false), 150.0);
    }

    #[test]
    fn inverse_lerp_degenerate_interval_is_zero() {
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn inverse_lerp_extrapolates() {
        assert_eq!(inverse_lerp(0.0, 10.0, -5.0), -0.5);
        assert_eq!(inverse_lerp(0.0, 10.0, 20.0), 2.0);
    }
}

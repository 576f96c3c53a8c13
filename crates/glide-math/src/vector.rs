// vector.rs
//
// Component-wise extensions for glam's fixed-size vectors.

use glam::{IVec2, IVec3, Vec2, Vec3, Vec4};

/// Component-wise helpers shared by 2D and 3D vectors.
///
/// Implemented for `IVec2`, `IVec3`, `Vec2`, and `Vec3`.
pub trait VecExt: Copy {
    /// The scalar type of the vector's components.
    type Scalar;

    /// Component-wise absolute difference, `abs(self - other)`.
    fn abs_diff(self, other: Self) -> Self;

    /// Sum of all components.
    fn component_sum(self) -> Self::Scalar;

    /// Homogeneous point form: missing components zero-padded, `w = 1`.
    ///
    /// 2D vectors become `(x, y, 0, 1)`, 3D vectors `(x, y, z, 1)` — suitable
    /// for multiplying through an affine transform matrix.
    fn point4(self) -> Vec4;
}

impl VecExt for IVec2 {
    type Scalar = i32;

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn component_sum(self) -> i32 {
        self.element_sum()
    }

    #[inline]
    fn point4(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, 0.0, 1.0)
    }
}

impl VecExt for IVec3 {
    type Scalar = i32;

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn component_sum(self) -> i32 {
        self.element_sum()
    }

    #[inline]
    fn point4(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.z as f32, 1.0)
    }
}

impl VecExt for Vec2 {
    type Scalar = f32;

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn component_sum(self) -> f32 {
        self.element_sum()
    }

    #[inline]
    fn point4(self) -> Vec4 {
        Vec4::new(self.x, self.y, 0.0, 1.0)
    }
}

impl VecExt for Vec3 {
    type Scalar = f32;

    #[inline]
    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn component_sum(self) -> f32 {
        self.element_sum()
    }

    #[inline]
    fn point4(self) -> Vec4 {
        self.extend(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_diff_is_symmetric() {
        let a = IVec2::new(3, -7);
        let b = IVec2::new(-2, 4);
        assert_eq!(a.abs_diff(b), b.abs_diff(a));
        assert_eq!(a.abs_diff(b), IVec2::new(5, 11));
    }

    #[test]
    fn abs_diff_with_self_is_zero() {
        let v = IVec3::new(-4, 9, -1);
        assert_eq!(v.abs_diff(v), IVec3::ZERO);
        let w = Vec3::new(1.5, -2.5, 0.25);
        assert_eq!(w.abs_diff(w), Vec3::ZERO);
    }

    #[test]
    fn abs_diff_from_zero_is_component_abs() {
        let v = IVec2::new(-3, 5);
        assert_eq!(v.abs_diff(IVec2::ZERO), v.abs());
    }

    #[test]
    fn point4_pads_2d_input() {
        assert_eq!(IVec2::new(3, 4).point4(), Vec4::new(3.0, 4.0, 0.0, 1.0));
        assert_eq!(Vec2::new(3.0, 4.0).point4(), Vec4::new(3.0, 4.0, 0.0, 1.0));
    }

    #[test]
    fn point4_keeps_3d_components() {
        assert_eq!(IVec3::new(1, 2, 3).point4(), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).point4(), Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn component_sum_adds_all_axes() {
        assert_eq!(IVec2::new(2, 3).component_sum(), 5);
        assert_eq!(IVec3::new(1, 2, 3).component_sum(), 6);
        assert_eq!(Vec2::new(0.5, 1.5).component_sum(), 2.0);
    }
}

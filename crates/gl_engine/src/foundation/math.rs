//! Math utilities and types
//!
//! Provides the fundamental math types used by the rendering layer.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Orthographic projection matrix for the given clip box
///
/// Matches the OpenGL convention: the box maps to the [-1, 1] NDC cube
/// with the z axis flipped.
#[must_use]
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, znear: f32, zfar: f32) -> Mat4 {
    Mat4::new_orthographic(left, right, bottom, top, znear, zfar)
}

/// Pure translation matrix
#[must_use]
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::new_translation(&offset)
}

/// Model-view-projection composition in the usual right-to-left order
#[must_use]
pub fn mvp(projection: &Mat4, view: &Mat4, model: &Mat4) -> Mat4 {
    projection * view * model
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translation_fills_last_column() {
        let m = translation(Vec3::new(0.3, -0.5, 0.25));
        assert_relative_eq!(m[(0, 3)], 0.3);
        assert_relative_eq!(m[(1, 3)], -0.5);
        assert_relative_eq!(m[(2, 3)], 0.25);
        assert_relative_eq!(m[(3, 3)], 1.0);
        // Rotation/scale block stays identity
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn unit_ortho_preserves_xy_translation() {
        // With the [-1, 1] cube, identity view and a translation-only model,
        // the composed matrix carries the offset straight through.
        let proj = ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        let view = Mat4::identity();
        let model = translation(Vec3::new(0.3, 0.0, 0.0));
        let m = mvp(&proj, &view, &model);
        assert_relative_eq!(m[(0, 3)], 0.3);
        assert_relative_eq!(m[(1, 3)], 0.0);
        assert_relative_eq!(m[(0, 0)], 1.0);
        assert_relative_eq!(m[(1, 1)], 1.0);
    }

    #[test]
    fn mvp_applies_model_before_view() {
        let proj = Mat4::identity();
        let view = translation(Vec3::new(0.0, 1.0, 0.0));
        let model = translation(Vec3::new(1.0, 0.0, 0.0));
        let m = mvp(&proj, &view, &model);
        let p = m.transform_point(&nalgebra::Point3::origin());
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
    }
}

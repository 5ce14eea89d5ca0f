//! Affine transform helpers for the `transform` attribute. Compose them by
//! multiplication; as with any matrix product the right-most transform is
//! applied first.
use nalgebra::{Affine2, Matrix3};

/// Unit matrix. Basically a no-op
pub fn identity() -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::identity())
}

pub fn translate(tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0))
}

/// Rotation in radians, clockwise on screen (y is down).
pub fn rotate(angle: f64) -> Affine2<f64> {
    let (sin, cos) = angle.sin_cos();
    Affine2::from_matrix_unchecked(Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0))
}

pub fn scale(sx: f64, sy: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0))
}

/// SVG `matrix(a b c d e f)` form.
pub fn to_svg(transform: &Affine2<f64>) -> String {
    let m = transform.matrix();
    format!(
        "matrix({} {} {} {} {} {})",
        m[(0, 0)],
        m[(1, 0)],
        m[(0, 1)],
        m[(1, 1)],
        m[(0, 2)],
        m[(1, 2)]
    )
}

mod bounds3;
mod matrix4x4;
mod point3;
mod ray;
mod transform;
mod vector3;

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Scalar type used for every geometric computation
pub type Float = f64;

/// Tolerance used for coarse float equality, for rejecting rays that are
/// (nearly) parallel to a surface and for offsetting hit points off a surface.
pub const EPSILON: Float = 1e-7;

pub use vector3::Vector3;
pub use vector3::Vector3f;

pub use point3::Point3;
pub use point3::Point3f;

pub use ray::Ray;

pub use bounds3::check_axis;
pub use bounds3::Bounds3;
pub use bounds3::Bounds3f;

pub use matrix4x4::Matrix4x4;

pub use transform::Applicable;
pub use transform::Transform;

/// Errors raised while building geometry
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The matrix has a zero determinant and so can not be used as a transform
    #[error("matrix is not invertible (determinant {determinant})")]
    NotInvertible { determinant: Float },
}

/// Compare two floats, allowing for a small amount of rounding error
pub fn coarse_eq(a: Float, b: Float) -> bool {
    a == b || (a - b).abs() < EPSILON
}

/// Solve a quadratic equation ax^2 + bx + c = 0
/// If no real solutions are found, returns None.  If both solutions are the
/// same, that solution will be both return values.  The smaller root is
/// always returned first.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();

    let t0 = (-b - root) / (2.0 * a);
    let t1 = (-b + root) / (2.0 * a);

    Some((t0.min(t1), t0.max(t1)))
}

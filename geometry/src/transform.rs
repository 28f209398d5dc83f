use std::ops::{Mul, MulAssign};

use approx::AbsDiffEq;

use crate::{Bounds3, Float, GeometryError, Matrix4x4, Point3, Ray, Vector3};

/// A 3d transformation matrix representing an affine transformation, along
/// with its inverse.  Immutable once constructed so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    mat: Matrix4x4,
    inv: Matrix4x4,
}

/// Apply a matrix to any type
pub trait Applicable<T> {
    fn apply(&self, other: T) -> T;
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Transform that does not move an object at all
    pub const IDENTITY: Self = Self {
        mat: Matrix4x4::IDENTITY,
        inv: Matrix4x4::IDENTITY,
    };

    /// Construct a transform with the given inverse matrix.  Assumes the inverse
    /// is correct.
    fn new(mat: Matrix4x4, inv: Matrix4x4) -> Self {
        Self { mat, inv }
    }

    /// Create a transformation from its matrix data
    /// fails if the matrix is singular
    pub fn from_mat(data: &Matrix4x4) -> Result<Self, GeometryError> {
        Ok(Self {
            mat: *data,
            inv: data.inverse()?,
        })
    }

    // getters only, so nothing can break inv = mat.inv()

    /// Get the transformation matrix for this transform
    pub fn mat(&self) -> &Matrix4x4 {
        &self.mat
    }

    /// Get the inverse of the transformation matrix of this transform
    pub fn inv(&self) -> &Matrix4x4 {
        &self.inv
    }

    /// Create the inverse of this transform
    pub fn inverse(&self) -> Self {
        Self {
            mat: self.inv,
            inv: self.mat,
        }
    }

    /// Is this transform the identity transform
    pub fn is_identity(&self) -> bool {
        let epsilon = Matrix4x4::default_epsilon();
        self.mat.abs_diff_eq(&Matrix4x4::IDENTITY, epsilon)
    }

    /// Construct a translation matrix
    pub fn translation(delta: Vector3) -> Transform {
        let mat = Matrix4x4::new([
            [1.0, 0.0, 0.0, delta.x],
            [0.0, 1.0, 0.0, delta.y],
            [0.0, 0.0, 1.0, delta.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let inv = Matrix4x4::new([
            [1.0, 0.0, 0.0, -delta.x],
            [0.0, 1.0, 0.0, -delta.y],
            [0.0, 0.0, 1.0, -delta.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Transform::new(mat, inv)
    }

    /// Construct a scale matrix, fails if any factor is zero
    pub fn scale(delta: Vector3) -> Result<Self, GeometryError> {
        let determinant = delta.x * delta.y * delta.z;
        if determinant == 0.0 {
            return Err(GeometryError::NotInvertible { determinant });
        }

        let mat = Matrix4x4::new([
            [delta.x, 0.0, 0.0, 0.0],
            [0.0, delta.y, 0.0, 0.0],
            [0.0, 0.0, delta.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let inv = Matrix4x4::new([
            [1.0 / delta.x, 0.0, 0.0, 0.0],
            [0.0, 1.0 / delta.y, 0.0, 0.0],
            [0.0, 0.0, 1.0 / delta.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Ok(Transform::new(mat, inv))
    }

    /// Rotation matrix around the X axis, angle in radians
    pub fn rotate_x(angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();

        let mat = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Self {
            mat,
            inv: mat.transpose(),
        }
    }

    /// Rotation matrix around the Y axis, angle in radians
    pub fn rotate_y(angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();

        let mat = Matrix4x4::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Self {
            mat,
            inv: mat.transpose(),
        }
    }

    /// Rotation matrix around the Z axis, angle in radians
    pub fn rotate_z(angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();

        let mat = Matrix4x4::new([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Self {
            mat,
            inv: mat.transpose(),
        }
    }

    /// Shear matrix, each component moves in proportion to the other two.
    /// `xy` is the amount x moves in proportion to y and so on.
    pub fn shear(
        xy: Float,
        xz: Float,
        yx: Float,
        yz: Float,
        zx: Float,
        zy: Float,
    ) -> Result<Self, GeometryError> {
        Self::from_mat(&Matrix4x4::new([
            [1.0, xy, xz, 0.0],
            [yx, 1.0, yz, 0.0],
            [zx, zy, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// A view transformation that orients the world relative to an eye at
    /// `from` looking towards `to`, where `up` is roughly upwards.
    /// Fails when the eye looks along the up vector.
    pub fn view(from: Point3, to: Point3, up: Vector3) -> Result<Self, GeometryError> {
        let forward = (to - from).normalise();
        let left = forward.cross(up.normalise());
        let true_up = left.cross(forward);

        let orientation = Matrix4x4::new([
            [left.x, left.y, left.z, 0.0],
            [true_up.x, true_up.y, true_up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let orientation = Self::from_mat(&orientation)?;
        Ok(orientation * Self::translation(Point3::ZERO - from))
    }

    /// Apply this transformation to an object.  Equivalent to self * other
    pub fn apply<U>(&self, other: U) -> U
    where
        Matrix4x4: Applicable<U>,
    {
        self.mat.apply(other)
    }

    /// Apply the inverse of this transformation to an object
    pub fn apply_inverse<U>(&self, other: U) -> U
    where
        Matrix4x4: Applicable<U>,
    {
        self.inv.apply(other)
    }

    /// Transform a surface normal, uses the inverse transpose so the result
    /// stays perpendicular to the transformed surface.  Not normalised.
    pub fn apply_normal(&self, normal: Vector3) -> Vector3 {
        let m = &self.inv;
        let [x, y, z] = normal.to_array();
        let xp = m[0][0] * x + m[1][0] * y + m[2][0] * z;
        let yp = m[0][1] * x + m[1][1] * y + m[2][1] * z;
        let zp = m[0][2] * x + m[1][2] * y + m[2][2] * z;

        Vector3::new(xp, yp, zp)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            mat: self.mat * rhs.mat,
            inv: rhs.inv * self.inv,
        }
    }
}

impl MulAssign<Transform> for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        *self = *self * rhs
    }
}

impl Applicable<Point3> for Matrix4x4 {
    fn apply(&self, other: Point3) -> Point3 {
        let m = self;
        let [x, y, z] = other.to_array();
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];

        if wp == 1.0 {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp / wp, yp / wp, zp / wp)
        }
    }
}

impl Applicable<Vector3> for Matrix4x4 {
    fn apply(&self, other: Vector3) -> Vector3 {
        let m = self;
        let [x, y, z] = other.to_array();
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z;
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z;
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z;

        Vector3::new(xp, yp, zp)
    }
}

impl Applicable<Ray> for Matrix4x4 {
    fn apply(&self, other: Ray) -> Ray {
        Ray::new(self.apply(other.origin), self.apply(other.direction))
    }
}

impl Applicable<Bounds3> for Matrix4x4 {
    fn apply(&self, other: Bounds3) -> Bounds3 {
        other.transform(self)
    }
}

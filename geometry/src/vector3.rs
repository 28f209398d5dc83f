use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::{coarse_eq, Float, EPSILON};

/// Three component direction, the homogeneous w coordinate is implicitly 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

pub type Vector3f = Vector3;

impl Vector3 {
    /// Vector with every component 0
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector pointing along the X axis
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Vector pointing along the Y axis
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Vector pointing along the Z axis
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector with the given components
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with all components being equal
    pub fn splat(val: Float) -> Self {
        Self::new(val, val, val)
    }

    /// Array of all components of the vector
    pub fn to_array(&self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Construct a vector from its (x,y,z) components
    pub fn from_array(data: [Float; 3]) -> Self {
        Self::new(data[0], data[1], data[2])
    }

    /// Component-wise absolute value of the vector
    pub fn abs(&self) -> Self {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Calculate the dot product of two vectors
    #[inline]
    pub fn dot(&self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Calculate the cross product of two vectors
    pub fn cross(&self, rhs: Self) -> Self {
        Vector3::new(
            (self.y * rhs.z) - (self.z * rhs.y),
            (self.z * rhs.x) - (self.x * rhs.z),
            (self.x * rhs.y) - (self.y * rhs.x),
        )
    }

    /// Square of the length of the vector
    pub fn length_square(&self) -> Float {
        self.dot(*self)
    }

    /// Length of the vector
    pub fn length(&self) -> Float {
        self.length_square().sqrt()
    }

    /// Unit vector/Normalise the vector.  The vector must not have zero length.
    pub fn normalise(&self) -> Self {
        *self / self.length()
    }

    /// Reflect this vector around the given normal
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * (2.0 * self.dot(normal))
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        coarse_eq(self.x, other.x) && coarse_eq(self.y, other.y) && coarse_eq(self.z, other.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl Index<usize> for Vector3 {
    type Output = Float;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        [&self.x, &self.y, &self.z][index]
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Float> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Float) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for Float {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<Float> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        *self = *self * rhs;
    }
}

impl Div<Float> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Float) -> Self::Output {
        let inv = 1.0 / rhs;
        Vector3::new(self.x * inv, self.y * inv, self.z * inv)
    }
}

impl DivAssign<Float> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: Float) {
        *self = *self / rhs;
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

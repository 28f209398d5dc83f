use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::{coarse_eq, Float, Vector3, EPSILON};

/// Three dimensional cartesian coordinate, the homogeneous w coordinate is
/// implicitly 1
#[derive(Debug, Clone, Copy, Default)]
pub struct Point3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

pub type Point3f = Point3;

impl Point3 {
    /// A point at (0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Point at positive infinity on every axis
    pub const INFINITY: Self = Self::new(Float::INFINITY, Float::INFINITY, Float::INFINITY);

    /// Point at negative infinity on every axis
    pub const NEG_INFINITY: Self = Self::new(
        Float::NEG_INFINITY,
        Float::NEG_INFINITY,
        Float::NEG_INFINITY,
    );

    /// Create a new point at the given location
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Array of all coordinates of the point
    pub fn to_array(&self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Construct a point from its (x,y,z) coordinates
    pub fn from_array(data: [Float; 3]) -> Self {
        Self::new(data[0], data[1], data[2])
    }

    /// Component-wise absolute value of the point
    pub fn abs(&self) -> Self {
        Point3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise minimum of two points
    pub fn min(&self, rhs: Self) -> Self {
        Point3::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    /// Component-wise maximum of two points
    pub fn max(&self, rhs: Self) -> Self {
        Point3::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Self) -> bool {
        coarse_eq(self.x, other.x) && coarse_eq(self.y, other.y) && coarse_eq(self.z, other.z)
    }
}

impl AbsDiffEq for Point3 {
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

impl Index<usize> for Point3 {
    type Output = Float;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        [&self.x, &self.y, &self.z][index]
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, rhs: Vector3) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vector3> for Point3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign<Vector3> for Point3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

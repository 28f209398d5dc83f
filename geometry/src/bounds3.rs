use std::ops::Index;

use crate::{Applicable, Float, Matrix4x4, Point3, Ray, Vector3, EPSILON};

/// 3D Axis aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

pub type Bounds3f = Bounds3;

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds3 {
    /// Bounds that contain nothing, adding anything to this produces a box
    /// exactly containing the added object
    pub const EMPTY: Self = Self {
        min: Point3::INFINITY,
        max: Point3::NEG_INFINITY,
    };

    /// Create a bounds that contains both the given points
    pub fn new(p1: Point3, p2: Point3) -> Self {
        Self {
            min: p1.min(p2),
            max: p1.max(p2),
        }
    }

    /// Does this box contain no points at all
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the coordinates of one corner of the bounds
    pub fn corner(&self, corner: usize) -> Point3 {
        Point3::new(
            self[corner & 1].x,
            self[(corner & 2) >> 1].y,
            self[(corner & 4) >> 2].z,
        )
    }

    /// Expand the bounds to include the point
    pub fn add_point(&mut self, point: Point3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Expand the bounds to include another box
    pub fn add_box(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Is the given point inside self, including the boundary walls
    pub fn contains_point(&self, point: Point3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    /// Is the other box entirely inside self
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Get a vector from the minimum to the maximum points of the bounds
    pub fn diagonal(&self) -> Vector3 {
        self.max - self.min
    }

    /// Index of the longest axis (x = 0; y = 1; z = 2), ties prefer the
    /// earlier axis
    pub fn maximum_extent(&self) -> usize {
        let diagonal = self.diagonal();
        if diagonal.x >= diagonal.y && diagonal.x >= diagonal.z {
            0
        } else if diagonal.y >= diagonal.z {
            1
        } else {
            2
        }
    }

    /// Box containing all eight transformed corners of self.  Not tight
    /// under rotation.
    pub fn transform(&self, mat: &Matrix4x4) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }

        let mut res = Self::EMPTY;
        for corner in 0..8 {
            res.add_point(mat.apply(self.corner(corner)));
        }
        res
    }

    /// Does the ray pass through the box at any non-negative distance
    pub fn intersects(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let (xmin, xmax) = check_axis(ray.origin.x, ray.direction.x, self.min.x, self.max.x);
        let (ymin, ymax) = check_axis(ray.origin.y, ray.direction.y, self.min.y, self.max.y);
        let (zmin, zmax) = check_axis(ray.origin.z, ray.direction.z, self.min.z, self.max.z);

        let tmin = xmin.max(ymin).max(zmin);
        let tmax = xmax.min(ymax).min(zmax);

        !(tmin > tmax || tmax < 0.0)
    }

    /// Split the box in half across its longest axis.  Both halves share
    /// the midpoint plane.
    pub fn split_bounds(&self) -> (Self, Self) {
        let axis = self.maximum_extent();
        // halves summed separately so unbounded boxes do not overflow
        let mid = self.min[axis] * 0.5 + self.max[axis] * 0.5;

        let mut left_max = self.max.to_array();
        left_max[axis] = mid;
        let mut right_min = self.min.to_array();
        right_min[axis] = mid;

        (
            Self::new(self.min, Point3::from_array(left_max)),
            Self::new(Point3::from_array(right_min), self.max),
        )
    }
}

/// Entry and exit distances of a ray against one pair of parallel slab faces,
/// ordered so the entry is first
pub fn check_axis(origin: Float, direction: Float, min: Float, max: Float) -> (Float, Float) {
    let tmin_numerator = min - origin;
    let tmax_numerator = max - origin;

    let (tmin, tmax) = if direction.abs() >= EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (tmin_numerator * Float::MAX, tmax_numerator * Float::MAX)
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

impl Index<usize> for Bounds3 {
    type Output = Point3;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index == 0 || index == 1);
        if index == 0 {
            &self.min
        } else {
            &self.max
        }
    }
}

use crate::{Float, Point3, Vector3};

/// Ray with an origin and a direction from the origin, parameterised as
/// `origin + t * direction`.  The direction is not required to be normalised.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with a given origin and direction
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Calculate a point at t distance along the ray
    pub fn at(&self, t: Float) -> Point3 {
        self.origin + self.direction * t
    }
}

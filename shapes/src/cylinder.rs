use geometry::{quadratic, Bounds3, Float, Point3, Ray, Vector3, EPSILON};

use crate::{Intersections, LocalShape, ShapeId};

/// Cylinder of radius 1 around the y axis, truncated to `min < y < max`
/// and optionally capped at both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub min: Float,
    pub max: Float,
    pub closed: bool,
}

impl Default for Cylinder {
    /// Infinite, open cylinder
    fn default() -> Self {
        Self {
            min: Float::NEG_INFINITY,
            max: Float::INFINITY,
            closed: false,
        }
    }
}

impl Cylinder {
    pub fn new(min: Float, max: Float, closed: bool) -> Self {
        Self { min, max, closed }
    }
}

impl LocalShape for Cylinder {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        let (o, d) = (ray.origin, ray.direction);
        let a = d.x * d.x + d.z * d.z;

        // parallel to the y axis, can only hit the caps
        if a.abs() >= EPSILON {
            let b = 2.0 * o.x * d.x + 2.0 * o.z * d.z;
            let c = o.x * o.x + o.z * o.z - 1.0;

            if let Some((t0, t1)) = quadratic(a, b, c) {
                for t in [t0, t1] {
                    let y = o.y + t * d.y;
                    if self.min < y && y < self.max {
                        xs.push(t, id);
                    }
                }
            }
        }

        if !self.closed || d.y.abs() < EPSILON {
            return;
        }

        for y in [self.min, self.max] {
            let t = (y - o.y) / d.y;
            let x = o.x + t * d.x;
            let z = o.z + t * d.z;
            if x * x + z * z <= 1.0 {
                xs.push(t, id);
            }
        }
    }

    fn local_normal_at(&self, point: Point3) -> Vector3 {
        let dist = point.x * point.x + point.z * point.z;

        if dist < 1.0 && point.y >= self.max - EPSILON {
            Vector3::Y
        } else if dist < 1.0 && point.y <= self.min + EPSILON {
            -Vector3::Y
        } else {
            Vector3::new(point.x, 0.0, point.z)
        }
    }

    fn object_bound(&self) -> Bounds3 {
        Bounds3::new(
            Point3::new(-1.0, self.min.max(-Float::MAX), -1.0),
            Point3::new(1.0, self.max.min(Float::MAX), 1.0),
        )
    }
}

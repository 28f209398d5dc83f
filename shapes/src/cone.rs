use geometry::{quadratic, Bounds3, Float, Point3, Ray, Vector3, EPSILON};

use crate::{Intersections, LocalShape, ShapeId};

/// Double napped cone `x^2 + z^2 = y^2` with its apex at the origin,
/// truncated to `min < y < max` and optionally capped at both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub min: Float,
    pub max: Float,
    pub closed: bool,
}

impl Default for Cone {
    /// Infinite, open cone
    fn default() -> Self {
        Self {
            min: Float::NEG_INFINITY,
            max: Float::INFINITY,
            closed: false,
        }
    }
}

impl Cone {
    pub fn new(min: Float, max: Float, closed: bool) -> Self {
        Self { min, max, closed }
    }

    fn in_range(&self, y: Float) -> bool {
        self.min < y && y < self.max
    }
}

impl LocalShape for Cone {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        let (o, d) = (ray.origin, ray.direction);
        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2.0 * o.x * d.x - 2.0 * o.y * d.y + 2.0 * o.z * d.z;
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        if a.abs() < EPSILON {
            // parallel to one of the halves, a single hit on the other
            if b.abs() >= EPSILON {
                let t = -c / (2.0 * b);
                if self.in_range(o.y + t * d.y) {
                    xs.push(t, id);
                }
            }
        } else if let Some((t0, t1)) = quadratic(a, b, c) {
            for t in [t0, t1] {
                if self.in_range(o.y + t * d.y) {
                    xs.push(t, id);
                }
            }
        }

        if !self.closed || d.y.abs() < EPSILON {
            return;
        }

        // cap radius is the distance of the cap from the apex
        for y in [self.min, self.max] {
            let t = (y - o.y) / d.y;
            let x = o.x + t * d.x;
            let z = o.z + t * d.z;
            if x * x + z * z <= y * y {
                xs.push(t, id);
            }
        }
    }

    fn local_normal_at(&self, point: Point3) -> Vector3 {
        let dist = point.x * point.x + point.z * point.z;

        if dist < self.max * self.max && point.y >= self.max - EPSILON {
            Vector3::Y
        } else if dist < self.min * self.min && point.y <= self.min + EPSILON {
            -Vector3::Y
        } else {
            let mut y = dist.sqrt();
            if point.y > 0.0 {
                y = -y;
            }
            Vector3::new(point.x, y, point.z).normalise()
        }
    }

    fn object_bound(&self) -> Bounds3 {
        let limit = self.min.abs().max(self.max.abs()).min(Float::MAX);

        Bounds3::new(
            Point3::new(-limit, self.min.max(-Float::MAX), -limit),
            Point3::new(limit, self.max.min(Float::MAX), limit),
        )
    }
}

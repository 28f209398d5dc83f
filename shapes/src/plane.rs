use geometry::{Bounds3, Float, Point3, Ray, Vector3, EPSILON};

use crate::{Intersections, LocalShape, ShapeId};

/// The infinite xz plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl LocalShape for Plane {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        if ray.direction.y.abs() < EPSILON {
            return;
        }

        xs.push(-ray.origin.y / ray.direction.y, id);
    }

    fn local_normal_at(&self, _: Point3) -> Vector3 {
        Vector3::Y
    }

    /// Unbounded in x and z, uses the largest finite float so the box can
    /// still be transformed and split
    fn object_bound(&self) -> Bounds3 {
        Bounds3::new(
            Point3::new(-Float::MAX, 0.0, -Float::MAX),
            Point3::new(Float::MAX, 0.0, Float::MAX),
        )
    }
}

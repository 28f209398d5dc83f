use geometry::{quadratic, Bounds3, Point3, Ray, Vector3};

use crate::{Intersections, LocalShape, ShapeId};

/// Unit sphere centred at the origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere;

impl LocalShape for Sphere {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        let sphere_to_ray = ray.origin - Point3::ZERO;
        let a = ray.direction.length_square();
        let b = 2.0 * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.length_square() - 1.0;

        // a tangent ray reports the same distance twice
        if let Some((t0, t1)) = quadratic(a, b, c) {
            xs.push(t0, id);
            xs.push(t1, id);
        }
    }

    fn local_normal_at(&self, point: Point3) -> Vector3 {
        point - Point3::ZERO
    }

    fn object_bound(&self) -> Bounds3 {
        Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }
}

use geometry::{check_axis, Bounds3, Point3, Ray, Vector3};

use crate::{Intersections, LocalShape, ShapeId};

/// Axis aligned cube from -1 to 1 on every axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube;

impl LocalShape for Cube {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        let (xmin, xmax) = check_axis(ray.origin.x, ray.direction.x, -1.0, 1.0);
        let (ymin, ymax) = check_axis(ray.origin.y, ray.direction.y, -1.0, 1.0);
        let (zmin, zmax) = check_axis(ray.origin.z, ray.direction.z, -1.0, 1.0);

        let tmin = xmin.max(ymin).max(zmin);
        let tmax = xmax.min(ymax).min(zmax);

        if tmin <= tmax && tmax >= 0.0 {
            xs.push(tmin, id);
            xs.push(tmax, id);
        }
    }

    fn local_normal_at(&self, point: Point3) -> Vector3 {
        let abs = point.abs();
        let max = abs.x.max(abs.y).max(abs.z);

        if max == abs.x {
            Vector3::new(point.x, 0.0, 0.0)
        } else if max == abs.y {
            Vector3::new(0.0, point.y, 0.0)
        } else {
            Vector3::new(0.0, 0.0, point.z)
        }
    }

    fn object_bound(&self) -> Bounds3 {
        Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }
}

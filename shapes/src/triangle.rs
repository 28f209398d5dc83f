use geometry::{Bounds3, Point3, Ray, Vector3, EPSILON};

use crate::{Intersections, LocalShape, ShapeId};

/// Flat triangle between three points, the edges and normal are calculated
/// once on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p1: Point3,
    p2: Point3,
    p3: Point3,
    e1: Vector3,
    e2: Vector3,
    normal: Vector3,
}

impl Triangle {
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;

        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal: e2.cross(e1).normalise(),
        }
    }

    pub fn points(&self) -> [Point3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Edges from the first point to the second and third points
    pub fn edges(&self) -> (Vector3, Vector3) {
        (self.e1, self.e2)
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl LocalShape for Triangle {
    /// Moller-Trumbore intersection
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        let dir_cross_e2 = ray.direction.cross(self.e2);
        let det = self.e1.dot(dir_cross_e2);
        if det.abs() < EPSILON {
            return;
        }

        let f = 1.0 / det;
        let p1_to_origin = ray.origin - self.p1;
        let u = f * p1_to_origin.dot(dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return;
        }

        let origin_cross_e1 = p1_to_origin.cross(self.e1);
        let v = f * ray.direction.dot(origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return;
        }

        xs.push(f * self.e2.dot(origin_cross_e1), id);
    }

    fn local_normal_at(&self, _: Point3) -> Vector3 {
        self.normal
    }

    fn object_bound(&self) -> Bounds3 {
        let mut bounds = Bounds3::new(self.p1, self.p2);
        bounds.add_point(self.p3);
        bounds
    }
}

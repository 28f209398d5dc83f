use geometry::{Bounds3, Point3, Ray, Vector3};

use crate::{Cone, Cube, Cylinder, Intersections, Plane, ShapeId, Sphere, Triangle};

/// Geometry of a single leaf shape, in its own untransformed space
pub trait LocalShape {
    /// Append every hit of the ray against the shape to the accumulator,
    /// tagged with `id`.  Hits are not sorted.
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections);

    /// Surface normal at a point on the shape
    fn local_normal_at(&self, point: Point3) -> Vector3;

    /// Get the bounding box of the shape in object space
    fn object_bound(&self) -> Bounds3;
}

/// Every kind of leaf shape
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
    Cylinder(Cylinder),
    Cone(Cone),
    Triangle(Triangle),
}

impl Primitive {
    fn as_local(&self) -> &dyn LocalShape {
        match self {
            Primitive::Sphere(s) => s,
            Primitive::Plane(s) => s,
            Primitive::Cube(s) => s,
            Primitive::Cylinder(s) => s,
            Primitive::Cone(s) => s,
            Primitive::Triangle(s) => s,
        }
    }
}

impl LocalShape for Primitive {
    fn local_intersect(&self, ray: &Ray, id: ShapeId, xs: &mut Intersections) {
        self.as_local().local_intersect(ray, id, xs)
    }

    fn local_normal_at(&self, point: Point3) -> Vector3 {
        self.as_local().local_normal_at(point)
    }

    fn object_bound(&self) -> Bounds3 {
        self.as_local().object_bound()
    }
}

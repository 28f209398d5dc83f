mod computed_hit;
mod cone;
mod csg;
mod cube;
mod cylinder;
mod group;
mod intersection;
mod plane;
mod primitive;
mod shape;
mod sphere;
mod triangle;

#[cfg(test)]
mod tests;

pub use computed_hit::ComputedHit;

pub use intersection::Intersection;
pub use intersection::Intersections;

pub use primitive::LocalShape;
pub use primitive::Primitive;

pub use shape::Shape;
pub use shape::ShapeArena;
pub use shape::ShapeError;
pub use shape::ShapeId;
pub use shape::ShapeKind;

pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

pub use csg::Csg;
pub use csg::CsgOperation;
pub use group::Group;

mod groups;

use geometry::{Float, Point3, Ray, Vector3};

use crate::{Intersections, Shape, ShapeArena, ShapeId};

/// Ray with a normalised direction
pub fn ray(origin: [Float; 3], direction: [Float; 3]) -> Ray {
    Ray::new(
        Point3::from_array(origin),
        Vector3::from_array(direction).normalise(),
    )
}

/// Arena holding a single shape
pub fn single(shape: Shape) -> (ShapeArena, ShapeId) {
    let mut arena = ShapeArena::new();
    let id = arena.add(shape).unwrap();
    (arena, id)
}

/// Sorted hit distances of a ray against a shape
pub fn hits(arena: &ShapeArena, id: ShapeId, ray: &Ray) -> Vec<Float> {
    let mut xs = Intersections::new();
    arena.intersect(id, ray, &mut xs);
    xs.sort();
    xs.iter().map(|x| x.t).collect()
}

pub fn assert_hits(actual: &[Float], expected: &[Float]) {
    assert_eq!(actual.len(), expected.len(), "{:?} != {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
    }
}

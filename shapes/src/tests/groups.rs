use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use geometry::{Point3, Transform, Vector3};

use super::{hits, ray};
use crate::{Intersections, Shape, ShapeArena, ShapeError, ShapeId, ShapeKind};

fn translated_sphere(arena: &mut ShapeArena, x: f64, y: f64, z: f64) -> ShapeId {
    let t = Transform::translation(Vector3::new(x, y, z));
    arena.add(Shape::sphere().with_transform(t)).unwrap()
}

fn children(arena: &ShapeArena, id: ShapeId) -> Vec<ShapeId> {
    match arena[id].kind() {
        ShapeKind::Group(g) => g.children().to_vec(),
        kind => panic!("{:?} is not a group", kind),
    }
}

/// A sphere inside a scaled group inside a rotated group
fn nested() -> (ShapeArena, ShapeId) {
    let mut arena = ShapeArena::new();
    let rotate = Transform::rotate_y(FRAC_PI_2);
    let scale = Transform::scale(Vector3::new(1.0, 2.0, 3.0)).unwrap();
    let g1 = arena.add(Shape::group().with_transform(rotate)).unwrap();
    let g2 = arena.add(Shape::group().with_transform(scale)).unwrap();
    let s = translated_sphere(&mut arena, 5.0, 0.0, 0.0);
    arena.add_child(g1, g2).unwrap();
    arena.add_child(g2, s).unwrap();
    (arena, s)
}

#[test]
fn empty_group() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    assert!(children(&arena, g).is_empty());
    assert!(arena.object_bound(g).is_empty());
    let r = ray([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
    assert!(hits(&arena, g, &r).is_empty());
}

#[test]
fn adding_children_sets_parent() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s = arena.add(Shape::sphere()).unwrap();
    arena.add_child(g, s).unwrap();

    assert_eq!(children(&arena, g), vec![s]);
    assert_eq!(arena[s].parent(), Some(g));
    assert!(arena.includes(g, s));
    assert!(arena.includes(s, s));
    assert!(!arena.includes(s, g));
}

#[test]
fn invalid_children() {
    let mut arena = ShapeArena::new();
    let g1 = arena.add(Shape::group()).unwrap();
    let g2 = arena.add(Shape::group()).unwrap();
    let s = arena.add(Shape::sphere()).unwrap();

    assert_eq!(arena.add_child(s, g1), Err(ShapeError::NotAGroup(s)));

    arena.add_child(g1, s).unwrap();
    assert_eq!(arena.add_child(g2, s), Err(ShapeError::AlreadyAttached(s)));

    arena.add_child(g1, g2).unwrap();
    assert_eq!(arena.add_child(g2, g1), Err(ShapeError::Cycle(g1)));
    assert_eq!(arena.add_child(g1, g1), Err(ShapeError::Cycle(g1)));
}

#[test]
fn group_hits_sorted() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s1 = arena.add(Shape::sphere()).unwrap();
    let s2 = translated_sphere(&mut arena, 0.0, 0.0, -3.0);
    let s3 = translated_sphere(&mut arena, 5.0, 0.0, 0.0);
    for s in [s1, s2, s3] {
        arena.add_child(g, s).unwrap();
    }

    let mut xs = Intersections::new();
    arena.intersect(g, &ray([0.0, 0.0, -5.0], [0.0, 0.0, 1.0]), &mut xs);

    let shapes: Vec<_> = xs.iter().map(|x| x.shape).collect();
    assert_eq!(shapes, vec![s2, s2, s1, s1]);
    assert!(xs.as_slice().windows(2).all(|w| w[0].t <= w[1].t));
}

#[test]
fn transformed_group() {
    let mut arena = ShapeArena::new();
    let scale = Transform::scale(Vector3::splat(2.0)).unwrap();
    let g = arena.add(Shape::group().with_transform(scale)).unwrap();
    let s = translated_sphere(&mut arena, 5.0, 0.0, 0.0);
    arena.add_child(g, s).unwrap();

    assert_eq!(
        hits(&arena, g, &ray([10.0, 0.0, -10.0], [0.0, 0.0, 1.0])).len(),
        2
    );
}

#[test]
fn world_to_object_through_parents() {
    let mut arena = ShapeArena::new();
    let rotate = Transform::rotate_y(FRAC_PI_2);
    let scale = Transform::scale(Vector3::splat(2.0)).unwrap();
    let g1 = arena.add(Shape::group().with_transform(rotate)).unwrap();
    let g2 = arena.add(Shape::group().with_transform(scale)).unwrap();
    let s = translated_sphere(&mut arena, 5.0, 0.0, 0.0);
    arena.add_child(g1, g2).unwrap();
    arena.add_child(g2, s).unwrap();

    assert_abs_diff_eq!(
        arena.world_to_object(s, Point3::new(-2.0, 0.0, -10.0)),
        Point3::new(0.0, 0.0, -1.0),
        epsilon = 1e-9
    );
}

#[test]
fn child_normal() {
    let (arena, s) = nested();

    let third = 3.0f64.sqrt() / 3.0;
    assert_abs_diff_eq!(
        arena.normal_to_world(s, Vector3::splat(third)),
        Vector3::new(0.2857, 0.4286, -0.8571),
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(
        arena.normal_at(s, Point3::new(1.7321, 1.1547, -5.5774)),
        Vector3::new(0.2857, 0.4286, -0.8571),
        epsilon = 1e-4
    );
}

#[test]
fn bounds_follow_children() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s = arena
        .add(
            Shape::sphere().with_transform(
                Transform::translation(Vector3::new(2.0, 5.0, -3.0))
                    * Transform::scale(Vector3::splat(2.0)).unwrap(),
            ),
        )
        .unwrap();
    let c = arena
        .add(Shape::cylinder(-2.0, 2.0, false).with_transform(
            Transform::translation(Vector3::new(-4.0, -1.0, 4.0))
                * Transform::scale(Vector3::new(0.5, 1.0, 0.5)).unwrap(),
        ))
        .unwrap();
    arena.add_child(g, s).unwrap();
    arena.add_child(g, c).unwrap();

    let b = arena.object_bound(g);
    assert_abs_diff_eq!(b.min, Point3::new(-4.5, -3.0, -5.0));
    assert_abs_diff_eq!(b.max, Point3::new(4.0, 7.0, 4.5));

    // moving a child shrinks the group again
    arena.set_transform(s, Transform::IDENTITY);
    let b = arena.object_bound(g);
    assert_abs_diff_eq!(b.min, Point3::new(-4.5, -3.0, -1.0));
    assert_abs_diff_eq!(b.max, Point3::new(1.0, 1.0, 4.5));
}

#[test]
fn nested_bounds_propagate() {
    let mut arena = ShapeArena::new();
    let outer = arena.add(Shape::group()).unwrap();
    let shift = Transform::translation(Vector3::new(10.0, 0.0, 0.0));
    let inner = arena.add(Shape::group().with_transform(shift)).unwrap();
    arena.add_child(outer, inner).unwrap();

    // added after the inner group is already attached
    let s = arena.add(Shape::sphere()).unwrap();
    arena.add_child(inner, s).unwrap();

    let b = arena.object_bound(outer);
    assert_abs_diff_eq!(b.min, Point3::new(9.0, -1.0, -1.0));
    assert_abs_diff_eq!(b.max, Point3::new(11.0, 1.0, 1.0));
    assert_eq!(
        hits(&arena, outer, &ray([10.0, 0.0, -5.0], [0.0, 0.0, 1.0])).len(),
        2
    );
}

#[test]
fn partition_children() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s1 = translated_sphere(&mut arena, -2.0, 0.0, 0.0);
    let s2 = translated_sphere(&mut arena, 2.0, 0.0, 0.0);
    let s3 = arena.add(Shape::sphere()).unwrap();
    for s in [s1, s2, s3] {
        arena.add_child(g, s).unwrap();
    }

    arena.divide(g, 3);

    let top = children(&arena, g);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0], s3);
    assert_eq!(children(&arena, top[1]), vec![s1]);
    assert_eq!(children(&arena, top[2]), vec![s2]);
    assert_eq!(arena[s1].parent(), Some(top[1]));
    assert_eq!(arena[top[1]].parent(), Some(g));
}

#[test]
fn subdivide_recursively() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s1 = translated_sphere(&mut arena, -2.0, -2.0, 0.0);
    let s2 = translated_sphere(&mut arena, -2.0, 2.0, 0.0);
    let scale = Transform::scale(Vector3::splat(4.0)).unwrap();
    let s3 = arena.add(Shape::sphere().with_transform(scale)).unwrap();
    for s in [s1, s2, s3] {
        arena.add_child(g, s).unwrap();
    }

    arena.divide(g, 1);

    let top = children(&arena, g);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0], s3);

    let sub = children(&arena, top[1]);
    assert_eq!(sub.len(), 2);
    assert_eq!(children(&arena, sub[0]), vec![s1]);
    assert_eq!(children(&arena, sub[1]), vec![s2]);
}

#[test]
fn small_group_not_divided() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let s1 = translated_sphere(&mut arena, -2.0, 0.0, 0.0);
    let s2 = translated_sphere(&mut arena, 2.0, 0.0, 0.0);
    arena.add_child(g, s1).unwrap();
    arena.add_child(g, s2).unwrap();

    arena.divide(g, 3);
    assert_eq!(children(&arena, g), vec![s1, s2]);

    arena.divide(g, 0);
    assert_eq!(children(&arena, g), vec![s1, s2]);
}

#[test]
fn identical_children_terminate() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    for _ in 0..5 {
        let s = arena
            .add(Shape::triangle(Point3::ZERO, Point3::ZERO, Point3::ZERO))
            .unwrap();
        arena.add_child(g, s).unwrap();
    }

    arena.divide(g, 1);
    assert_eq!(children(&arena, g).len(), 5);
}

#[test]
fn divide_keeps_hits() {
    let mut arena = ShapeArena::new();
    let g = arena.add(Shape::group()).unwrap();
    let below = Transform::translation(Vector3::new(0.0, -3.0, 0.0));
    let floor = arena.add(Shape::plane().with_transform(below)).unwrap();
    arena.add_child(g, floor).unwrap();

    for i in 0..8 {
        for j in 0..8 {
            let s = arena
                .add(
                    Shape::sphere().with_transform(
                        Transform::translation(Vector3::new(
                            i as f64 * 3.0 - 12.0,
                            (i + j) as f64 * 0.25,
                            j as f64 * 3.0 - 12.0,
                        )) * Transform::scale(Vector3::splat(0.9)).unwrap(),
                    ),
                )
                .unwrap();
            arena.add_child(g, s).unwrap();
        }
    }

    let mut rays: Vec<_> = (0..50)
        .map(|k| {
            let k = k as f64;
            ray(
                [-15.0 + k * 0.6, 10.0, -20.0],
                [0.1 * (k % 7.0 - 3.0), -0.4, 1.0],
            )
        })
        .collect();
    // straight through the middle row of spheres
    rays.push(ray([0.0, 2.0, -20.0], [0.0, 0.0, 1.0]));
    let before: Vec<_> = rays.iter().map(|r| hits(&arena, g, r)).collect();

    arena.divide(g, 4);
    assert!(children(&arena, g).len() < 65);

    let after: Vec<_> = rays.iter().map(|r| hits(&arena, g, r)).collect();
    assert_eq!(before, after);
    assert!(before.iter().any(|h| h.len() > 2));
}

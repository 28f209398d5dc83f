use std::f64::consts::FRAC_PI_4;

use approx::assert_abs_diff_eq;

use crate::{Bounds3f, Point3f, Ray, Transform, Vector3f};

#[test]
fn empty_box() {
    let b = Bounds3f::EMPTY;
    assert!(b.is_empty());
    assert!(!b.contains_point(Point3f::ZERO));
    assert!(!b.intersects(&Ray::new(Point3f::ZERO, Vector3f::X)));
    assert!(b.transform(Transform::rotate_x(1.0).mat()).is_empty());
}

#[test]
fn add_points() {
    let mut b = Bounds3f::EMPTY;
    b.add_point(Point3f::new(-5.0, 2.0, 0.0));
    b.add_point(Point3f::new(7.0, 0.0, -3.0));

    assert_eq!(b.min, Point3f::new(-5.0, 0.0, -3.0));
    assert_eq!(b.max, Point3f::new(7.0, 2.0, 0.0));
}

#[test]
fn add_boxes() {
    let mut a = Bounds3f::new(Point3f::new(-5.0, -2.0, 0.0), Point3f::new(7.0, 4.0, 4.0));
    let b = Bounds3f::new(Point3f::new(8.0, -7.0, -2.0), Point3f::new(14.0, 2.0, 8.0));
    a.add_box(&b);
    assert_eq!(a.min, Point3f::new(-5.0, -7.0, -2.0));
    assert_eq!(a.max, Point3f::new(14.0, 4.0, 8.0));

    let before = a;
    a.add_box(&Bounds3f::EMPTY);
    assert_eq!(a, before);
}

#[test]
fn containment() {
    let b = Bounds3f::new(Point3f::new(5.0, -2.0, 0.0), Point3f::new(11.0, 4.0, 7.0));
    let points = [
        (Point3f::new(5.0, -2.0, 0.0), true),
        (Point3f::new(11.0, 4.0, 7.0), true),
        (Point3f::new(8.0, 1.0, 3.0), true),
        (Point3f::new(3.0, 0.0, 3.0), false),
        (Point3f::new(8.0, -4.0, 3.0), false),
        (Point3f::new(8.0, 1.0, -1.0), false),
        (Point3f::new(13.0, 1.0, 3.0), false),
        (Point3f::new(8.0, 5.0, 3.0), false),
        (Point3f::new(8.0, 1.0, 8.0), false),
    ];
    for (point, expected) in points {
        assert_eq!(b.contains_point(point), expected, "{:?}", point);
    }

    let boxes = [
        (Point3f::new(5.0, -2.0, 0.0), Point3f::new(11.0, 4.0, 7.0), true),
        (Point3f::new(6.0, -1.0, 1.0), Point3f::new(10.0, 3.0, 6.0), true),
        (Point3f::new(4.0, -3.0, -1.0), Point3f::new(10.0, 3.0, 6.0), false),
        (Point3f::new(6.0, -1.0, 1.0), Point3f::new(12.0, 5.0, 8.0), false),
    ];
    for (min, max, expected) in boxes {
        assert_eq!(b.contains_box(&Bounds3f::new(min, max)), expected);
    }
}

#[test]
fn transform_box() {
    let b = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
    let t = Transform::rotate_x(FRAC_PI_4) * Transform::rotate_y(FRAC_PI_4);
    let res = t.apply(b);

    assert_abs_diff_eq!(
        res.min,
        Point3f::new(-1.41421, -1.70711, -1.70711),
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(
        res.max,
        Point3f::new(1.41421, 1.70711, 1.70711),
        epsilon = 1e-5
    );
}

#[test]
fn ray_intersects_cube() {
    let b = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
    let cases = [
        (Point3f::new(5.0, 0.5, 0.0), Vector3f::new(-1.0, 0.0, 0.0), true),
        (Point3f::new(-5.0, 0.5, 0.0), Vector3f::new(1.0, 0.0, 0.0), true),
        (Point3f::new(0.5, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), true),
        (Point3f::new(0.5, -5.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), true),
        (Point3f::new(0.5, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0), true),
        (Point3f::new(0.5, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), true),
        (Point3f::new(0.0, 0.5, 0.0), Vector3f::new(0.0, 0.0, 1.0), true),
        (Point3f::new(-2.0, 0.0, 0.0), Vector3f::new(2.0, 4.0, 6.0), false),
        (Point3f::new(0.0, -2.0, 0.0), Vector3f::new(6.0, 2.0, 4.0), false),
        (Point3f::new(0.0, 0.0, -2.0), Vector3f::new(4.0, 6.0, 2.0), false),
        (Point3f::new(2.0, 0.0, 2.0), Vector3f::new(0.0, 0.0, -1.0), false),
        (Point3f::new(0.0, 2.0, 2.0), Vector3f::new(0.0, -1.0, 0.0), false),
        (Point3f::new(2.0, 2.0, 0.0), Vector3f::new(-1.0, 0.0, 0.0), false),
        // box is behind the ray
        (Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0), false),
    ];

    for (origin, direction, expected) in cases {
        let ray = Ray::new(origin, direction.normalise());
        assert_eq!(b.intersects(&ray), expected, "{:?}", ray);
    }
}

#[test]
fn ray_intersects_non_cubic_box() {
    let b = Bounds3f::new(Point3f::new(5.0, -2.0, 0.0), Point3f::new(11.0, 4.0, 7.0));
    let cases = [
        (Point3f::new(15.0, 1.0, 2.0), Vector3f::new(-1.0, 0.0, 0.0), true),
        (Point3f::new(-5.0, -1.0, 4.0), Vector3f::new(1.0, 0.0, 0.0), true),
        (Point3f::new(7.0, 6.0, 5.0), Vector3f::new(0.0, -1.0, 0.0), true),
        (Point3f::new(9.0, -5.0, 6.0), Vector3f::new(0.0, 1.0, 0.0), true),
        (Point3f::new(8.0, 2.0, 12.0), Vector3f::new(0.0, 0.0, -1.0), true),
        (Point3f::new(6.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), true),
        (Point3f::new(8.0, 1.0, 3.5), Vector3f::new(0.0, 0.0, 1.0), true),
        (Point3f::new(9.0, -1.0, -8.0), Vector3f::new(2.0, 4.0, 6.0), false),
        (Point3f::new(8.0, 3.0, -4.0), Vector3f::new(6.0, 2.0, 4.0), false),
        (Point3f::new(9.0, -1.0, -2.0), Vector3f::new(4.0, 6.0, 2.0), false),
        (Point3f::new(4.0, 0.0, 9.0), Vector3f::new(0.0, 0.0, -1.0), false),
        (Point3f::new(8.0, 6.0, -1.0), Vector3f::new(0.0, -1.0, 0.0), false),
        (Point3f::new(12.0, 5.0, 4.0), Vector3f::new(-1.0, 0.0, 0.0), false),
    ];

    for (origin, direction, expected) in cases {
        let ray = Ray::new(origin, direction.normalise());
        assert_eq!(b.intersects(&ray), expected, "{:?}", ray);
    }
}

#[test]
fn split_perfect_cube() {
    let b = Bounds3f::new(Point3f::new(-1.0, -4.0, -5.0), Point3f::new(9.0, 6.0, 5.0));
    let (left, right) = b.split_bounds();

    assert_eq!(left.min, Point3f::new(-1.0, -4.0, -5.0));
    assert_eq!(left.max, Point3f::new(4.0, 6.0, 5.0));
    assert_eq!(right.min, Point3f::new(4.0, -4.0, -5.0));
    assert_eq!(right.max, Point3f::new(9.0, 6.0, 5.0));
}

#[test]
fn split_longest_axis() {
    let cases = [
        // equal sides split on x
        (Point3f::new(-1.0, -4.0, -5.0), Point3f::new(9.0, 6.0, 5.0), 4.0, 0),
        (Point3f::new(-1.0, -2.0, -3.0), Point3f::new(9.0, 5.5, 3.0), 4.0, 0),
        (Point3f::new(-1.0, -2.0, -3.0), Point3f::new(5.0, 8.0, 3.0), 3.0, 1),
        (Point3f::new(-1.0, -2.0, -3.0), Point3f::new(5.0, 3.0, 7.0), 2.0, 2),
    ];

    for (min, max, mid, axis) in cases {
        let b = Bounds3f::new(min, max);
        assert_eq!(b.maximum_extent(), axis);

        let (left, right) = b.split_bounds();
        assert_eq!(left.min, min);
        assert_eq!(left.max[axis], mid);
        assert_eq!(right.min[axis], mid);
        assert_eq!(right.max, max);
    }
}

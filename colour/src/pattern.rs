use geometry::{Float, Point3, Transform};

use crate::Colour;

/// Procedural colouring evaluated in its own coordinate space
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,

    /// Pattern space to object space transform
    pub transform: Transform,
}

/// The supported procedural patterns
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// Alternate between two colours on each unit step along x
    Stripes(Colour, Colour),

    /// Blend from the first colour to the second along each unit of x, then
    /// back again on the following unit
    Gradient(Colour, Colour),

    /// Concentric rings around the y axis
    Rings(Colour, Colour),

    /// Three dimensional checker board
    Checkers(Colour, Colour),

    /// Alternate between two nested patterns on each unit step along x.
    /// Each nested pattern applies its own transform first.
    Blended(Box<Pattern>, Box<Pattern>),

    /// The pattern space point itself, as a colour
    Coordinates,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_transform(kind: PatternKind, transform: Transform) -> Self {
        Self { kind, transform }
    }

    /// Colour at a point given in the space of the object the pattern is
    /// attached to
    pub fn colour_at_object(&self, object_point: Point3) -> Colour {
        self.colour_at(self.transform.apply_inverse(object_point))
    }

    /// Colour at a point already in pattern space
    pub fn colour_at(&self, point: Point3) -> Colour {
        match &self.kind {
            PatternKind::Stripes(a, b) => {
                if is_even(point.x.floor()) {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::Gradient(a, b) => {
                let mut fraction = (point.x % 1.0).abs();
                if (point.x as i64) % 2 != 0 {
                    fraction = 1.0 - fraction;
                }
                *a + (*b - *a) * fraction
            }
            PatternKind::Rings(a, b) => {
                let distance = (point.x * point.x + point.z * point.z).sqrt();
                if is_even(distance.floor()) {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::Checkers(a, b) => {
                if is_even(point.x.floor() + point.y.floor() + point.z.floor()) {
                    *a
                } else {
                    *b
                }
            }
            PatternKind::Blended(a, b) => {
                if is_even(point.x.floor()) {
                    a.colour_at_object(point)
                } else {
                    b.colour_at_object(point)
                }
            }
            PatternKind::Coordinates => Colour::new(point.x, point.y, point.z),
        }
    }
}

fn is_even(val: Float) -> bool {
    (val as i64) % 2 == 0
}

use geometry::{Bounds3, Ray};

use crate::{Intersections, ShapeArena, ShapeId};

/// Boolean operation combining the two children of a CSG shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsgOperation {
    Union,
    Intersection,
    Difference,
}

impl CsgOperation {
    /// Should a hit survive the operation.
    ///
    /// `left_hit` is whether the hit is on the left child, `in_left` and
    /// `in_right` whether the ray is currently inside each child.
    pub fn intersection_allowed(self, left_hit: bool, in_left: bool, in_right: bool) -> bool {
        match self {
            CsgOperation::Union => (left_hit && !in_right) || (!left_hit && !in_left),
            CsgOperation::Intersection => (left_hit && in_right) || (!left_hit && in_left),
            CsgOperation::Difference => (left_hit && !in_right) || (!left_hit && in_left),
        }
    }
}

/// Constructive solid geometry node
#[derive(Debug, Clone, PartialEq)]
pub struct Csg {
    operation: CsgOperation,
    left: ShapeId,
    right: ShapeId,

    /// Union of both children's bounds, in this shape's space
    pub(crate) bounds: Bounds3,
}

impl Csg {
    pub(crate) fn new(operation: CsgOperation, left: ShapeId, right: ShapeId) -> Self {
        Self {
            operation,
            left,
            right,
            bounds: Bounds3::EMPTY,
        }
    }

    pub fn operation(&self) -> CsgOperation {
        self.operation
    }

    pub fn left(&self) -> ShapeId {
        self.left
    }

    pub fn right(&self) -> ShapeId {
        self.right
    }

    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }
}

impl ShapeArena {
    pub(crate) fn intersect_csg(&self, csg: &Csg, ray: &Ray, xs: &mut Intersections) {
        if !csg.bounds.intersects(ray) {
            return;
        }

        let start = xs.len();
        self.intersect(csg.left, ray, xs);
        self.intersect(csg.right, ray, xs);
        xs.sort_from(start);

        self.filter_intersections(csg, xs, start);
    }

    /// Replay the sorted hits from `start` onwards, tracking whether the ray
    /// is inside each child, and drop the hits the operation excludes
    pub(crate) fn filter_intersections(&self, csg: &Csg, xs: &mut Intersections, start: usize) {
        let mut in_left = false;
        let mut in_right = false;

        xs.retain_from(start, |hit| {
            let left_hit = self.includes(csg.left, hit.shape);
            let keep = csg
                .operation
                .intersection_allowed(left_hit, in_left, in_right);

            if left_hit {
                in_left = !in_left;
            } else {
                in_right = !in_right;
            }

            keep
        });
    }
}

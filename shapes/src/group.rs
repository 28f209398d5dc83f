use geometry::{Bounds3, Ray};
use log::debug;

use crate::{Intersections, Shape, ShapeArena, ShapeId, ShapeKind};

/// Ordered collection of child shapes sharing one coordinate space
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub(crate) children: Vec<ShapeId>,

    /// Union of the children's bounds, in the group's space
    pub(crate) bounds: Bounds3,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            children: vec![],
            bounds: Bounds3::EMPTY,
        }
    }
}

impl Group {
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }

    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }
}

impl ShapeArena {
    pub(crate) fn intersect_group(&self, group: &Group, ray: &Ray, xs: &mut Intersections) {
        if !group.bounds.intersects(ray) {
            return;
        }

        let start = xs.len();
        for &child in &group.children {
            self.intersect(child, ray, xs);
        }
        xs.sort_from(start);
    }

    /// Build a bounding volume hierarchy below a shape.  Every group with at
    /// least `threshold` children moves the children that fit entirely inside
    /// one half of its bounds into a new sub-group for that half, then the
    /// same is repeated for every child.  A threshold of 0 does nothing.
    pub fn divide(&mut self, id: ShapeId, threshold: usize) {
        if threshold == 0 {
            return;
        }

        let is_large_group =
            matches!(&self[id].kind, ShapeKind::Group(g) if g.children.len() >= threshold);
        if is_large_group {
            self.partition(id);
        }

        let children = match &self[id].kind {
            ShapeKind::Group(g) => g.children.clone(),
            ShapeKind::Csg(c) => vec![c.left(), c.right()],
            ShapeKind::Primitive(_) => vec![],
        };

        for child in children {
            self.divide(child, threshold);
        }
    }

    /// Split the children of a group between two new sub-groups, children
    /// straddling the split stay where they are
    fn partition(&mut self, id: ShapeId) {
        let (children, bounds) = match &self[id].kind {
            ShapeKind::Group(g) => (g.children.clone(), g.bounds),
            _ => return,
        };
        let (left_bounds, right_bounds) = bounds.split_bounds();

        let mut left = vec![];
        let mut right = vec![];
        let mut kept = vec![];
        for child in children {
            let child_bounds = self.parent_space_bounds(child);
            if left_bounds.contains_box(&child_bounds) {
                left.push(child);
            } else if right_bounds.contains_box(&child_bounds) {
                right.push(child);
            } else {
                kept.push(child);
            }
        }

        // a side holding every child would just be this group again
        let total = left.len() + right.len() + kept.len();
        if left.len() == total || right.len() == total {
            return;
        }

        debug!(
            "dividing {:?}: {} left, {} right, {} kept",
            id,
            left.len(),
            right.len(),
            kept.len()
        );

        for side in [left, right] {
            if side.is_empty() {
                continue;
            }
            let sub_group = self.sub_group(id, side);
            kept.push(sub_group);
        }

        if let ShapeKind::Group(g) = &mut self.shapes[id.0].kind {
            g.children = kept;
        }
    }

    /// Create an untransformed group under `parent` owning `children`, which
    /// are moved out of `parent`
    fn sub_group(&mut self, parent: ShapeId, children: Vec<ShapeId>) -> ShapeId {
        let id = ShapeId(self.shapes.len());

        let mut bounds = Bounds3::EMPTY;
        for &child in &children {
            bounds.add_box(&self.parent_space_bounds(child));
            self.shapes[child.0].parent = Some(id);
        }

        let mut shape = Shape::new(ShapeKind::Group(Group { children, bounds }));
        shape.parent = Some(parent);
        self.shapes.push(shape);

        id
    }
}

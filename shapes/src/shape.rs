use std::ops::Index;

use colour::Material;
use geometry::{Bounds3, Float, Point3, Ray, Transform, Vector3};
use log::trace;
use thiserror::Error;

use crate::{
    Cone, Csg, CsgOperation, Cube, Cylinder, Group, Intersections, LocalShape, Plane, Primitive,
    Sphere, Triangle,
};

/// Handle to a shape stored in a [`ShapeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    /// Position of the shape in its arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors from building the shape tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape {0:?} is not a group")]
    NotAGroup(ShapeId),

    #[error("shape {0:?} already has a parent")]
    AlreadyAttached(ShapeId),

    #[error("adding shape {0:?} would make it its own ancestor")]
    Cycle(ShapeId),
}

/// What a shape is: a leaf primitive or a composite owning other shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Primitive(Primitive),
    Group(Group),
    Csg(Csg),
}

/// A node in the scene tree
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) kind: ShapeKind,
    pub material: Material,
    pub(crate) transform: Transform,
    pub(crate) parent: Option<ShapeId>,
}

impl Shape {
    /// Create an untransformed shape with the default material
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            material: Material::default(),
            transform: Transform::IDENTITY,
            parent: None,
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(ShapeKind::Primitive(primitive))
    }

    pub fn sphere() -> Self {
        Self::primitive(Primitive::Sphere(Sphere))
    }

    pub fn glass_sphere() -> Self {
        Self::sphere().with_material(Material::glass())
    }

    pub fn plane() -> Self {
        Self::primitive(Primitive::Plane(Plane))
    }

    pub fn cube() -> Self {
        Self::primitive(Primitive::Cube(Cube))
    }

    pub fn cylinder(min: Float, max: Float, closed: bool) -> Self {
        Self::primitive(Primitive::Cylinder(Cylinder::new(min, max, closed)))
    }

    pub fn cone(min: Float, max: Float, closed: bool) -> Self {
        Self::primitive(Primitive::Cone(Cone::new(min, max, closed)))
    }

    pub fn triangle(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self::primitive(Primitive::Triangle(Triangle::new(p1, p2, p3)))
    }

    /// An empty group, fill it with [`ShapeArena::add_child`]
    pub fn group() -> Self {
        Self::new(ShapeKind::Group(Group::default()))
    }

    /// Boolean combination of two shapes already stored in the arena.  The
    /// children are attached when this shape is added.
    pub fn csg(operation: CsgOperation, left: ShapeId, right: ShapeId) -> Self {
        Self::new(ShapeKind::Csg(Csg::new(operation, left, right)))
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Object to parent space transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }
}

/// Owns every shape of a scene.  Groups and CSG nodes refer to their
/// children by handle, children refer back to their parent the same way.
#[derive(Debug, Clone, Default)]
pub struct ShapeArena {
    pub(crate) shapes: Vec<Shape>,
}

impl ShapeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Store a shape.  A CSG shape takes ownership of its two children, which
    /// must not already have a parent.
    pub fn add(&mut self, shape: Shape) -> Result<ShapeId, ShapeError> {
        let id = ShapeId(self.shapes.len());

        if let ShapeKind::Csg(csg) = &shape.kind {
            let (left, right) = (csg.left(), csg.right());
            if left == right {
                return Err(ShapeError::AlreadyAttached(right));
            }
            for child in [left, right] {
                if self[child].parent.is_some() {
                    return Err(ShapeError::AlreadyAttached(child));
                }
            }

            self.shapes.push(shape);
            for child in [left, right] {
                self.shapes[child.0].parent = Some(id);
            }
            self.recompute_bounds(id);
        } else {
            self.shapes.push(shape);
        }

        Ok(id)
    }

    /// Append a child to a group, growing the bounds of the group and of all
    /// of its ancestors
    pub fn add_child(&mut self, group: ShapeId, child: ShapeId) -> Result<(), ShapeError> {
        if !matches!(self[group].kind, ShapeKind::Group(_)) {
            return Err(ShapeError::NotAGroup(group));
        }
        if self[child].parent.is_some() {
            return Err(ShapeError::AlreadyAttached(child));
        }
        if self.includes(child, group) {
            return Err(ShapeError::Cycle(child));
        }

        self.shapes[child.0].parent = Some(group);
        let bounds = self.parent_space_bounds(child);
        if let ShapeKind::Group(g) = &mut self.shapes[group.0].kind {
            g.children.push(child);
            g.bounds.add_box(&bounds);
        }

        self.grow_ancestors(group);
        Ok(())
    }

    /// Replace the transform of a shape, re-deriving the bounds of every
    /// ancestor
    pub fn set_transform(&mut self, id: ShapeId, transform: Transform) {
        self.shapes[id.0].transform = transform;

        let mut current = self[id].parent;
        while let Some(parent) = current {
            self.recompute_bounds(parent);
            current = self[parent].parent;
        }
    }

    pub fn material_mut(&mut self, id: ShapeId) -> &mut Material {
        &mut self.shapes[id.0].material
    }

    /// Does `ancestor` contain `id`.  A shape includes itself.
    pub fn includes(&self, ancestor: ShapeId, id: ShapeId) -> bool {
        let mut current = Some(id);
        while let Some(shape) = current {
            if shape == ancestor {
                return true;
            }
            current = self[shape].parent;
        }
        false
    }

    /// Bounding box in the shape's own space
    pub fn object_bound(&self, id: ShapeId) -> Bounds3 {
        match &self[id].kind {
            ShapeKind::Primitive(p) => p.object_bound(),
            ShapeKind::Group(g) => g.bounds,
            ShapeKind::Csg(c) => c.bounds,
        }
    }

    /// Bounding box in the space of the shape's parent
    pub fn parent_space_bounds(&self, id: ShapeId) -> Bounds3 {
        self[id].transform.apply(self.object_bound(id))
    }

    /// Intersect a world or parent space ray with a shape, appending the hits
    /// into the accumulator
    pub fn intersect(&self, id: ShapeId, ray: &Ray, xs: &mut Intersections) {
        let shape = &self[id];
        let local = shape.transform.apply_inverse(*ray);

        match &shape.kind {
            ShapeKind::Primitive(p) => p.local_intersect(&local, id, xs),
            ShapeKind::Group(g) => self.intersect_group(g, &local, xs),
            ShapeKind::Csg(c) => self.intersect_csg(c, &local, xs),
        }
    }

    /// Convert a world space point into the space of a shape, through every
    /// parent
    pub fn world_to_object(&self, id: ShapeId, point: Point3) -> Point3 {
        let shape = &self[id];
        let point = match shape.parent {
            Some(parent) => self.world_to_object(parent, point),
            None => point,
        };
        shape.transform.apply_inverse(point)
    }

    /// Convert an object space normal of a shape into world space
    pub fn normal_to_world(&self, id: ShapeId, normal: Vector3) -> Vector3 {
        let shape = &self[id];
        let normal = shape.transform.apply_normal(normal).normalise();
        match shape.parent {
            Some(parent) => self.normal_to_world(parent, normal),
            None => normal,
        }
    }

    /// World space unit normal of a primitive at a world space point
    pub fn normal_at(&self, id: ShapeId, point: Point3) -> Vector3 {
        let local_point = self.world_to_object(id, point);
        let local_normal = match &self[id].kind {
            ShapeKind::Primitive(p) => p.local_normal_at(local_point),
            ShapeKind::Group(_) | ShapeKind::Csg(_) => {
                unreachable!("intersections only ever refer to primitives")
            }
        };
        self.normal_to_world(id, local_normal)
    }

    fn grow_ancestors(&mut self, id: ShapeId) {
        let mut current = id;
        while let Some(parent) = self[current].parent {
            let bounds = self.parent_space_bounds(current);
            match &mut self.shapes[parent.0].kind {
                ShapeKind::Group(g) => g.bounds.add_box(&bounds),
                ShapeKind::Csg(c) => c.bounds.add_box(&bounds),
                ShapeKind::Primitive(_) => break,
            }
            current = parent;
        }
    }

    /// Set the bounds of a composite shape to the union of its children
    pub(crate) fn recompute_bounds(&mut self, id: ShapeId) {
        let children = match &self[id].kind {
            ShapeKind::Group(g) => g.children.clone(),
            ShapeKind::Csg(c) => vec![c.left(), c.right()],
            ShapeKind::Primitive(_) => return,
        };

        let mut bounds = Bounds3::EMPTY;
        for child in children {
            bounds.add_box(&self.parent_space_bounds(child));
        }
        trace!("bounds of {:?} are {:?}", id, bounds);

        match &mut self.shapes[id.0].kind {
            ShapeKind::Group(g) => g.bounds = bounds,
            ShapeKind::Csg(c) => c.bounds = bounds,
            ShapeKind::Primitive(_) => (),
        }
    }
}

impl Index<ShapeId> for ShapeArena {
    type Output = Shape;

    fn index(&self, index: ShapeId) -> &Self::Output {
        &self.shapes[index.0]
    }
}

use geometry::{Float, Point3, Ray, Vector3, EPSILON};

use crate::{Intersections, ShapeArena, ShapeId};

/// Everything needed to shade the visible hit of a ray
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedHit {
    pub t: Float,
    pub shape: ShapeId,

    /// World space hit position
    pub point: Point3,

    /// Hit position moved off the surface along the normal, origin for shadow
    /// and reflection rays
    pub over_point: Point3,

    /// Hit position moved into the surface, origin for refraction rays
    pub under_point: Point3,

    /// Unit vector from the hit towards the ray origin
    pub camera: Vector3,

    /// Unit surface normal, facing the camera
    pub normal: Vector3,

    /// Was the ray origin inside the shape
    pub inside: bool,

    /// Mirror reflection of the ray direction
    pub reflect: Vector3,

    /// Refractive index on the incoming side of the surface
    pub n1: Float,

    /// Refractive index on the outgoing side of the surface
    pub n2: Float,
}

impl ComputedHit {
    /// Resolve the hit at `index` of the sorted intersection list of `ray`
    pub fn new(index: usize, ray: &Ray, xs: &Intersections, arena: &ShapeArena) -> Self {
        let hit = xs[index];
        let point = ray.at(hit.t);
        let camera = -ray.direction.normalise();

        let mut normal = arena.normal_at(hit.shape, point);
        let inside = normal.dot(camera) < 0.0;
        if inside {
            normal = -normal;
        }

        let (n1, n2) = refractive_indices(index, xs, arena);

        Self {
            t: hit.t,
            shape: hit.shape,
            point,
            over_point: point + normal * EPSILON,
            under_point: point - normal * EPSILON,
            camera,
            normal,
            inside,
            reflect: ray.direction.reflect(normal),
            n1,
            n2,
        }
    }

    /// Schlick's approximation of the fraction of light reflected at the
    /// surface
    pub fn schlick(&self) -> Float {
        let mut cos = self.camera.dot(self.normal);

        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                // total internal reflection
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }

        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

/// Walk the hits up to `index`, keeping a stack of the shapes the ray is
/// inside, to find the refractive index either side of the hit surface
fn refractive_indices(index: usize, xs: &Intersections, arena: &ShapeArena) -> (Float, Float) {
    let index_of = |containers: &[ShapeId]| {
        containers
            .last()
            .map(|&shape| arena[shape].material.refractive_index)
            .unwrap_or(1.0)
    };

    let mut containers: Vec<ShapeId> = Vec::with_capacity(4);
    let mut n1 = 1.0;

    for (i, x) in xs.iter().enumerate() {
        if i == index {
            n1 = index_of(&containers);
        }

        match containers.iter().position(|&shape| shape == x.shape) {
            Some(pos) => {
                containers.remove(pos);
            }
            None => containers.push(x.shape),
        }

        if i == index {
            return (n1, index_of(&containers));
        }
    }

    (n1, 1.0)
}

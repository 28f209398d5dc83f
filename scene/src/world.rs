use colour::{Colour, PointLight};
use geometry::{Point3, Ray};
use log::debug;
use shapes::{ComputedHit, Intersections, Shape, ShapeArena, ShapeError, ShapeId};

/// Number of reflection/refraction bounces followed from a camera ray
pub const MAX_RECURSION_DEPTH: u32 = 5;

/// Shapes and lights that make up a scene
#[derive(Debug, Clone, Default)]
pub struct World {
    pub arena: ShapeArena,
    pub lights: Vec<PointLight>,

    /// Shapes tested directly by camera rays, everything else is reached
    /// through a group or csg
    objects: Vec<ShapeId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape at the top level of the scene
    pub fn add(&mut self, shape: Shape) -> Result<ShapeId, ShapeError> {
        let id = self.arena.add(shape)?;
        self.objects.push(id);
        Ok(id)
    }

    /// Add a shape as a child of a group already in the scene
    pub fn add_child(&mut self, group: ShapeId, shape: Shape) -> Result<ShapeId, ShapeError> {
        let id = self.arena.add(shape)?;
        self.arena.add_child(group, id)?;
        Ok(id)
    }

    /// Mark a shape that is already in the arena as top level, used for
    /// trees built directly in the arena
    pub fn add_object(&mut self, id: ShapeId) {
        self.objects.push(id);
    }

    pub fn objects(&self) -> &[ShapeId] {
        &self.objects
    }

    /// Build bounding volume hierarchies for every top level group with at
    /// least `threshold` children
    pub fn divide(&mut self, threshold: usize) {
        for &id in &self.objects {
            self.arena.divide(id, threshold);
        }
        debug!(
            "Subdivided {} top level shapes, {} shapes in the arena",
            self.objects.len(),
            self.arena.len()
        );
    }

    /// Intersect a ray with every shape, leaving the hits in `xs` sorted by
    /// distance
    pub fn intersect_world(&self, ray: &Ray, xs: &mut Intersections) {
        xs.clear();
        for &id in &self.objects {
            self.arena.intersect(id, ray, xs);
        }
        xs.sort();
    }

    /// Colour seen along a ray, `xs` is scratch space reused by recursive
    /// rays
    pub fn colour_at(&self, ray: &Ray, depth: u32, xs: &mut Intersections) -> Colour {
        self.intersect_world(ray, xs);

        match xs.hit_index() {
            Some(index) => {
                let comps = ComputedHit::new(index, ray, xs, &self.arena);
                self.shade_hit(&comps, depth, xs)
            }
            None => Colour::BLACK,
        }
    }

    /// Surface colour at a hit plus whatever it reflects and transmits
    pub fn shade_hit(&self, comps: &ComputedHit, depth: u32, xs: &mut Intersections) -> Colour {
        let material = &self.arena[comps.shape].material;
        let object_point = self.arena.world_to_object(comps.shape, comps.over_point);

        let mut surface = Colour::BLACK;
        for light in &self.lights {
            let in_shadow = self.is_shadowed(comps.over_point, light, xs);
            surface += material.lighting(
                light,
                object_point,
                comps.over_point,
                comps.camera,
                comps.normal,
                in_shadow,
            );
        }

        let reflected = self.reflected_colour(comps, depth, xs);
        let refracted = self.refracted_colour(comps, depth, xs);

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = comps.schlick();
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    /// Is anything that casts a shadow between the point and the light
    pub fn is_shadowed(
        &self,
        point: Point3,
        light: &PointLight,
        xs: &mut Intersections,
    ) -> bool {
        let to_light = light.position - point;
        let distance = to_light.length();
        let ray = Ray::new(point, to_light.normalise());

        self.intersect_world(&ray, xs);
        xs.iter().any(|x| {
            x.t >= 0.0 && x.t < distance && self.arena[x.shape].material.casts_shadow
        })
    }

    pub fn reflected_colour(
        &self,
        comps: &ComputedHit,
        depth: u32,
        xs: &mut Intersections,
    ) -> Colour {
        let reflective = self.arena[comps.shape].material.reflective;
        if depth == 0 || reflective == 0.0 {
            return Colour::BLACK;
        }

        let ray = Ray::new(comps.over_point, comps.reflect);
        self.colour_at(&ray, depth - 1, xs) * reflective
    }

    pub fn refracted_colour(
        &self,
        comps: &ComputedHit,
        depth: u32,
        xs: &mut Intersections,
    ) -> Colour {
        let transparency = self.arena[comps.shape].material.transparency;
        if depth == 0 || transparency == 0.0 {
            return Colour::BLACK;
        }

        // Snell's law
        let ratio = comps.n1 / comps.n2;
        let cos_i = comps.camera.dot(comps.normal);
        let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            // total internal reflection
            return Colour::BLACK;
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normal * (ratio * cos_i - cos_t) - comps.camera * ratio;
        let ray = Ray::new(comps.under_point, direction);

        self.colour_at(&ray, depth - 1, xs) * transparency
    }
}


use colour::{Colour, Material, PointLight};
use geometry::{Float, Point3, Ray, Transform, Vector3};
use shapes::Shape;

use crate::World;

impl World {
    /// Two nested spheres lit from the top left
    pub fn default_scene() -> Self {
        let mut world = Self::new();
        world.lights.push(PointLight::default());

        world
            .add(Shape::sphere().with_material(Material {
                colour: Colour::new(0.8, 1.0, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            }))
            .unwrap();
        world
            .add(Shape::sphere().with_transform(
                Transform::scale(Vector3::new(0.5, 0.5, 0.5)).unwrap(),
            ))
            .unwrap();

        world
    }
}

pub fn ray(origin: [Float; 3], direction: [Float; 3]) -> Ray {
    Ray::new(
        Point3::from_array(origin),
        Vector3::from_array(direction).normalise(),
    )
}

use geometry::{Float, Point3, Vector3};

use crate::{Colour, Pattern, PointLight};

/// Surface optical properties used by the Phong model and the recursive
/// reflection and refraction passes
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Flat colour, ignored when a pattern is set
    pub colour: Colour,
    pub pattern: Option<Pattern>,
    pub ambient: Float,
    pub diffuse: Float,
    pub specular: Float,
    pub shininess: Float,

    /// Fraction of light mirrored, 0 for matte and 1 for a perfect mirror
    pub reflective: Float,
    pub transparency: Float,

    /// 1.0 is vacuum, 1.5 glass
    pub refractive_index: Float,

    /// Whether the surface blocks light for shadow rays
    pub casts_shadow: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            colour: Colour::WHITE,
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            casts_shadow: true,
        }
    }
}

impl Material {
    /// Clear glass
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Default::default()
        }
    }

    /// Surface colour at a point in object space
    pub fn colour_at(&self, object_point: Point3) -> Colour {
        match &self.pattern {
            Some(pattern) => pattern.colour_at_object(object_point),
            None => self.colour,
        }
    }

    /// Phong illumination from a single light.
    ///
    /// `point` is the world space position being lit and `object_point` the
    /// same position in the object's space, used to evaluate the pattern.
    /// `camera` points from the surface towards the viewer.
    pub fn lighting(
        &self,
        light: &PointLight,
        object_point: Point3,
        point: Point3,
        camera: Vector3,
        normal: Vector3,
        in_shadow: bool,
    ) -> Colour {
        let effective = self.colour_at(object_point) * light.intensity;
        let ambient = effective * self.ambient;
        if in_shadow {
            return ambient;
        }

        let light_dir = (light.position - point).normalise();
        let light_dot_normal = light_dir.dot(normal);
        if light_dot_normal < 0.0 {
            return ambient;
        }

        let diffuse = effective * self.diffuse * light_dot_normal;

        let reflect_dot_camera = (-light_dir).reflect(normal).dot(camera);
        let specular = if reflect_dot_camera <= 0.0 {
            Colour::BLACK
        } else {
            light.intensity * self.specular * reflect_dot_camera.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}

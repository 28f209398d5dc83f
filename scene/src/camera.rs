use colour::Colour;
use geometry::{Float, Point3, Ray, Transform};
use shapes::Intersections;

use crate::{World, MAX_RECURSION_DEPTH};

/// Pinhole camera looking down -z in its own space, the canvas sits one unit
/// in front of the eye
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: Float,
    transform: Transform,
    origin: Point3,

    half_width: Float,
    half_height: Float,
    pixel_size: Float,
}

impl Camera {
    /// Create a camera for a `hsize` by `vsize` pixel image, the field of
    /// view is in radians and covers the longer image side
    pub fn new(hsize: usize, vsize: usize, field_of_view: Float) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as Float / vsize as Float;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Transform::IDENTITY,
            origin: Point3::ZERO,
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as Float,
        }
    }

    /// Set the world to camera transform, usually a [`Transform::view`]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.set_transform(transform);
        self
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.origin = transform.apply_inverse(Point3::ZERO);
        self.transform = transform;
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> Float {
        self.field_of_view
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Position of the eye in world space
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// World space size of one pixel on the canvas
    pub fn pixel_size(&self) -> Float {
        self.pixel_size
    }

    /// Ray from the eye through the centre of a pixel
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let x_offset = (x as Float + 0.5) * self.pixel_size;
        let y_offset = (y as Float + 0.5) * self.pixel_size;

        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self
            .transform
            .apply_inverse(Point3::new(world_x, world_y, -1.0));
        Ray::new(self.origin, (pixel - self.origin).normalise())
    }

    /// Colour of a single pixel, `xs` is scratch space owned by the caller
    pub fn render_pixel(
        &self,
        world: &World,
        x: usize,
        y: usize,
        xs: &mut Intersections,
    ) -> Colour {
        let ray = self.ray_for_pixel(x, y);
        world.colour_at(&ray, MAX_RECURSION_DEPTH, xs)
    }
}

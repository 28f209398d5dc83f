use geometry::Point3;

use crate::Colour;

/// Light source at a single point with no area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub intensity: Colour,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point3::new(-10.0, 10.0, -10.0),
            intensity: Colour::WHITE,
        }
    }
}

impl PointLight {
    pub fn new(position: Point3, intensity: Colour) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

mod colour;
mod light;
mod material;
mod pattern;


pub use colour::Colour;

pub use light::PointLight;

pub use material::Material;

pub use pattern::Pattern;
pub use pattern::PatternKind;

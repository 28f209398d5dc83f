mod png;
mod yaml;


pub use png::{canvas_to_image, save_png, ImageError};
pub use yaml::{load_scene, parse_scene, SceneError};

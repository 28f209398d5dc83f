mod camera;
mod canvas;
mod render;
mod world;

#[cfg(test)]
mod tests;

pub use camera::Camera;
pub use canvas::Canvas;
pub use render::{render, RenderMode, RenderOptions};
pub use world::{World, MAX_RECURSION_DEPTH};

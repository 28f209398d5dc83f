use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use scene::Canvas;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("canvas of {width}x{height} pixels is too large to encode")]
    TooLarge { width: usize, height: usize },

    #[error("unable to write image")]
    Encode(#[from] image::ImageError),
}

/// Convert a canvas to 8 bit rgb, clamping each channel to 0..=255
pub fn canvas_to_image(canvas: &Canvas) -> Result<RgbImage, ImageError> {
    let too_large = || ImageError::TooLarge {
        width: canvas.width(),
        height: canvas.height(),
    };
    let width = u32::try_from(canvas.width()).map_err(|_| too_large())?;
    let height = u32::try_from(canvas.height()).map_err(|_| too_large())?;

    let pixels: Vec<u8> = canvas.iter().flat_map(|c| c.to_rgb8()).collect();

    ImageBuffer::<Rgb<_>, _>::from_raw(width, height, pixels).ok_or_else(too_large)
}

/// Write a canvas to disk as a png file
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), ImageError> {
    let image = canvas_to_image(canvas)?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

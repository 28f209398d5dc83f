use std::time::Instant;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressDrawTarget, ProgressIterator};
use log::info;
use rayon::prelude::*;
use shapes::Intersections;

use crate::{Camera, Canvas, World};

/// How pixels are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One pixel at a time on the calling thread
    Serial,

    /// Pixels spread over the rayon thread pool
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,

    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Parallel,
            progress: true,
        }
    }
}

/// Render every pixel the camera can see.  The world is only read, each
/// worker keeps its own intersection buffer.
pub fn render(camera: &Camera, world: &World, options: RenderOptions) -> Canvas {
    let mut canvas = Canvas::new(camera.hsize(), camera.vsize());
    let width = canvas.width();

    let progress = if options.progress {
        ProgressBar::with_draw_target(
            Some(canvas.len() as u64),
            ProgressDrawTarget::stderr_with_hz(5),
        )
    } else {
        ProgressBar::hidden()
    };

    info!(
        "Rendering {}x{} pixels ({:?})",
        canvas.width(),
        canvas.height(),
        options.mode
    );
    let start = Instant::now();

    match options.mode {
        RenderMode::Serial => {
            let mut xs = Intersections::new();
            for (index, pixel) in canvas
                .pixels_mut()
                .iter_mut()
                .enumerate()
                .progress_with(progress.clone())
            {
                *pixel = camera.render_pixel(world, index % width, index / width, &mut xs);
            }
        }
        RenderMode::Parallel => {
            canvas
                .pixels_mut()
                .par_iter_mut()
                .enumerate()
                .progress_with(progress.clone())
                .for_each_init(Intersections::new, |xs, (index, pixel)| {
                    *pixel = camera.render_pixel(world, index % width, index / width, xs);
                });
        }
    }

    progress.finish_and_clear();
    info!("Rendered in {:.2}s", start.elapsed().as_secs_f64());

    canvas
}

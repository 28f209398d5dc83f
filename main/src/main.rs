use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use parsers::{load_scene, save_png};
use scene::{render, RenderMode, RenderOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Serial,
    Parallel,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Serial => RenderMode::Serial,
            Mode::Parallel => RenderMode::Parallel,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File containing the scene description
    #[clap(value_parser)]
    scene: PathBuf,

    /// File name to write the image to
    #[clap(value_parser)]
    output: PathBuf,

    /// Render pixels one at a time or spread over every core
    #[clap(short, long, value_enum, default_value_t = Mode::Parallel)]
    rendering_mode: Mode,

    /// Build bounding volume hierarchies for groups with at least this many
    /// children, 0 to disable
    #[clap(long, value_parser, default_value_t = 4)]
    subdivide: usize,

    /// Do not draw a progress bar
    #[clap(short, long, action)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let start = Instant::now();

    info!("Loading scene {}", args.scene.display());
    let (mut world, camera) = load_scene(&args.scene)
        .with_context(|| format!("Unable to load scene {}", args.scene.display()))?;

    if args.subdivide > 0 {
        world.divide(args.subdivide);
    }

    let canvas = render(
        &camera,
        &world,
        RenderOptions {
            mode: args.rendering_mode.into(),
            progress: !args.quiet,
        },
    );

    save_png(&canvas, &args.output)
        .with_context(|| format!("Unable to write image {}", args.output.display()))?;

    info!(
        "Wrote {} in {:.2}s",
        args.output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

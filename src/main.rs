use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use rand::{thread_rng, Rng};
use sphere_rt::{
    camera::{setup_rng, Camera, Float, RenderControl},
    output::{FileSink, ImageSink, SnapshotSink},
    scenes,
};
use std::{path::PathBuf, sync::Mutex};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneChoice {
    /// Hundreds of small random spheres around three big ones
    Cover,
    /// Five spheres with glass, metal and shallow depth of field
    Showcase,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "sphere_rt")]
#[command(about = "Render a scene of spheres with a Monte Carlo ray tracer")]
struct Args {
    #[arg(long, value_enum, default_value_t = SceneChoice::Cover)]
    scene: SceneChoice,

    /// Image width in pixels (scene default if omitted)
    #[arg(long)]
    width: Option<u32>,

    /// Width over height (scene default if omitted)
    #[arg(long)]
    aspect_ratio: Option<Float>,

    /// Samples per pixel (scene default if omitted)
    #[arg(short, long)]
    samples: Option<u32>,

    /// Maximum bounces per sample (scene default if omitted)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seed for scene generation and sampling; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Render pixels in random order (only visible in snapshots)
    #[arg(long)]
    shuffle: bool,

    /// Output file; the format follows the extension
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    /// Write this many progressive snapshots while rendering
    #[arg(long)]
    snapshots: Option<usize>,

    #[arg(long, default_value = "snapshots")]
    snapshot_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    let (mut config, scene) = match args.scene {
        SceneChoice::Cover => {
            let mut rng = setup_rng(seed);
            (scenes::cover_camera(), scenes::cover_scene(&mut rng))
        }
        SceneChoice::Showcase => (scenes::showcase_camera(), scenes::showcase_scene()),
    };
    if let Some(width) = args.width {
        config.image_width = width;
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        config.aspect_ratio = aspect_ratio;
    }
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    info!("Scene {:?} with {} spheres", args.scene, scene.len());

    let camera = Camera::new(config).context("invalid camera configuration")?;
    let total_pixels = camera.image_width() as usize * camera.image_height() as usize;

    let progress = ProgressBar::new(total_pixels as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} pixels, ETA {eta}")?,
    );
    let control = RenderControl {
        seed,
        shuffle: args.shuffle,
        progress,
        snapshot_every: args
            .snapshots
            .filter(|&frames| frames > 0)
            .map(|frames| (total_pixels / frames).max(1)),
        ..RenderControl::default()
    };
    let snapshot_sink = Mutex::new(SnapshotSink::new(&args.snapshot_dir, "image"));

    let rendered = camera.render_with(&scene, &control, Some(&snapshot_sink));

    let mut sink = FileSink::new(&args.output);
    sink.write(&rendered.image)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}

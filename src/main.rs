use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use raycaster::{render, render_image_name, render_parallel, scene};

/// Render one sphere over a floor plane to an image file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene description (JSON)
    #[arg(default_value = "scene.json")]
    scene: PathBuf,

    /// Output image; format follows the extension.
    /// Defaults to an auto-named PNG under renders/
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// No progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Render on the calling thread only
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let scene = scene::load(&args.scene)
        .with_context(|| format!("loading scene {}", args.scene.display()))?;

    let width  = scene.camera.width();
    let height = scene.camera.height();

    log::info!("Image    : {width}x{height}");
    log::info!("Sphere   : center {:?}, radius {:.4}", scene.sphere.center, scene.sphere.radius);
    log::info!("Plane    : point {:?}, normal {:?}", scene.plane.point, scene.plane.normal);
    log::info!(
        "Light    : pos {:?}, color {:?}, shadow {:.2}",
        scene.lighting.light.pos,
        scene.lighting.light.color,
        scene.lighting.shadow_intensity
    );

    let start = Instant::now();
    let img = if args.sequential {
        log::info!("Rendering on a single thread");
        render(&scene)
    } else {
        let style = ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?;
        let bar = (!args.quiet).then(|| ProgressBar::new(height as u64).with_style(style));
        log::info!("Rendering on {} threads", rayon::current_num_threads());
        let img = render_parallel(&scene, bar.as_ref());
        if let Some(b) = bar {
            b.finish_with_message("Rendering complete");
        }
        img
    };
    log::info!("Rendered in {:.2?}", start.elapsed());

    let name = args
        .output
        .unwrap_or_else(|| PathBuf::from(render_image_name(width, height)));

    if let Some(dir) = Path::new(&name).parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    img.save(&name)
        .with_context(|| format!("writing {}", name.display()))?;
    log::info!("Saved → {}", name.display());

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{demo, CameraDesc, SceneDesc};
use glint_renderer::{render_image, RenderMode, Scene, Vec3};

/// Render a scene of spheres over a checkered floor to an image file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scene description in JSON. The built-in demo scene is used if omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Output image; the format follows the extension (png, bmp, ...)
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Maximum reflection depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Orbit the camera around the origin by this many degrees
    #[arg(long)]
    orbit: Option<f32>,

    /// Horizontal orbit distance, used with --orbit
    #[arg(long, default_value_t = 8.0)]
    distance: f32,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    single_threaded: bool,
}

/// Orbit camera height above the look-at point.
const ORBIT_HEIGHT: f32 = 5.0;

fn build_scene_desc(args: &Args) -> Result<SceneDesc> {
    let mut desc = match &args.scene {
        Some(path) => SceneDesc::load(path).with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => demo::demo_scene(),
    };

    if let Some(angle) = args.orbit {
        let fov = desc.camera.fov_degrees;
        desc.camera = CameraDesc::orbit(Vec3::ZERO, angle, args.distance, ORBIT_HEIGHT, fov);
    }
    if let Some(width) = args.width {
        desc.settings.width = width;
    }
    if let Some(height) = args.height {
        desc.settings.height = height;
    }
    if let Some(max_depth) = args.max_depth {
        desc.settings.max_depth = max_depth;
    }

    Ok(desc)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting Glint");

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let desc = build_scene_desc(&args)?;
    let scene = Scene::new(&desc).context("Invalid scene")?;
    log::info!(
        "Scene ready: {} objects, {} emitters",
        scene.objects().len(),
        scene.emitters().len()
    );

    let mode = if args.single_threaded {
        RenderMode::SingleThreaded
    } else {
        RenderMode::Multithreaded
    };
    let image = render_image(&scene, mode)?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

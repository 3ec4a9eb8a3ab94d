#![deny(unsafe_code)]
//! CLI binary for the blobfield ambient background.
//!
//! Drives a [`BlobScene`] with a scripted pointer at a fixed frame rate.
//!
//! Subcommands:
//! - `render` - run N frames and write the last one as a PNG
//! - `record` - write every frame as a numbered PNG sequence
//! - `frames` - print draw commands as JSON
//! - `list`   - print built-in palettes and default settings

mod error;
mod script;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use blobfield_core::{BlobScene, Canvas, Engine, Palette, Settings, Xorshift64};
use clap::{Args, Parser, Subcommand};
use error::CliError;
use script::PointerScript;
use serde_json::{json, Value};

const PNG_DISABLED: &str = "blobfield was built without the `png` feature; nothing to write";

#[derive(Parser)]
#[command(name = "blobfield", about = "Mouse-reactive fluid blob background")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run N frames and write the final frame as a PNG.
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 120)]
        frames: usize,

        /// Output file path.
        #[arg(short, long, default_value = "blobfield.png")]
        output: PathBuf,
    },
    /// Write every frame as `frame_NNNNN.png` into a directory.
    Record {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of frames to record.
        #[arg(short, long, default_value_t = 240)]
        frames: usize,

        /// Output directory, created if missing.
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,
    },
    /// Print draw commands as JSON.
    Frames {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 1)]
        frames: usize,

        /// Emit every frame instead of only the last.
        #[arg(long)]
        all: bool,
    },
    /// List built-in palettes and default settings.
    List,
}

/// Options shared by every subcommand that runs a scene.
#[derive(Args, Debug, Clone)]
struct SceneArgs {
    /// Canvas width in pixels.
    #[arg(short = 'W', long, default_value_t = 1280)]
    width: usize,

    /// Canvas height in pixels.
    #[arg(short = 'H', long, default_value_t = 720)]
    height: usize,

    /// PRNG seed; omitted means seeded from OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Built-in palette name (see `list`).
    #[arg(short, long, default_value = "default")]
    palette: String,

    /// Start from a random palette instead of `--palette`.
    #[arg(long)]
    random_palette: bool,

    /// JSON settings file, applied before `--params`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Settings overrides as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Scripted pointer path.
    #[arg(long, value_enum, default_value_t = PointerScript::Orbit)]
    pointer: PointerScript,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn parse_json(text: &str, source: &str) -> Result<Value, CliError> {
    serde_json::from_str(text).map_err(|e| CliError::Input(format!("invalid {source} JSON: {e}")))
}

fn apply(scene: &mut BlobScene, params: &Value, source: &str) -> Result<(), CliError> {
    scene.apply_params(params).map_err(|e| {
        log::warn!("rejected {source} settings: {e}");
        CliError::from(e)
    })
}

fn build_scene(args: &SceneArgs) -> Result<BlobScene, CliError> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(CliError::Input(format!("--fps must be positive, got {}", args.fps)));
    }
    let canvas = Canvas::new(args.width as f64, args.height as f64)?;
    let palette = Palette::from_name(&args.palette)?;
    let rng = args.seed.map_or_else(Xorshift64::from_entropy, Xorshift64::new);
    let mut scene = BlobScene::new(canvas, palette, Settings::default(), rng)?;
    if args.random_palette {
        scene.randomize_palette();
    }
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)?;
        let config = parse_json(&text, &path.display().to_string())?;
        apply(&mut scene, &config, "config")?;
    }
    let overrides = parse_json(&args.params, "--params")?;
    apply(&mut scene, &overrides, "--params")?;
    Ok(scene)
}

/// Runs `frames` ticks, feeding scripted pointer events, and hands each
/// finished frame to `visit`.
fn drive<F>(
    scene: &mut BlobScene,
    args: &SceneArgs,
    frames: usize,
    mut visit: F,
) -> Result<(), CliError>
where
    F: FnMut(usize, &BlobScene) -> Result<(), CliError>,
{
    let (w, h) = (scene.canvas().width(), scene.canvas().height());
    for i in 0..frames {
        let t = i as f64 / args.fps;
        let now = Duration::from_secs_f64(t);
        if let Some(p) = args.pointer.position(t, w, h) {
            scene.pointer_moved(p.x, p.y, now);
        }
        scene.tick(now);
        visit(i, scene)?;
    }
    Ok(())
}

#[cfg(feature = "png")]
fn save_frame(scene: &BlobScene, path: &Path) -> Result<(), CliError> {
    let canvas = scene.canvas();
    blobfield_snapshot::write_frame(
        scene.frame(),
        scene.background(),
        canvas.width() as usize,
        canvas.height() as usize,
        scene.settings().blur_radius,
        path,
    )?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn save_frame(_scene: &BlobScene, _path: &Path) -> Result<(), CliError> {
    Err(CliError::Io(PNG_DISABLED.into()))
}

fn frame_json(scene: &BlobScene) -> Result<Value, CliError> {
    Ok(json!({
        "background": scene.background().to_hex(),
        "blur_radius": scene.settings().blur_radius,
        "commands": serde_json::to_value(scene.frame())?,
    }))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names()
                .iter()
                .map(|name| Palette::from_name(name).map(|p| (*name, p.to_hex())))
                .collect::<Result<Vec<_>, _>>()?;
            if cli.json {
                let by_name: serde_json::Map<String, Value> = palettes
                    .iter()
                    .map(|(name, colors)| (name.to_string(), json!(colors)))
                    .collect();
                let info = json!({
                    "palettes": by_name,
                    "defaults": Settings::default().to_json(),
                    "schema": Settings::param_schema(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                for (name, colors) in &palettes {
                    println!("  {name:<8} {}", colors.join(" "));
                }
                println!("Defaults:");
                println!("  {}", Settings::default().to_json());
            }
        }
        Command::Render { scene: args, frames, output } => {
            if !blobfield_snapshot::png_enabled() {
                eprintln!("{PNG_DISABLED}");
                return Ok(());
            }
            let mut scene = build_scene(&args)?;
            drive(&mut scene, &args, frames, |_, _| Ok(()))?;
            save_frame(&scene, &output)?;

            if cli.json {
                let info = json!({
                    "width": args.width,
                    "height": args.height,
                    "frames": frames,
                    "settings": scene.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} discs ({}x{}, {frames} frames) -> {}",
                    scene.frame().len(),
                    args.width,
                    args.height,
                    output.display()
                );
            }
        }
        Command::Record { scene: args, frames, out_dir } => {
            if !blobfield_snapshot::png_enabled() {
                eprintln!("{PNG_DISABLED}");
                return Ok(());
            }
            let mut scene = build_scene(&args)?;
            fs::create_dir_all(&out_dir)?;
            drive(&mut scene, &args, frames, |i, scene| {
                save_frame(scene, &out_dir.join(format!("frame_{i:05}.png")))
            })?;
            log::info!("recorded {frames} frames into {}", out_dir.display());

            if cli.json {
                let info = json!({
                    "frames": frames,
                    "fps": args.fps,
                    "out_dir": out_dir.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("recorded {frames} frames at {} fps -> {}", args.fps, out_dir.display());
            }
        }
        Command::Frames { scene: args, frames, all } => {
            let mut scene = build_scene(&args)?;
            let mut out = Vec::new();
            drive(&mut scene, &args, frames, |_, scene| {
                if all {
                    out.push(frame_json(scene)?);
                }
                Ok(())
            })?;
            let doc = if all { Value::Array(out) } else { frame_json(&scene)? };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::sync::{mpsc, watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cellmass::config::{ConfigError, GameConfig};
use cellmass::game::engine;
use cellmass::{InputEvent, Viewport, World};

/// Headless run of the simulation with a scripted pointer.
#[derive(Debug, Parser)]
#[command(name = "cellmass", version)]
struct Args {
    /// TOML file with world settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Frames per second of the driver
    #[arg(
        long,
        default_value_t = cellmass::config::TICK_RATE,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    fps: u64,
    #[arg(long)]
    seed: Option<u64>,
    /// Request a split every N frames (0 disables)
    #[arg(long, default_value_t = 120)]
    split_every: u64,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "cannot start simulation");
            return ExitCode::FAILURE;
        }
    };
    let world = match World::new(config) {
        Ok(world) => world,
        Err(err) => {
            error!(%err, "cannot start simulation");
            return ExitCode::FAILURE;
        }
    };
    let viewport = Viewport::new(1280.0, 720.0);
    let initial = world.snapshot();

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, mut snapshot_rx) = watch::channel(initial);
    let (active_tx, active_rx) = watch::channel(true);

    let _ = input_tx.send(InputEvent::Resize {
        width: viewport.width,
        height: viewport.height,
    });
    let driver = tokio::spawn(engine::run(
        world,
        input_rx,
        snapshot_tx,
        active_rx,
        engine::frame_period(args.fps),
    ));
    info!(frames = args.frames, fps = args.fps, "simulation running");

    // Pointer orbits the screen centre; splits fire on a fixed cadence.
    let (cx, cy) = viewport.center();
    while snapshot_rx.changed().await.is_ok() {
        let frame = snapshot_rx.borrow_and_update().frame;
        if frame >= args.frames {
            break;
        }
        let angle = frame as f64 * 0.01;
        let _ = input_tx.send(InputEvent::PointerMoved {
            x: cx + angle.cos() * 300.0,
            y: cy + angle.sin() * 200.0,
        });
        if args.split_every > 0 && frame > 0 && frame % args.split_every == 0 {
            let _ = input_tx.send(InputEvent::Split);
        }
    }
    let _ = active_tx.send(false);

    let world = match driver.await {
        Ok(world) => world,
        Err(err) => {
            error!(%err, "frame driver task failed");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "🎮 {} frames, {} cells, score {}",
        world.frame(),
        world.cells.len(),
        world.score()
    );
    if args.json {
        match serde_json::to_string_pretty(&world.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize snapshot");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

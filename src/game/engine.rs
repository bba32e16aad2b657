use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use crate::config::*;
use crate::game::camera::Viewport;
use crate::game::world::{FrameInput, World};
use crate::protocol::messages::{FrameSnapshot, InputEvent};

pub fn frame_period(fps: u64) -> Duration {
    Duration::from_micros((1_000_000 / fps.max(1)).max(1))
}

pub fn default_frame_period() -> Duration {
    frame_period(TICK_RATE)
}

/// Latest host input, folded from events that arrived between frames.
#[derive(Debug, Clone)]
pub struct InputState {
    pointer: (f64, f64),
    viewport: Viewport,
    split_pending: bool,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        InputState {
            pointer: viewport.center(),
            viewport,
            split_pending: false,
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.pointer = (x, y),
            InputEvent::Split => self.split_pending = true,
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width.max(0.0), height.max(0.0))
            }
        }
    }

    /// Drain every queued event without waiting.
    pub fn drain(&mut self, events: &mut mpsc::UnboundedReceiver<InputEvent>) {
        while let Ok(event) = events.try_recv() {
            self.apply(event);
        }
    }

    /// Take this frame's input. Split presses since the last frame collapse into one.
    pub fn sample(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            viewport: self.viewport,
            split: std::mem::take(&mut self.split_pending),
        }
    }
}

/// Drive the world one frame per tick until `active` is cleared or its sender goes away.
/// Returns the world so the host can inspect the final state.
pub async fn run(
    mut world: World,
    mut inputs: mpsc::UnboundedReceiver<InputEvent>,
    snapshots: watch::Sender<FrameSnapshot>,
    mut active: watch::Receiver<bool>,
    period: Duration,
) -> World {
    let mut tick_interval = interval(period);
    let mut input = InputState::new(world.camera.viewport());
    let mut last_score = world.score();

    info!(?period, "frame driver started");
    loop {
        tick_interval.tick().await;
        if !*active.borrow_and_update() || active.has_changed().is_err() {
            break;
        }

        input.drain(&mut inputs);
        let report = world.step(&input.sample());
        if report.score != last_score {
            debug!(frame = report.frame, score = report.score, "score changed");
            last_score = report.score;
        }
        snapshots.send_replace(world.snapshot());
    }
    info!(frame = world.frame(), score = world.score(), "frame driver stopped");
    world
}

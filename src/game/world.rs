use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, trace};

use crate::config::*;
use crate::game::camera::{Camera, Viewport};
use crate::game::collision::{self, CollisionEvents};
use crate::game::food::{Food, Virus};
use crate::game::movement;
use crate::game::physics::Bounds;
use crate::game::body::random_hsl;
use crate::game::player::{total_mass, PlayerCell};
use crate::game::split;
use crate::protocol::messages::{CellState, EntityState, FrameSnapshot};

/// Input sampled once at the top of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in viewport pixels.
    pub pointer: (f64, f64),
    pub viewport: Viewport,
    /// Edge-triggered split request.
    pub split: bool,
}

impl FrameInput {
    /// Pointer resting at the viewport centre, no split.
    pub fn idle(viewport: Viewport) -> Self {
        FrameInput {
            pointer: viewport.center(),
            viewport,
            split: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub score: u64,
    pub split_created: usize,
    pub events: CollisionEvents,
}

/// All live simulation state for one player. Owned by the frame driver.
pub struct World {
    pub config: GameConfig,
    pub bounds: Bounds,
    pub cells: Vec<PlayerCell>,
    pub food: Vec<Food>,
    pub viruses: Vec<Virus>,
    pub camera: Camera,
    frame: u64,
    rng: StdRng,
}

impl World {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bounds = Bounds::new(config.world_width, config.world_height);
        let (cx, cy) = bounds.center();

        let cells = vec![PlayerCell::new(
            cx,
            cy,
            config.start_mass,
            random_hsl(&mut rng, 60),
            config.display_name(),
        )];

        let mut food = Vec::with_capacity(config.food_count);
        for _ in 0..config.food_count {
            food.push(Food::random(&mut rng, bounds));
        }
        let mut viruses = Vec::with_capacity(config.hazard_count);
        for _ in 0..config.hazard_count {
            viruses.push(Virus::random(&mut rng, bounds));
        }

        info!(
            width = bounds.width,
            height = bounds.height,
            food = food.len(),
            viruses = viruses.len(),
            "world created"
        );

        Ok(World {
            config,
            bounds,
            cells,
            food,
            viruses,
            camera: Camera::new(cx, cy, Viewport::default()),
            frame: 0,
            rng,
        })
    }

    /// Run one frame: split request, motion, collisions, camera, report.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        self.camera.set_viewport(input.viewport);
        let aim = self.aim_point(input.pointer);

        let split_created = if input.split { self.split(aim) } else { 0 };

        movement::integrate(&mut self.cells, aim, self.bounds);
        let events = collision::resolve(
            &mut self.cells,
            &mut self.food,
            &mut self.viruses,
            &self.config,
            self.bounds,
            &mut self.rng,
        );
        movement::keep_in_bounds(&mut self.cells, self.bounds);
        self.camera.update(&self.cells);
        self.frame += 1;

        let report = FrameReport {
            frame: self.frame,
            score: self.score(),
            split_created,
            events,
        };
        trace!(?report, cells = self.cells.len(), "frame");
        report
    }

    /// World-space point under the given viewport pixel.
    pub fn aim_point(&self, pointer: (f64, f64)) -> (f64, f64) {
        self.camera.screen_to_world(pointer.0, pointer.1)
    }

    pub fn split(&mut self, aim: (f64, f64)) -> usize {
        split::split_cells(&mut self.cells, aim, &self.config)
    }

    pub fn total_mass(&self) -> f64 {
        total_mass(&self.cells)
    }

    pub fn score(&self) -> u64 {
        self.total_mass().floor() as u64
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// True once the player has no cells left.
    pub fn is_eliminated(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            score: self.score(),
            camera: self.camera.state(),
            cells: self.cells.iter().map(CellState::from).collect(),
            foods: self.food.iter().map(EntityState::of).collect(),
            viruses: self.viruses.iter().map(EntityState::of).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameConfig {
        GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        }
    }

    #[test]
    fn starts_with_one_centred_cell() {
        let world = World::new(seeded()).unwrap();
        assert_eq!(world.cells.len(), 1);
        assert_eq!((world.cells[0].body.x, world.cells[0].body.y), (1500.0, 1500.0));
        assert_eq!(world.cells[0].mass(), 20.0);
        assert_eq!(world.cells[0].name, "Player");
        assert_eq!(world.food.len(), 200);
        assert_eq!(world.viruses.len(), 15);
        assert_eq!(world.score(), 20);
    }

    #[test]
    fn invalid_config_fails_before_first_frame() {
        let config = GameConfig {
            max_cells: 1,
            ..seeded()
        };
        assert!(World::new(config).is_err());
    }

    #[test]
    fn seeded_worlds_spawn_identically() {
        let a = World::new(seeded()).unwrap();
        let b = World::new(seeded()).unwrap();
        let pos = |w: &World| w.food.iter().map(|f| (f.body.x, f.body.y)).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
    }

    #[test]
    fn eliminated_player_is_a_terminal_state() {
        let mut world = World::new(seeded()).unwrap();
        world.cells.clear();
        let before = world.camera.state();
        let report = world.step(&FrameInput::idle(Viewport::new(800.0, 600.0)));
        assert!(world.is_eliminated());
        assert_eq!(report.score, 0);
        assert_eq!(world.camera.x, before.x);
        assert_eq!(world.camera.zoom, before.zoom);
        assert!(world.snapshot().cells.is_empty());
    }

    #[test]
    fn visible_snapshot_culls_offscreen_entities() {
        let world = World::new(seeded()).unwrap();
        let full = world.snapshot();
        let view = world.camera.visible_bounds();
        let visible = full.clone().visible(&world.camera);
        assert_eq!(visible.cells.len(), 1);
        assert!(visible.foods.len() < full.foods.len());
        assert!(visible
            .foods
            .iter()
            .all(|f| view.touches_circle(f.x, f.y, f.radius)));
    }

    #[test]
    fn split_input_runs_before_motion() {
        let mut world = World::new(seeded()).unwrap();
        world.cells[0].body.set_mass(64.0);
        let mut input = FrameInput::idle(Viewport::new(800.0, 600.0));
        input.split = true;
        let report = world.step(&input);
        assert_eq!(report.split_created, 1);
        assert!(world.cells.len() >= 2);
        assert!(world
            .cells
            .iter()
            .all(|c| c.merge_cooldown == world.config.merge_cooldown_frames - 1));
    }
}

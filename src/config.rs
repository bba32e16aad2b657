use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Entity constants
pub const RADIUS_FACTOR: f64 = 4.0;
pub const FOOD_MASS: f64 = 1.0;
pub const VIRUS_MASS: f64 = 100.0;
pub const FOOD_SPAWN_MARGIN: f64 = 5.0;
pub const VIRUS_SPAWN_MARGIN: f64 = 20.0;
pub const VIRUS_COLOR: &str = "#33ff33";

// Movement constants
pub const BASE_SPEED: f64 = 30.0; // units per frame at radius 1
pub const DRAG: f64 = 0.98; // residual velocity kept per frame
pub const SEEK_DEADZONE: f64 = 1.0;

// Split / pop constants
pub const SPLIT_EJECT_SPEED: f64 = 25.0;
pub const SPLIT_RECOIL_DIVISOR: f64 = 5.0;
pub const POP_EJECT_SPEED: f64 = 20.0;
pub const MAX_POP_FRAGMENTS: usize = 8;

// Camera
pub const MIN_VIEW_SPAN: f64 = 250.0;
pub const ZOOM_EXPONENT: f64 = 0.8;
pub const ZOOM_SMOOTHING: f64 = 0.1;
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 1.0;
pub const GRID_SPACING: f64 = 50.0;

// Driver
pub const TICK_RATE: u64 = 60; // nominal frames per second
pub const DEFAULT_PLAYER_NAME: &str = "Player";

// Helper: mass to radius
pub fn mass_to_radius(mass: f64) -> f64 {
    mass.sqrt() * RADIUS_FACTOR
}

// Helper: seek speed for a cell of the given radius
pub fn speed_for_radius(radius: f64) -> f64 {
    BASE_SPEED / radius
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Setup parameters for a single-player world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub food_count: usize,
    pub hazard_count: usize,
    pub start_mass: f64,
    pub merge_cooldown_frames: u32,
    pub min_mass_to_split: f64,
    pub max_cells: usize,
    pub hazard_pop_mass: f64,
    pub hazard_mass_boost: f64,
    pub player_name: String,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 3000.0,
            world_height: 3000.0,
            food_count: 200,
            hazard_count: 15,
            start_mass: 20.0,
            merge_cooldown_frames: 1800, // 30 seconds at 60 fps
            min_mass_to_split: 32.0,
            max_cells: 16,
            hazard_pop_mass: 128.0,
            hazard_mass_boost: 100.0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a TOML file; keys that are absent keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width > 0.0 && self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(ConfigError::Invalid("world dimensions must be positive"));
        }
        if self.food_count == 0 {
            return Err(ConfigError::Invalid("food_count must be positive"));
        }
        if self.hazard_count == 0 {
            return Err(ConfigError::Invalid("hazard_count must be positive"));
        }
        if !(self.start_mass > 0.0) || !self.start_mass.is_finite() {
            return Err(ConfigError::Invalid("start_mass must be positive"));
        }
        let start_diameter = mass_to_radius(self.start_mass) * 2.0;
        if start_diameter > self.world_width.min(self.world_height) {
            return Err(ConfigError::Invalid("start cell does not fit inside the world"));
        }
        if self.max_cells <= 1 {
            return Err(ConfigError::Invalid("max_cells must be greater than 1"));
        }
        if !(self.min_mass_to_split > 0.0) {
            return Err(ConfigError::Invalid("min_mass_to_split must be positive"));
        }
        if !(self.hazard_pop_mass > 0.0) {
            return Err(ConfigError::Invalid("hazard_pop_mass must be positive"));
        }
        if !(self.hazard_mass_boost >= 0.0) {
            return Err(ConfigError::Invalid("hazard_mass_boost must be non-negative"));
        }
        Ok(())
    }

    /// Display name with the empty-name fallback applied.
    pub fn display_name(&self) -> String {
        let trimmed = self.player_name.trim();
        if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        let cases: Vec<fn(&mut GameConfig)> = vec![
            |c| c.food_count = 0,
            |c| c.hazard_count = 0,
            |c| c.start_mass = 0.0,
            |c| c.start_mass = -4.0,
            |c| c.start_mass = f64::NAN,
            |c| c.max_cells = 1,
            |c| c.world_width = 0.0,
            |c| c.world_height = -10.0,
            |c| c.world_width = 20.0,
        ];
        for mutate in cases {
            let mut config = GameConfig::default();
            mutate(&mut config);
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "expected rejection for {config:?}"
            );
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str("food_count = 12\nplayer_name = \"blob\"").unwrap();
        assert_eq!(config.food_count, 12);
        assert_eq!(config.hazard_count, 15);
        assert_eq!(config.display_name(), "blob");
    }

    #[test]
    fn empty_name_falls_back() {
        let config = GameConfig {
            player_name: "   ".into(),
            ..GameConfig::default()
        };
        assert_eq!(config.display_name(), DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn long_names_are_kept_whole() {
        let name = "a-rather-long-player-name-over-twenty";
        let config = GameConfig {
            player_name: name.into(),
            ..GameConfig::default()
        };
        assert_eq!(config.display_name(), name);
    }

    #[test]
    fn radius_follows_mass() {
        assert_eq!(mass_to_radius(16.0), 16.0);
        assert_eq!(mass_to_radius(100.0), 40.0);
    }
}

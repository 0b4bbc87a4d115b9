//! # Generation Module
//!
//! Procedural maze generation and the configuration that drives it.
//!
//! Generation happens in two stages. [`GridGraph`] builds the full
//! 4-neighbor adjacency of the grid, then [`MazeGenerator`] carves a perfect
//! maze out of it with a randomized depth-first search. The result is a
//! [`MazeGraph`] that stays read-only for the rest of the game.

pub mod grid;
pub mod maze;

pub use grid::*;
pub use maze::*;

use crate::config::{
    DEFAULT_BULLET_LIFETIME, DEFAULT_CARVE_DELAY_MS, DEFAULT_COLS, DEFAULT_MISSILE_LIFETIME,
    DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS,
};
use crate::game::GridDims;
use crate::{ChaseError, ChaseResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a game session.
///
/// Every value is fixed when the game is initialized; nothing here changes
/// while a session runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random seed for reproducible generation and ability rolls
    pub seed: u64,
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Ticks a plain bullet lives after being fired
    pub bullet_lifetime: u32,
    /// Ticks a missile lives after being fired
    pub missile_lifetime: u32,
    /// Milliseconds between game loop ticks
    pub tick_interval_ms: u64,
    /// Milliseconds between carved walls in the opening animation
    pub carve_delay_ms: u64,
}

impl GameConfig {
    /// Creates a default configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazechase::GameConfig;
    ///
    /// let config = GameConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!((config.rows, config.cols), (15, 15));
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            bullet_lifetime: DEFAULT_BULLET_LIFETIME,
            missile_lifetime: DEFAULT_MISSILE_LIFETIME,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            carve_delay_ms: DEFAULT_CARVE_DELAY_MS,
        }
    }

    /// Creates a configuration for testing with a small grid.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            rows: 5,
            cols: 5,
            bullet_lifetime: 3,
            missile_lifetime: 6,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            carve_delay_ms: 0,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ChaseResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ChaseResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that the configuration describes a playable game.
    pub fn validate(&self) -> ChaseResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ChaseError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ChaseError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Grid dimensions described by this configuration.
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.rows, self.cols)
    }

    /// Time between game loop ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Time between carved walls in the opening animation.
    pub fn carve_delay(&self) -> Duration {
        Duration::from_millis(self.carve_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Trait for procedural generators.
///
/// Generators produce content from a configuration and a seeded random
/// number generator, and can check their own output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GameConfig, rng: &mut StdRng) -> ChaseResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GameConfig) -> ChaseResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GameConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

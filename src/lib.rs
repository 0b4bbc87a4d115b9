//! # Mazechase
//!
//! A two-agent pursuit game played on a procedurally carved maze.
//!
//! ## Architecture Overview
//!
//! The crate separates the simulation core from everything that touches a
//! window or a keyboard:
//!
//! - **Generation**: builds the full grid graph and carves a perfect maze out
//!   of it with a randomized depth-first search
//! - **Game**: agents, projectiles, the movement rules, the projectile
//!   simulator and the fixed-cadence game loop
//! - **Input**: key bindings that turn key presses into per-agent commands
//! - **Rendering**: the render-sink boundary plus a macroquad implementation
//!
//! The simulation never holds a rendering handle. It records [`GameEvent`]s
//! and the rendering layer turns them into per-cell redraws.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

pub use scenes::{SceneManager, SceneType};

/// Core error type for the Mazechase engine.
#[derive(thiserror::Error, Debug)]
pub enum ChaseError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values cannot produce a playable game
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Mazechase codebase.
pub type ChaseResult<T> = Result<T, ChaseError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default number of maze rows
    pub const DEFAULT_ROWS: usize = 15;

    /// Default number of maze columns
    pub const DEFAULT_COLS: usize = 15;

    /// Ticks a plain bullet survives after being fired
    pub const DEFAULT_BULLET_LIFETIME: u32 = 10;

    /// Ticks a missile survives after being fired
    pub const DEFAULT_MISSILE_LIFETIME: u32 = 20;

    /// Milliseconds between game loop ticks
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

    /// Milliseconds between carved walls in the opening animation
    pub const DEFAULT_CARVE_DELAY_MS: u64 = 50;

    /// Seed used when none is given on the command line
    pub const DEFAULT_SEED: u64 = 12345;
}

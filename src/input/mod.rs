//! # Input Module
//!
//! Input handling for both players sharing one keyboard.

pub mod commands;

pub use commands::*;

use macroquad::prelude::*;

/// Player input types that can be processed by the scene manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// An agent command for the simulation
    Command(Command),
    /// Skip the carve animation
    SkipAnimation,
    /// Start a new game (when the chase has ended)
    NewGame,
    /// Quit the game
    Quit,
}

/// Input handler for processing key presses.
///
/// Unlike a turn-based game, both players act in the same frame, so every
/// key pressed this frame is reported rather than just the first.
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Gets every input pressed since the previous frame.
    pub fn get_inputs(&self) -> Vec<PlayerInput> {
        let mut inputs = Vec::new();

        if is_key_pressed(KeyCode::Escape) {
            inputs.push(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::Enter) {
            inputs.push(PlayerInput::SkipAnimation);
        }
        if is_key_pressed(KeyCode::N) {
            inputs.push(PlayerInput::NewGame);
        }

        inputs.extend(
            KEY_BINDINGS
                .iter()
                .filter(|(key, _, _)| is_key_pressed(*key))
                .map(|&(_, role, action)| PlayerInput::Command(Command::new(role, action))),
        );

        inputs
    }
}

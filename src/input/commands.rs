//! # Command Definitions
//!
//! Per-agent actions and the keyboard layout that produces them.

use crate::game::{Direction, Role};
use macroquad::input::KeyCode;
use serde::{Deserialize, Serialize};

/// Something an agent can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    TeleportSelf,
    TeleportOther,
    Shoot,
    ShootMissile,
}

/// An action tagged with the agent attempting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    pub role: Role,
    pub action: Action,
}

impl Command {
    /// Creates a command.
    pub fn new(role: Role, action: Action) -> Self {
        Self { role, action }
    }
}

/// Keyboard layout shared by both players.
///
/// The robber plays on the left of the keyboard, the cop on the arrow keys.
pub const KEY_BINDINGS: &[(KeyCode, Role, Action)] = &[
    (KeyCode::W, Role::Robber, Action::Move(Direction::Up)),
    (KeyCode::S, Role::Robber, Action::Move(Direction::Down)),
    (KeyCode::A, Role::Robber, Action::Move(Direction::Left)),
    (KeyCode::D, Role::Robber, Action::Move(Direction::Right)),
    (KeyCode::Q, Role::Robber, Action::TeleportSelf),
    (KeyCode::E, Role::Robber, Action::TeleportOther),
    (KeyCode::Up, Role::Cop, Action::Move(Direction::Up)),
    (KeyCode::Down, Role::Cop, Action::Move(Direction::Down)),
    (KeyCode::Left, Role::Cop, Action::Move(Direction::Left)),
    (KeyCode::Right, Role::Cop, Action::Move(Direction::Right)),
    (KeyCode::Space, Role::Cop, Action::Shoot),
    (KeyCode::M, Role::Cop, Action::ShootMissile),
];

/// Looks up the command bound to `key`. Unmapped keys yield `None`.
///
/// # Examples
///
/// ```
/// use macroquad::input::KeyCode;
/// use mazechase::{command_for_key, Action, Command, Direction, Role};
///
/// assert_eq!(
///     command_for_key(KeyCode::W),
///     Some(Command::new(Role::Robber, Action::Move(Direction::Up)))
/// );
/// assert_eq!(command_for_key(KeyCode::F5), None);
/// ```
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _, _)| *bound == key)
        .map(|&(_, role, action)| Command::new(role, action))
}

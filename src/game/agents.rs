//! # Agents and Projectiles
//!
//! Plain simulation records for the robber, the cop, and the bullets the
//! cop fires. Nothing here knows about walls or rendering.

use crate::game::{Direction, Vertex};
use serde::{Deserialize, Serialize};

/// Which side of the pursuit an agent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Robber,
    Cop,
}

impl Role {
    /// The opposing role.
    pub fn other(self) -> Role {
        match self {
            Role::Robber => Role::Cop,
            Role::Cop => Role::Robber,
        }
    }
}

/// One-shot and repeatable abilities an agent holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// May jump to a random vertex once
    pub can_teleport_self: bool,
    /// May throw the other agent to a random vertex once
    pub can_teleport_other: bool,
    /// May fire; cleared while a projectile is in flight
    pub can_shoot: bool,
}

impl Capabilities {
    /// The robber's starting kit: both teleports, no gun.
    pub fn robber() -> Self {
        Self {
            can_teleport_self: true,
            can_teleport_other: true,
            can_shoot: false,
        }
    }

    /// The cop's starting kit: a gun and nothing else.
    pub fn cop() -> Self {
        Self {
            can_teleport_self: false,
            can_teleport_other: false,
            can_shoot: true,
        }
    }

    /// No abilities at all.
    pub fn none() -> Self {
        Self {
            can_teleport_self: false,
            can_teleport_other: false,
            can_shoot: false,
        }
    }
}

/// A pursuit participant.
///
/// An agent whose `position` is `None` has been eliminated and takes no
/// further part in the game.
///
/// # Examples
///
/// ```
/// use mazechase::{Agent, Role};
///
/// let robber = Agent::new(Role::Robber, 0);
/// assert!(robber.is_active());
/// assert!(robber.capabilities.can_teleport_self);
/// assert!(!robber.capabilities.can_shoot);
/// assert_eq!(robber.facing, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub role: Role,
    pub position: Option<Vertex>,
    pub facing: Option<Direction>,
    pub capabilities: Capabilities,
}

impl Agent {
    /// Creates an agent with the default capabilities for its role.
    pub fn new(role: Role, position: Vertex) -> Self {
        let capabilities = match role {
            Role::Robber => Capabilities::robber(),
            Role::Cop => Capabilities::cop(),
        };
        Self::with_capabilities(role, position, capabilities)
    }

    /// Creates an agent with explicit capabilities.
    pub fn with_capabilities(role: Role, position: Vertex, capabilities: Capabilities) -> Self {
        Self {
            role,
            position: Some(position),
            facing: None,
            capabilities,
        }
    }

    /// Whether the agent is still on the board.
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the agent stands on `vertex`.
    pub fn is_at(&self, vertex: Vertex) -> bool {
        self.position == Some(vertex)
    }

    /// Removes the agent from the board.
    pub fn eliminate(&mut self) {
        self.position = None;
    }
}

/// Flight behavior of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Flies straight, ignoring walls, until it leaves the grid
    Bullet,
    /// Respects walls and ricochets off them
    Missile,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Role,
    pub position: Vertex,
    pub direction: Direction,
    pub remaining_lifetime: u32,
    pub kind: ProjectileKind,
}

impl Projectile {
    /// Creates a projectile at the shooter's vertex.
    pub fn new(
        owner: Role,
        position: Vertex,
        direction: Direction,
        kind: ProjectileKind,
        lifetime: u32,
    ) -> Self {
        Self {
            owner,
            position,
            direction,
            remaining_lifetime: lifetime,
            kind,
        }
    }

    /// Whether the projectile ricochets off walls.
    pub fn is_missile(&self) -> bool {
        self.kind == ProjectileKind::Missile
    }
}

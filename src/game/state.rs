//! # Game State Module
//!
//! Central game state and the operations that mutate it.
//!
//! [`GameState`] owns everything that changes during play: both agents, the
//! projectile in flight, and the random number generator behind teleports and
//! ricochets. The maze is generated once and only read afterwards. Each
//! mutation is recorded as a [`GameEvent`] so the rendering layer can redraw
//! just the cells that changed.

use crate::game::{
    Agent, Direction, GridDims, MovementResolver, Projectile, ProjectileKind,
    ProjectileSimulator, Role, Vertex,
};
use crate::generation::{utils, GameConfig, Generator, MazeGeneration, MazeGenerator, MazeGraph};
use crate::input::{Action, Command};
use crate::ChaseResult;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::mem;

/// Notifications of state changes, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The carve animation opened the wall between two cells
    WallCarved { from: Vertex, to: Vertex },
    /// An agent stepped (or pushed through) from one vertex to another
    AgentMoved { role: Role, from: Vertex, to: Vertex },
    /// An agent was relocated by a teleport
    AgentTeleported { role: Role, from: Vertex, to: Vertex },
    /// A projectile left the shooter's vertex
    ProjectileFired {
        owner: Role,
        at: Vertex,
        kind: ProjectileKind,
    },
    /// A projectile advanced one vertex
    ProjectileMoved { from: Vertex, to: Vertex },
    /// A projectile expired or hit something it cannot pass
    ProjectileDestroyed { at: Vertex },
    /// The robber shared a vertex with a projectile
    RobberEliminated { at: Vertex },
}

impl GameEvent {
    /// The vertices whose appearance this event changed.
    pub fn affected_vertices(&self) -> Vec<Vertex> {
        match *self {
            GameEvent::WallCarved { from, to }
            | GameEvent::AgentMoved { from, to, .. }
            | GameEvent::AgentTeleported { from, to, .. }
            | GameEvent::ProjectileMoved { from, to } => vec![from, to],
            GameEvent::ProjectileFired { at, .. }
            | GameEvent::ProjectileDestroyed { at }
            | GameEvent::RobberEliminated { at } => vec![at],
        }
    }
}

/// Game completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// The chase is still on
    Playing,
    /// A projectile caught the robber
    RobberCaught,
}

/// Everything one simulation owns.
///
/// Several independent games can exist side by side; nothing here is global.
///
/// # Examples
///
/// ```
/// use mazechase::{GameConfig, GameState};
///
/// let state = GameState::new(&GameConfig::for_testing(1)).unwrap();
/// assert_eq!(state.robber.position, Some(0));
/// assert_eq!(state.cop.position, Some(24));
/// assert!(state.projectile.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the game was created with
    pub config: GameConfig,
    /// The carved maze, read-only during play
    pub maze: MazeGraph,
    /// Order in which the maze walls were carved
    pub traversal: Vec<(Vertex, Vertex)>,
    pub robber: Agent,
    pub cop: Agent,
    /// The projectile in flight, if any
    pub projectile: Option<Projectile>,
    /// Ticks processed so far
    pub tick_count: u64,
    pub completion_state: GameCompletionState,
    /// Events not yet collected by the rendering layer
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
    #[serde(skip, default = "detached_rng")]
    rng: StdRng,
}

fn detached_rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

impl GameState {
    /// Generates a maze from `config` and places both agents on it.
    pub fn new(config: &GameConfig) -> ChaseResult<Self> {
        let mut rng = utils::create_rng(config);
        let generation = MazeGenerator::new().generate(config, &mut rng)?;
        Ok(Self::from_generation(config.clone(), generation, rng))
    }

    /// Builds a game on an already generated maze.
    ///
    /// The robber starts on the start vertex and the cop on the goal vertex.
    pub fn from_generation(config: GameConfig, generation: MazeGeneration, rng: StdRng) -> Self {
        let dims = generation.maze.dims();
        Self {
            config,
            maze: generation.maze,
            traversal: generation.traversal,
            robber: Agent::new(Role::Robber, dims.start()),
            cop: Agent::new(Role::Cop, dims.goal()),
            projectile: None,
            tick_count: 0,
            completion_state: GameCompletionState::Playing,
            pending_events: Vec::new(),
            rng,
        }
    }

    /// Builds a game on a hand-made maze with explicit agents.
    pub fn with_agents(config: GameConfig, maze: MazeGraph, robber: Agent, cop: Agent) -> Self {
        let rng = utils::create_rng(&config);
        Self {
            config,
            maze,
            traversal: Vec::new(),
            robber,
            cop,
            projectile: None,
            tick_count: 0,
            completion_state: GameCompletionState::Playing,
            pending_events: Vec::new(),
            rng,
        }
    }

    /// Grid dimensions of the maze.
    pub fn dims(&self) -> GridDims {
        self.maze.dims()
    }

    /// The agent playing `role`.
    pub fn agent(&self, role: Role) -> &Agent {
        match role {
            Role::Robber => &self.robber,
            Role::Cop => &self.cop,
        }
    }

    /// The agent playing `role` mutably.
    pub fn agent_mut(&mut self, role: Role) -> &mut Agent {
        match role {
            Role::Robber => &mut self.robber,
            Role::Cop => &mut self.cop,
        }
    }

    /// Whether the chase is over.
    pub fn is_over(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.pending_events)
    }

    /// Records an event produced outside the simulation rules.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Applies one input command immediately. Returns whether anything changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let applied = match command.action {
            Action::Move(direction) => self.try_step(command.role, direction),
            Action::TeleportSelf => self.try_teleport_self(command.role),
            Action::TeleportOther => self.try_teleport_other(command.role),
            Action::Shoot => self.try_shoot(command.role, ProjectileKind::Bullet),
            Action::ShootMissile => self.try_shoot(command.role, ProjectileKind::Missile),
        };
        if !applied {
            debug!("ignored {:?}", command);
        }
        applied
    }

    /// Steps `role`'s agent in `direction`.
    pub fn try_step(&mut self, role: Role, direction: Direction) -> bool {
        let resolver = MovementResolver::new(&self.maze);
        let (agent, other) = match role {
            Role::Robber => (&mut self.robber, &self.cop),
            Role::Cop => (&mut self.cop, &self.robber),
        };
        let from = agent.position;
        if !resolver.try_step(agent, other, direction) {
            return false;
        }
        if let (Some(from), Some(to)) = (from, agent.position) {
            self.pending_events
                .push(GameEvent::AgentMoved { role, from, to });
        }
        true
    }

    /// Spends `role`'s self-teleport.
    pub fn try_teleport_self(&mut self, role: Role) -> bool {
        let resolver = MovementResolver::new(&self.maze);
        let (agent, other) = match role {
            Role::Robber => (&mut self.robber, &self.cop),
            Role::Cop => (&mut self.cop, &self.robber),
        };
        let from = agent.position;
        if !resolver.try_teleport_self(agent, other, &mut self.rng) {
            return false;
        }
        if let (Some(from), Some(to)) = (from, agent.position) {
            self.pending_events
                .push(GameEvent::AgentTeleported { role, from, to });
        }
        true
    }

    /// Spends `role`'s other-teleport on the opposing agent.
    pub fn try_teleport_other(&mut self, role: Role) -> bool {
        let maze = &self.maze;
        let rng = &mut self.rng;
        let (agent, other) = match role {
            Role::Robber => (&mut self.robber, &mut self.cop),
            Role::Cop => (&mut self.cop, &mut self.robber),
        };
        let from = other.position;
        if !MovementResolver::new(maze).try_teleport_other(agent, other, rng) {
            return false;
        }
        if let (Some(from), Some(to)) = (from, other.position) {
            self.pending_events.push(GameEvent::AgentTeleported {
                role: role.other(),
                from,
                to,
            });
        }
        true
    }

    /// Fires a projectile from `role`'s agent along its facing.
    ///
    /// Rejected while a previous projectile is still in flight, before the
    /// agent has faced any direction, or when the agent cannot shoot.
    pub fn try_shoot(&mut self, role: Role, kind: ProjectileKind) -> bool {
        let lifetime = match kind {
            ProjectileKind::Bullet => self.config.bullet_lifetime,
            ProjectileKind::Missile => self.config.missile_lifetime,
        };
        let shooter = self.agent_mut(role);
        if !shooter.capabilities.can_shoot {
            return false;
        }
        let (Some(position), Some(direction)) = (shooter.position, shooter.facing) else {
            return false;
        };

        shooter.capabilities.can_shoot = false;
        self.projectile = Some(Projectile::new(role, position, direction, kind, lifetime));
        self.pending_events.push(GameEvent::ProjectileFired {
            owner: role,
            at: position,
            kind,
        });
        info!("{:?} fired a {:?} {:?} from {}", role, kind, direction, position);
        true
    }

    /// Runs one game loop tick: advance the projectile, then check whether it
    /// caught the robber.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        self.advance_projectile();
        self.check_collision();
    }

    fn advance_projectile(&mut self) {
        let Some(projectile) = self.projectile.as_mut() else {
            return;
        };
        let from = projectile.position;
        let simulator = ProjectileSimulator::new(&self.maze);

        if simulator.advance(projectile, &mut self.rng) {
            let to = projectile.position;
            self.pending_events
                .push(GameEvent::ProjectileMoved { from, to });
            return;
        }

        let owner = projectile.owner;
        self.projectile = None;
        self.agent_mut(owner).capabilities.can_shoot = true;
        self.pending_events
            .push(GameEvent::ProjectileDestroyed { at: from });
        info!("projectile destroyed at {} on tick {}", from, self.tick_count);
    }

    fn check_collision(&mut self) {
        let Some(at) = self.projectile.as_ref().map(|p| p.position) else {
            return;
        };
        if !self.robber.is_at(at) {
            return;
        }
        self.robber.eliminate();
        self.completion_state = GameCompletionState::RobberCaught;
        self.pending_events.push(GameEvent::RobberEliminated { at });
        info!("robber eliminated at {} on tick {}", at, self.tick_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Capabilities;

    fn corridor(cols: usize) -> MazeGraph {
        let edges: Vec<_> = (0..cols - 1).map(|v| (v, v + 1)).collect();
        MazeGraph::from_traversal(GridDims::new(1, cols), &edges)
    }

    fn corridor_game(robber_at: Vertex, cop_at: Vertex) -> GameState {
        let mut config = GameConfig::for_testing(5);
        config.rows = 1;
        config.cols = 10;
        GameState::with_agents(
            config,
            corridor(10),
            Agent::new(Role::Robber, robber_at),
            Agent::new(Role::Cop, cop_at),
        )
    }

    #[test]
    fn test_new_game_places_agents() {
        let state = GameState::new(&GameConfig::for_testing(8)).unwrap();
        assert_eq!(state.robber.position, Some(0));
        assert_eq!(state.cop.position, Some(24));
        assert!(state.maze.is_spanning_tree());
        assert_eq!(state.traversal.len(), 24);
        assert!(!state.is_over());
    }

    #[test]
    fn test_step_records_event() {
        let mut state = corridor_game(0, 9);
        assert!(state.try_step(Role::Robber, Direction::Right));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::AgentMoved {
                role: Role::Robber,
                from: 0,
                to: 1
            }]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_rejected_step_records_nothing() {
        let mut state = corridor_game(0, 9);
        assert!(!state.try_step(Role::Robber, Direction::Left));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_shoot_requires_facing() {
        let mut state = corridor_game(0, 9);
        assert!(!state.try_shoot(Role::Cop, ProjectileKind::Bullet));
        assert!(state.cop.capabilities.can_shoot);
        assert!(state.projectile.is_none());
    }

    #[test]
    fn test_robber_cannot_shoot() {
        let mut state = corridor_game(0, 9);
        state.robber.facing = Some(Direction::Right);
        assert!(!state.try_shoot(Role::Robber, ProjectileKind::Bullet));
    }

    #[test]
    fn test_one_projectile_at_a_time() {
        let mut state = corridor_game(0, 9);
        state.cop.facing = Some(Direction::Left);
        assert!(state.try_shoot(Role::Cop, ProjectileKind::Bullet));
        assert!(!state.cop.capabilities.can_shoot);
        assert!(!state.try_shoot(Role::Cop, ProjectileKind::Missile));
        assert_eq!(
            state.projectile.as_ref().map(|p| p.kind),
            Some(ProjectileKind::Bullet)
        );
    }

    #[test]
    fn test_bullet_catches_robber() {
        let mut state = corridor_game(7, 9);
        state.cop.facing = Some(Direction::Left);
        assert!(state.try_shoot(Role::Cop, ProjectileKind::Bullet));
        state.tick();
        assert!(state.robber.is_active());
        state.tick();
        assert_eq!(state.robber.position, None);
        assert_eq!(state.completion_state, GameCompletionState::RobberCaught);
        // The projectile keeps its own lifecycle
        assert!(state.projectile.is_some());
        assert!(state
            .drain_events()
            .contains(&GameEvent::RobberEliminated { at: 7 }));
    }

    #[test]
    fn test_destroyed_projectile_rearms_shooter() {
        let mut state = corridor_game(0, 9);
        state.cop.facing = Some(Direction::Right);
        assert!(state.try_shoot(Role::Cop, ProjectileKind::Bullet));
        state.tick();
        assert!(state.projectile.is_none());
        assert!(state.cop.capabilities.can_shoot);
        let events = state.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::ProjectileDestroyed { at: 9 }));
    }

    #[test]
    fn test_teleport_other_moves_opponent() {
        let mut state = corridor_game(0, 9);
        assert!(state.try_teleport_other(Role::Robber));
        assert!(!state.robber.capabilities.can_teleport_other);
        assert_eq!(state.robber.position, Some(0));
        let events = state.drain_events();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::AgentTeleported { role: Role::Cop, from: 9, .. }]
        ));
    }

    #[test]
    fn test_apply_command_dispatch() {
        let mut state = corridor_game(0, 9);
        assert!(state.apply_command(Command::new(Role::Cop, Action::Move(Direction::Left))));
        assert_eq!(state.cop.position, Some(8));
        assert!(state.apply_command(Command::new(Role::Cop, Action::Shoot)));
        assert!(state.projectile.is_some());
        assert!(!state.apply_command(Command::new(Role::Cop, Action::TeleportSelf)));
    }

    #[test]
    fn test_agents_without_abilities() {
        let mut state = corridor_game(0, 9);
        state.robber.capabilities = Capabilities::none();
        assert!(!state.try_teleport_self(Role::Robber));
        assert!(!state.try_teleport_other(Role::Robber));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_state_serializes() {
        let state = corridor_game(0, 9);
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.maze, state.maze);
        assert_eq!(restored.robber, state.robber);
    }
}

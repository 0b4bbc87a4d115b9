//! # Movement Rules
//!
//! Validates and applies agent moves against the maze and the other agent.
//!
//! Every rule here is all-or-nothing: a rejected move changes no state and
//! reports `false`.

use crate::game::{Agent, Direction, GridDims, Vertex};
use crate::generation::MazeGraph;
use log::debug;
use rand::Rng;

/// How an agent gets to its target vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// A single step that has to pass through an open wall
    Step(Direction),
    /// A jump that ignores walls and keeps the current facing
    Teleport,
}

/// Applies movement rules over a read-only maze.
///
/// # Examples
///
/// ```
/// use mazechase::{Agent, Direction, GridDims, MazeGraph, Motion, MovementResolver, Role};
///
/// let maze = MazeGraph::from_traversal(GridDims::new(1, 3), &[(0, 1), (1, 2)]);
/// let resolver = MovementResolver::new(&maze);
/// let mut robber = Agent::new(Role::Robber, 0);
/// let cop = Agent::new(Role::Cop, 2);
///
/// assert!(resolver.try_move(&mut robber, &cop, 1, Motion::Step(Direction::Right)));
/// assert_eq!(robber.position, Some(1));
/// assert_eq!(robber.facing, Some(Direction::Right));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MovementResolver<'a> {
    maze: &'a MazeGraph,
}

impl<'a> MovementResolver<'a> {
    /// Creates a resolver over `maze`.
    pub fn new(maze: &'a MazeGraph) -> Self {
        Self { maze }
    }

    fn dims(&self) -> GridDims {
        self.maze.dims()
    }

    /// Moves `agent` to `target` if the rules allow it.
    ///
    /// - Targets outside the grid are rejected.
    /// - A teleport relocates unconditionally.
    /// - A step onto the other agent's vertex becomes a push-through: the
    ///   agent lands one vertex beyond the other agent, provided the wall on
    ///   that side of the other agent is open.
    /// - Any other step needs an open wall between the agent and `target`.
    pub fn try_move(&self, agent: &mut Agent, other: &Agent, target: Vertex, motion: Motion) -> bool {
        let Some(current) = agent.position else {
            return false;
        };
        if !self.dims().contains(target) {
            return false;
        }

        match motion {
            Motion::Teleport => {
                agent.position = Some(target);
                true
            }
            Motion::Step(direction) if other.is_at(target) => {
                let beyond = self
                    .dims()
                    .step(target, direction)
                    .filter(|&beyond| self.maze.is_open(target, beyond));
                match beyond {
                    Some(beyond) => {
                        debug!("{:?} pushes through {:?} to {}", agent.role, other.role, beyond);
                        agent.position = Some(beyond);
                        agent.facing = Some(direction);
                        true
                    }
                    None => false,
                }
            }
            Motion::Step(direction) => {
                if !self.maze.is_open(current, target) {
                    return false;
                }
                agent.position = Some(target);
                agent.facing = Some(direction);
                true
            }
        }
    }

    /// Steps `agent` one vertex in `direction`.
    ///
    /// Steps that would leave the grid, including horizontal steps that would
    /// wrap into the next row, are rejected before reaching [`Self::try_move`].
    pub fn try_step(&self, agent: &mut Agent, other: &Agent, direction: Direction) -> bool {
        let Some(current) = agent.position else {
            return false;
        };
        match self.dims().step(current, direction) {
            Some(target) => self.try_move(agent, other, target, Motion::Step(direction)),
            None => false,
        }
    }

    /// Spends `agent`'s self-teleport to jump to a random vertex.
    pub fn try_teleport_self<R: Rng + ?Sized>(
        &self,
        agent: &mut Agent,
        other: &Agent,
        rng: &mut R,
    ) -> bool {
        if !agent.capabilities.can_teleport_self || !agent.is_active() {
            return false;
        }
        let target = rng.gen_range(0..self.dims().vertex_count());
        let moved = self.try_move(agent, other, target, Motion::Teleport);
        if moved {
            agent.capabilities.can_teleport_self = false;
        }
        moved
    }

    /// Spends `agent`'s other-teleport to throw `other` to a random vertex.
    pub fn try_teleport_other<R: Rng + ?Sized>(
        &self,
        agent: &mut Agent,
        other: &mut Agent,
        rng: &mut R,
    ) -> bool {
        if !agent.capabilities.can_teleport_other || !agent.is_active() {
            return false;
        }
        let target = rng.gen_range(0..self.dims().vertex_count());
        let moved = self.try_move(other, agent, target, Motion::Teleport);
        if moved {
            agent.capabilities.can_teleport_other = false;
        }
        moved
    }
}

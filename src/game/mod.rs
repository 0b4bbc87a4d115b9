//! # Game Module
//!
//! Core simulation state, grid geometry, and the rules that mutate it.
//!
//! This module contains the fundamental building blocks of the pursuit:
//! - Grid geometry over row-major vertex ids
//! - Agents and projectiles
//! - Movement and projectile rules
//! - The game state and the fixed-cadence game loop

pub mod agents;
pub mod game_loop;
pub mod movement;
pub mod projectile;
pub mod state;

pub use agents::*;
pub use game_loop::*;
pub use movement::*;
pub use projectile::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// A grid cell, identified by its row-major index.
pub type Vertex = usize;

/// Directions for movement and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all 4 directions in neighbor order (up, down, left, right).
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazechase::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the two directions at right angles to this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// Whether the direction moves along a row.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Dimensions of the rectangular grid the maze is laid over.
///
/// Vertex ids are row-major: `row = id / cols`, `col = id % cols`.
///
/// # Examples
///
/// ```
/// use mazechase::{Direction, GridDims};
///
/// let dims = GridDims::new(3, 4);
/// assert_eq!(dims.vertex_count(), 12);
/// assert_eq!(dims.row_col(6), (1, 2));
/// assert_eq!(dims.step(6, Direction::Up), Some(2));
/// assert_eq!(dims.step(7, Direction::Right), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    /// Creates grid dimensions. Both values must be positive.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of vertices in the grid.
    pub fn vertex_count(self) -> usize {
        self.rows * self.cols
    }

    /// Whether `vertex` lies in `[0, rows*cols)`.
    pub fn contains(self, vertex: Vertex) -> bool {
        vertex < self.vertex_count()
    }

    /// Splits a vertex id into `(row, col)`.
    pub fn row_col(self, vertex: Vertex) -> (usize, usize) {
        (vertex / self.cols, vertex % self.cols)
    }

    /// Joins `(row, col)` into a vertex id.
    pub fn vertex_at(self, row: usize, col: usize) -> Vertex {
        row * self.cols + col
    }

    /// The vertex where play starts and the carve animation begins.
    pub fn start(self) -> Vertex {
        0
    }

    /// The last vertex of the grid, highlighted as the goal.
    pub fn goal(self) -> Vertex {
        self.vertex_count().saturating_sub(1)
    }

    /// True if stepping from `vertex` in `direction` leaves the grid.
    ///
    /// Horizontal steps are checked against the row edges so that id
    /// arithmetic never wraps into the neighboring row.
    pub fn is_out_of_bounds(self, vertex: Vertex, direction: Direction) -> bool {
        if !self.contains(vertex) {
            return true;
        }
        let (row, col) = self.row_col(vertex);
        match direction {
            Direction::Up => row == 0,
            Direction::Down => row + 1 >= self.rows,
            Direction::Left => col == 0,
            Direction::Right => col + 1 >= self.cols,
        }
    }

    /// The vertex one step from `vertex` in `direction`, if it exists.
    pub fn step(self, vertex: Vertex, direction: Direction) -> Option<Vertex> {
        if self.is_out_of_bounds(vertex, direction) {
            return None;
        }
        Some(match direction {
            Direction::Up => vertex - self.cols,
            Direction::Down => vertex + self.cols,
            Direction::Left => vertex - 1,
            Direction::Right => vertex + 1,
        })
    }

    /// The direction leading from `from` to the grid-adjacent `to`.
    pub fn direction_between(self, from: Vertex, to: Vertex) -> Option<Direction> {
        Direction::all()
            .into_iter()
            .find(|&direction| self.step(from, direction) == Some(to))
    }
}

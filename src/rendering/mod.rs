//! # Rendering Module
//!
//! The boundary between the simulation and whatever draws it.
//!
//! The simulation never calls a renderer. It records [`GameEvent`]s, and
//! [`publish_events`] turns those into one [`RenderSink::render`] call per
//! affected cell, carrying a freshly derived [`CellView`].

pub mod carve;
pub mod display;
pub mod ui;

pub use carve::*;
pub use display::*;
pub use ui::*;

use crate::game::{Direction, GameEvent, GameState, GridDims, ProjectileKind, Vertex};
use crate::generation::MazeGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which sides of a cell still have a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    /// A cell boxed in on every side.
    pub fn closed() -> Self {
        Self {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }

    /// Reads the walls of `vertex` from `maze`. The grid border is a wall.
    pub fn of(maze: &MazeGraph, vertex: Vertex) -> Self {
        Self {
            up: !maze.is_open_toward(vertex, Direction::Up),
            down: !maze.is_open_toward(vertex, Direction::Down),
            left: !maze.is_open_toward(vertex, Direction::Left),
            right: !maze.is_open_toward(vertex, Direction::Right),
        }
    }

    /// Whether the wall on the `direction` side stands.
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// What occupies a cell, as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    None,
    Robber,
    Cop,
    Bullet,
    Missile,
}

/// Highlighting applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The vertex carving starts from
    Start,
    /// The last vertex of the grid
    Goal,
    /// A cell the carve animation has reached
    Carved,
}

/// Everything needed to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    pub walls: Walls,
    pub occupant: Occupant,
    pub marker: Option<Marker>,
}

impl CellView {
    /// A walled-in, empty, unmarked cell.
    pub fn blank() -> Self {
        Self {
            walls: Walls::closed(),
            occupant: Occupant::None,
            marker: None,
        }
    }
}

/// Consumer of per-cell redraw notifications.
pub trait RenderSink {
    /// Called once per state change of `vertex`.
    fn render(&mut self, vertex: Vertex, view: &CellView);
}

/// A sink that remembers every call, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: Vec<(Vertex, CellView)>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent view rendered for `vertex`.
    pub fn last_view(&self, vertex: Vertex) -> Option<&CellView> {
        self.calls
            .iter()
            .rev()
            .find(|(v, _)| *v == vertex)
            .map(|(_, view)| view)
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, vertex: Vertex, view: &CellView) {
        self.calls.push((vertex, *view));
    }
}

/// Start and goal markers, which stay fixed for the whole game.
pub fn terminal_marker(dims: GridDims, vertex: Vertex) -> Option<Marker> {
    if vertex == dims.start() {
        Some(Marker::Start)
    } else if vertex == dims.goal() {
        Some(Marker::Goal)
    } else {
        None
    }
}

/// Derives the current view of `vertex` during play.
///
/// When several things share a cell the robber is drawn first, then the
/// cop, then the projectile.
pub fn cell_view(state: &GameState, vertex: Vertex) -> CellView {
    let occupant = if state.robber.is_at(vertex) {
        Occupant::Robber
    } else if state.cop.is_at(vertex) {
        Occupant::Cop
    } else {
        match &state.projectile {
            Some(p) if p.position == vertex => match p.kind {
                ProjectileKind::Bullet => Occupant::Bullet,
                ProjectileKind::Missile => Occupant::Missile,
            },
            _ => Occupant::None,
        }
    };

    CellView {
        walls: Walls::of(&state.maze, vertex),
        occupant,
        marker: terminal_marker(state.dims(), vertex),
    }
}

/// Renders every cell of the finished maze once.
pub fn render_all<S: RenderSink + ?Sized>(state: &GameState, sink: &mut S) {
    for vertex in 0..state.dims().vertex_count() {
        sink.render(vertex, &cell_view(state, vertex));
    }
}

/// Renders each cell touched by `events` once, in ascending vertex order.
pub fn publish_events<S: RenderSink + ?Sized>(state: &GameState, events: &[GameEvent], sink: &mut S) {
    let dirty: BTreeSet<Vertex> = events
        .iter()
        .flat_map(GameEvent::affected_vertices)
        .filter(|&vertex| state.dims().contains(vertex))
        .collect();
    for vertex in dirty {
        sink.render(vertex, &cell_view(state, vertex));
    }
}

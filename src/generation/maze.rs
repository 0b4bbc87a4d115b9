//! # Maze Generation
//!
//! Carves a perfect maze out of a [`GridGraph`] with a randomized
//! depth-first search (recursive backtracker).
//!
//! The search keeps an explicit work stack of `(from, to)` pairs. Every time
//! it reaches an unvisited vertex it records the pair, so the traversal is
//! the order in which walls get carved, not a walkable path: after a dead end
//! the next pair usually starts somewhere else. Each recorded pair is still
//! grid-adjacent because `to` was pushed as a literal neighbor of `from`.
//!
//! Replaying the traversal into an empty [`MazeGraph`] reconstructs the
//! spanning tree.

use crate::game::{Direction, GridDims, Vertex};
use crate::generation::{GameConfig, Generator, GridGraph};
use crate::{ChaseError, ChaseResult};
use log::debug;
use pathfinding::prelude::{bfs, bfs_reach};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One carved wall: the search moved from `.0` to the unvisited `.1`.
pub type TraversalEdge = (Vertex, Vertex);

/// Passable connections between grid cells.
///
/// Each vertex lists the neighbors it has an open wall towards. Connections
/// are always recorded on both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGraph {
    dims: GridDims,
    adjacency: Vec<Vec<Vertex>>,
}

impl MazeGraph {
    /// Creates a maze with every wall standing.
    pub fn empty(dims: GridDims) -> Self {
        Self {
            dims,
            adjacency: vec![Vec::new(); dims.vertex_count()],
        }
    }

    /// Creates a maze with every wall of the grid removed.
    pub fn open(grid: &GridGraph) -> Self {
        let mut maze = Self::empty(grid.dims());
        for vertex in 0..grid.len() {
            for &neighbor in grid.neighbors(vertex) {
                maze.connect(vertex, neighbor);
            }
        }
        maze
    }

    /// Rebuilds the spanning tree from a traversal, in order.
    ///
    /// Each `to` appears in at most one pair and never appears as a `from`
    /// before its own pair, so its adjacency is still empty when its parent
    /// connection is recorded.
    pub fn from_traversal(dims: GridDims, traversal: &[TraversalEdge]) -> Self {
        let mut maze = Self::empty(dims);
        for &(from, to) in traversal {
            debug_assert!(
                maze.neighbors(to).is_empty(),
                "vertex {to} reached twice in traversal"
            );
            maze.connect(from, to);
        }
        maze
    }

    /// Grid dimensions of the maze.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the maze has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Opens the wall between two vertices. Out-of-range ids are ignored.
    pub fn connect(&mut self, a: Vertex, b: Vertex) {
        if a == b || !self.dims.contains(a) || !self.dims.contains(b) {
            return;
        }
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
        }
        if !self.adjacency[b].contains(&a) {
            self.adjacency[b].push(a);
        }
    }

    /// Passable neighbors of `vertex`.
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether no wall separates `from` and `to`.
    pub fn is_open(&self, from: Vertex, to: Vertex) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Whether the wall on the `direction` side of `vertex` is open.
    pub fn is_open_toward(&self, vertex: Vertex, direction: Direction) -> bool {
        self.dims
            .step(vertex, direction)
            .is_some_and(|next| self.is_open(vertex, next))
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Every vertex reachable from `start`, including `start` itself.
    pub fn reachable_from(&self, start: Vertex) -> HashSet<Vertex> {
        if !self.dims.contains(start) {
            return HashSet::new();
        }
        bfs_reach(start, |&vertex| self.neighbors(vertex).to_vec()).collect()
    }

    /// The path from `from` to `to`, both ends included.
    ///
    /// In a perfect maze this is the only simple path between the two.
    pub fn path_between(&self, from: Vertex, to: Vertex) -> Option<Vec<Vertex>> {
        if !self.dims.contains(from) || !self.dims.contains(to) {
            return None;
        }
        bfs(
            &from,
            |&vertex| self.neighbors(vertex).to_vec(),
            |&vertex| vertex == to,
        )
    }

    /// Connected and acyclic: exactly `n - 1` connections reaching every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        let count = self.len();
        count > 0
            && self.connection_count() == count - 1
            && self.reachable_from(0).len() == count
    }
}

/// Output of one maze generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGeneration {
    /// The carve order, for replaying the maze wall by wall
    pub traversal: Vec<TraversalEdge>,
    /// The finished maze
    pub maze: MazeGraph,
}

/// Randomized depth-first maze generator.
///
/// # Examples
///
/// ```
/// use mazechase::{GameConfig, Generator, MazeGenerator};
/// use mazechase::generation::utils::create_rng;
///
/// let config = GameConfig::new(42);
/// let mut rng = create_rng(&config);
/// let generation = MazeGenerator::new().generate(&config, &mut rng).unwrap();
/// assert_eq!(generation.maze.connection_count(), 15 * 15 - 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    /// Creates a new maze generator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the search with `shuffle` deciding the neighbor order at each vertex.
    ///
    /// The search starts at vertex 0. Neighbors are pushed in shuffled order
    /// and visited in reverse, since the stack is last-in first-out.
    pub fn traverse_with<F>(&self, grid: &GridGraph, mut shuffle: F) -> Vec<TraversalEdge>
    where
        F: FnMut(&mut [Vertex]),
    {
        let mut traversal = Vec::with_capacity(grid.len().saturating_sub(1));
        if grid.is_empty() {
            return traversal;
        }

        let mut visited = vec![false; grid.len()];
        let mut stack: Vec<(Option<Vertex>, Vertex)> = vec![(None, 0)];

        while let Some((from, to)) = stack.pop() {
            if !visited[to] {
                if let Some(from) = from {
                    traversal.push((from, to));
                }
                visited[to] = true;
            }

            let mut neighbors = grid.neighbors(to).to_vec();
            shuffle(&mut neighbors);
            // Pairs may be stale by the time they are popped; the visited
            // check above filters them.
            stack.extend(
                neighbors
                    .into_iter()
                    .filter(|&neighbor| !visited[neighbor])
                    .map(|neighbor| (Some(to), neighbor)),
            );
        }

        traversal
    }

    /// Runs the search with a uniform Fisher-Yates shuffle from `rng`.
    pub fn traverse<R: Rng + ?Sized>(&self, grid: &GridGraph, rng: &mut R) -> Vec<TraversalEdge> {
        self.traverse_with(grid, |neighbors| neighbors.shuffle(rng))
    }

    /// Generates a maze over `grid`.
    pub fn carve<R: Rng + ?Sized>(&self, grid: &GridGraph, rng: &mut R) -> MazeGeneration {
        let traversal = self.traverse(grid, rng);
        let maze = MazeGraph::from_traversal(grid.dims(), &traversal);
        debug!(
            "carved {}x{} maze with {} connections",
            grid.dims().rows,
            grid.dims().cols,
            maze.connection_count()
        );
        MazeGeneration { traversal, maze }
    }
}

impl Generator<MazeGeneration> for MazeGenerator {
    fn generate(&self, config: &GameConfig, rng: &mut StdRng) -> ChaseResult<MazeGeneration> {
        config.validate()?;
        let grid = GridGraph::from_dims(config.dims());
        let generation = self.carve(&grid, rng);
        self.validate(&generation, config)?;
        Ok(generation)
    }

    fn validate(&self, content: &MazeGeneration, config: &GameConfig) -> ChaseResult<()> {
        if content.maze.dims() != config.dims() {
            return Err(ChaseError::GenerationFailed(format!(
                "maze is {:?}, expected {:?}",
                content.maze.dims(),
                config.dims()
            )));
        }
        if content.traversal.len() + 1 != config.dims().vertex_count() {
            return Err(ChaseError::GenerationFailed(format!(
                "traversal carved {} walls for {} cells",
                content.traversal.len(),
                config.dims().vertex_count()
            )));
        }
        if !content.maze.is_spanning_tree() {
            return Err(ChaseError::GenerationFailed(
                "maze is not a spanning tree".to_string(),
            ));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "MazeGenerator"
    }
}

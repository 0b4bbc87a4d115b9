//! # Grid Graph
//!
//! Full 4-neighbor adjacency of a rectangular grid, before any walls are
//! carved.

use crate::game::{Direction, GridDims, Vertex};

/// Adjacency of every vertex to its in-bounds up, down, left and right
/// neighbors, in that order.
///
/// # Examples
///
/// ```
/// use mazechase::GridGraph;
///
/// let grid = GridGraph::build(2, 2);
/// assert_eq!(grid.neighbors(0), &[2, 1]);
/// assert_eq!(grid.neighbors(3), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    dims: GridDims,
    adjacency: Vec<Vec<Vertex>>,
}

impl GridGraph {
    /// Builds the adjacency for a `rows` x `cols` grid.
    pub fn build(rows: usize, cols: usize) -> Self {
        Self::from_dims(GridDims::new(rows, cols))
    }

    /// Builds the adjacency for the given dimensions.
    pub fn from_dims(dims: GridDims) -> Self {
        let adjacency = (0..dims.vertex_count())
            .map(|vertex| {
                Direction::all()
                    .into_iter()
                    .filter_map(|direction| dims.step(vertex, direction))
                    .collect()
            })
            .collect();

        Self { dims, adjacency }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the grid has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of `vertex`, or an empty slice for ids outside the grid.
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of undirected edges in the grid.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two_adjacency() {
        let grid = GridGraph::build(2, 2);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.neighbors(0), &[2, 1]);
        assert_eq!(grid.neighbors(1), &[3, 0]);
        assert_eq!(grid.neighbors(2), &[0, 3]);
        assert_eq!(grid.neighbors(3), &[1, 2]);
        assert_eq!(grid.edge_count(), 4);
    }

    #[test]
    fn test_interior_vertex_has_four_neighbors() {
        let grid = GridGraph::build(3, 3);
        assert_eq!(grid.neighbors(4), &[1, 7, 3, 5]);
    }

    #[test]
    fn test_single_row_never_wraps() {
        let grid = GridGraph::build(1, 10);
        assert_eq!(grid.neighbors(0), &[1]);
        assert_eq!(grid.neighbors(9), &[8]);
        assert_eq!(grid.neighbors(5), &[4, 6]);
    }

    #[test]
    fn test_edge_count_formula() {
        let grid = GridGraph::build(4, 6);
        // rows*(cols-1) horizontal + (rows-1)*cols vertical
        assert_eq!(grid.edge_count(), 4 * 5 + 3 * 6);
    }

    #[test]
    fn test_single_cell() {
        let grid = GridGraph::build(1, 1);
        assert_eq!(grid.len(), 1);
        assert!(grid.neighbors(0).is_empty());
        assert!(grid.neighbors(1).is_empty());
    }
}

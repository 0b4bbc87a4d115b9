//! # Carve Animation
//!
//! Replays a maze traversal one wall at a time, so the maze appears to be dug
//! out in the order the search visited it.

use crate::game::{GameEvent, GridDims, TickClock, Vertex};
use crate::generation::MazeGraph;
use crate::rendering::{terminal_marker, CellView, Marker, Occupant, RenderSink, Walls};
use std::time::Duration;

/// Progressive replay of a carve order.
#[derive(Debug, Clone)]
pub struct CarveAnimation {
    traversal: Vec<(Vertex, Vertex)>,
    cursor: usize,
    partial: MazeGraph,
    reached: Vec<bool>,
    clock: TickClock,
}

impl CarveAnimation {
    /// Creates an animation that opens one wall per `delay`.
    ///
    /// A zero delay carves everything on the first [`Self::update`].
    pub fn new(dims: GridDims, traversal: Vec<(Vertex, Vertex)>, delay: Duration) -> Self {
        Self {
            traversal,
            cursor: 0,
            partial: MazeGraph::empty(dims),
            reached: vec![false; dims.vertex_count()],
            clock: TickClock::new(delay),
        }
    }

    /// Whether every wall has been opened.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.traversal.len()
    }

    /// Walls opened so far.
    pub fn carved(&self) -> usize {
        self.cursor
    }

    /// Total walls the animation will open.
    pub fn total(&self) -> usize {
        self.traversal.len()
    }

    /// The maze as carved so far.
    pub fn partial_maze(&self) -> &MazeGraph {
        &self.partial
    }

    /// Opens the next wall and reports it.
    pub fn step(&mut self) -> Option<GameEvent> {
        let &(from, to) = self.traversal.get(self.cursor)?;
        self.cursor += 1;
        self.partial.connect(from, to);
        self.mark_reached(from);
        self.mark_reached(to);
        Some(GameEvent::WallCarved { from, to })
    }

    /// Lets `elapsed` time pass and opens the walls that fell due.
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let due = if self.clock.interval().is_zero() {
            self.total()
        } else {
            self.clock.advance(elapsed) as usize
        };
        (0..due).map_while(|_| self.step()).collect()
    }

    /// Opens every remaining wall at once.
    pub fn finish(&mut self) -> Vec<GameEvent> {
        std::iter::from_fn(|| self.step()).collect()
    }

    fn mark_reached(&mut self, vertex: Vertex) {
        if let Some(reached) = self.reached.get_mut(vertex) {
            *reached = true;
        }
    }

    /// Derives the current view of `vertex` mid-animation.
    pub fn cell_view(&self, vertex: Vertex) -> CellView {
        let marker = terminal_marker(self.partial.dims(), vertex).or_else(|| {
            self.reached
                .get(vertex)
                .copied()
                .unwrap_or(false)
                .then_some(Marker::Carved)
        });
        CellView {
            walls: Walls::of(&self.partial, vertex),
            occupant: Occupant::None,
            marker,
        }
    }

    /// Renders both cells of every carve event.
    pub fn publish<S: RenderSink + ?Sized>(&self, events: &[GameEvent], sink: &mut S) {
        for event in events {
            for vertex in event.affected_vertices() {
                sink.render(vertex, &self.cell_view(vertex));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::RecordingSink;

    fn two_by_two() -> CarveAnimation {
        CarveAnimation::new(
            GridDims::new(2, 2),
            vec![(0, 1), (1, 3), (3, 2)],
            Duration::from_millis(50),
        )
    }

    #[test]
    fn test_update_follows_delay() {
        let mut animation = two_by_two();
        assert!(animation.update(Duration::from_millis(30)).is_empty());
        assert_eq!(
            animation.update(Duration::from_millis(30)),
            vec![GameEvent::WallCarved { from: 0, to: 1 }]
        );
        assert_eq!(animation.update(Duration::from_millis(500)).len(), 2);
        assert!(animation.is_finished());
        assert!(animation.partial_maze().is_spanning_tree());
    }

    #[test]
    fn test_zero_delay_carves_immediately() {
        let mut animation =
            CarveAnimation::new(GridDims::new(2, 2), vec![(0, 1), (1, 3), (3, 2)], Duration::ZERO);
        assert_eq!(animation.update(Duration::ZERO).len(), 3);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_views_open_walls_progressively() {
        let mut animation = two_by_two();
        assert_eq!(animation.cell_view(1).walls, Walls::closed());
        assert_eq!(animation.cell_view(1).marker, None);

        let events = vec![animation.step().unwrap()];
        let mut sink = RecordingSink::new();
        animation.publish(&events, &mut sink);

        let start = sink.last_view(0).unwrap();
        assert!(!start.walls.right);
        assert_eq!(start.marker, Some(Marker::Start));
        let carved = sink.last_view(1).unwrap();
        assert!(!carved.walls.left);
        assert_eq!(carved.marker, Some(Marker::Carved));
        assert_eq!(sink.calls.len(), 2);
    }

    #[test]
    fn test_finish_and_goal_marker() {
        let mut animation = two_by_two();
        assert_eq!(animation.finish().len(), 3);
        assert_eq!(animation.carved(), animation.total());
        assert_eq!(animation.cell_view(3).marker, Some(Marker::Goal));
        assert!(animation.step().is_none());
    }
}

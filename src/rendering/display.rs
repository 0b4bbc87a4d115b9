//! # Display Management
//!
//! Screen management and 2D maze drawing using macroquad.

use crate::game::{GridDims, Vertex};
use crate::rendering::{CellView, Marker, Occupant, RenderSink, UI};
use macroquad::prelude::*;

/// Macroquad display for the maze.
///
/// Acts as a [`RenderSink`]: redraw notifications update a per-cell cache,
/// and [`MacroquadDisplay::draw`] paints the cache every frame.
pub struct MacroquadDisplay {
    /// Grid being displayed
    pub dims: GridDims,
    /// Cell size in pixels
    pub cell_size: f32,
    /// Wall thickness in pixels
    pub wall_thickness: f32,
    /// Top-left corner of the maze in pixels
    pub origin: Vec2,
    /// Latest view of every cell
    pub cells: Vec<CellView>,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Status panel
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display sized to fit `dims` in the current window.
    pub fn new(dims: GridDims) -> Self {
        let ui = UI::new();
        let usable_width = screen_width() - ui.panel_width - 40.0;
        let usable_height = screen_height() - 140.0;
        let cell_size = (usable_width / dims.cols.max(1) as f32)
            .min(usable_height / dims.rows.max(1) as f32)
            .clamp(8.0, 40.0);

        Self {
            dims,
            cell_size,
            wall_thickness: (cell_size / 8.0).max(2.0),
            origin: vec2(20.0, 20.0),
            cells: vec![CellView::blank(); dims.vertex_count()],
            messages: Vec::new(),
            max_messages: 6,
            ui,
        }
    }

    /// Adds a message to the log, dropping the oldest past the limit.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    /// Resets every cell to a blank, walled-in view.
    pub fn clear_cells(&mut self) {
        self.cells.fill(CellView::blank());
    }

    /// Paints the maze, the status panel, and the message log.
    pub fn draw(&self, status: &[String]) {
        clear_background(Color::from_rgba(30, 30, 36, 255));

        for (vertex, view) in self.cells.iter().enumerate() {
            self.draw_cell(vertex, view);
        }

        let maze_right = self.origin.x + self.dims.cols as f32 * self.cell_size;
        self.ui.render_panel(maze_right + 20.0, self.origin.y, status);
        self.render_messages();
    }

    fn draw_cell(&self, vertex: Vertex, view: &CellView) {
        let (row, col) = self.dims.row_col(vertex);
        let x = self.origin.x + col as f32 * self.cell_size;
        let y = self.origin.y + row as f32 * self.cell_size;
        let size = self.cell_size;
        let t = self.wall_thickness;

        let floor = match view.marker {
            Some(Marker::Start) => GREEN,
            Some(Marker::Goal) => RED,
            Some(Marker::Carved) => Color::from_rgba(96, 165, 250, 255),
            None => DARKGRAY,
        };
        draw_rectangle(x, y, size, size, floor);

        match view.occupant {
            Occupant::None => {}
            Occupant::Robber => draw_circle(x + size / 2.0, y + size / 2.0, size * 0.32, YELLOW),
            Occupant::Cop => draw_circle(x + size / 2.0, y + size / 2.0, size * 0.32, BLUE),
            Occupant::Bullet => draw_circle(x + size / 2.0, y + size / 2.0, size * 0.12, WHITE),
            Occupant::Missile => draw_circle(x + size / 2.0, y + size / 2.0, size * 0.18, ORANGE),
        }

        let wall = LIGHTGRAY;
        if view.walls.up {
            draw_rectangle(x, y, size, t, wall);
        }
        if view.walls.down {
            draw_rectangle(x, y + size - t, size, t, wall);
        }
        if view.walls.left {
            draw_rectangle(x, y, t, size, wall);
        }
        if view.walls.right {
            draw_rectangle(x + size - t, y, t, size, wall);
        }
    }

    fn render_messages(&self) {
        let mut line_y = screen_height() - 20.0;
        for message in self.messages.iter().rev() {
            draw_text(message, self.origin.x, line_y, 18.0, WHITE);
            line_y -= 20.0;
        }
    }
}

impl RenderSink for MacroquadDisplay {
    fn render(&mut self, vertex: Vertex, view: &CellView) {
        if let Some(cell) = self.cells.get_mut(vertex) {
            *cell = *view;
        }
    }
}

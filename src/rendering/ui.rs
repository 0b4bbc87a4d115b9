//! # User Interface Elements
//!
//! Status panel text for both players.

use crate::game::{Agent, GameCompletionState, GameState, Role};
use macroquad::prelude::*;

/// Side panel next to the maze.
pub struct UI {
    /// Panel width in pixels
    pub panel_width: f32,
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

impl UI {
    /// Creates a new UI instance.
    pub fn new() -> Self {
        Self { panel_width: 280.0 }
    }

    /// Draws a title and the given status lines starting at `(x, y)`.
    pub fn render_panel(&self, x: f32, y: f32, lines: &[String]) {
        let mut line_y = y + 20.0;
        draw_text("MAZECHASE", x, line_y, 28.0, WHITE);
        line_y += 36.0;
        for line in lines {
            draw_text(line, x, line_y, 18.0, LIGHTGRAY);
            line_y += 22.0;
        }
    }
}

fn ready(flag: bool) -> &'static str {
    if flag {
        "ready"
    } else {
        "used"
    }
}

fn agent_lines(agent: &Agent) -> Vec<String> {
    let name = match agent.role {
        Role::Robber => "Robber (WASD)",
        Role::Cop => "Cop (arrows)",
    };
    let position = agent
        .position
        .map_or_else(|| "eliminated".to_string(), |v| format!("at {}", v));
    let mut lines = vec![format!("{} {}", name, position)];
    match agent.role {
        Role::Robber => {
            lines.push(format!(
                "  Q teleport self: {}",
                ready(agent.capabilities.can_teleport_self)
            ));
            lines.push(format!(
                "  E teleport cop: {}",
                ready(agent.capabilities.can_teleport_other)
            ));
        }
        Role::Cop => {
            let gun = if agent.capabilities.can_shoot {
                "loaded"
            } else {
                "in flight"
            };
            lines.push(format!("  SPACE/M shoot: {}", gun));
        }
    }
    lines
}

/// Status lines describing `state` for the side panel.
pub fn status_lines(state: &GameState) -> Vec<String> {
    let mut lines = agent_lines(&state.robber);
    lines.extend(agent_lines(&state.cop));
    lines.push(String::new());
    lines.push(format!("Tick {}", state.tick_count));
    if state.completion_state == GameCompletionState::RobberCaught {
        lines.push("The robber was caught! N = new game".to_string());
    }
    lines
}

//! # Scene Management System
//!
//! Drives the game through its scenes: the maze being carved, the chase,
//! and the caught screen.

use crate::{
    publish_events, render_all, status_lines, CarveAnimation, ChaseResult, GameConfig, GameLoop,
    GameState, InputHandler, LoopEvent, MacroquadDisplay, PlayerInput,
};
use log::info;
use macroquad::prelude::*;
use std::time::Duration;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Walls are being carved one at a time
    Carving,
    /// Normal gameplay
    Playing,
    /// The robber has been caught
    Caught,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    config: GameConfig,
    game: GameLoop,
    animation: CarveAnimation,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a scene manager for a freshly generated game.
    pub fn new(config: GameConfig, input_handler: InputHandler, skip_carving: bool) -> ChaseResult<Self> {
        let state = GameState::new(&config)?;
        let animation = CarveAnimation::new(state.dims(), state.traversal.clone(), config.carve_delay());
        let display = MacroquadDisplay::new(state.dims());

        let mut manager = Self {
            current_scene: SceneType::Carving,
            config,
            game: GameLoop::new(state),
            animation,
            display,
            input_handler,
        };
        manager.display.add_message("Carving the maze... ENTER to skip".to_string());
        if skip_carving {
            manager.start_chase();
        }
        Ok(manager)
    }

    /// The scene currently shown.
    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> ChaseResult<()> {
        loop {
            let elapsed = Duration::from_secs_f32(get_frame_time());
            let inputs = self.input_handler.get_inputs();
            if inputs.contains(&PlayerInput::Quit) {
                info!("Player quit the game");
                break;
            }

            match self.current_scene {
                SceneType::Carving => self.update_carving(elapsed, &inputs),
                SceneType::Playing => self.update_playing(elapsed, &inputs),
                SceneType::Caught => self.update_caught(&inputs)?,
            }

            let status = match self.current_scene {
                SceneType::Carving => vec![format!(
                    "Carving {}/{}",
                    self.animation.carved(),
                    self.animation.total()
                )],
                _ => status_lines(self.game.state()),
            };
            self.display.draw(&status);

            next_frame().await;
        }
        Ok(())
    }

    fn update_carving(&mut self, elapsed: Duration, inputs: &[PlayerInput]) {
        if inputs.contains(&PlayerInput::SkipAnimation) {
            self.start_chase();
            return;
        }
        let events = self.animation.update(elapsed);
        self.animation.publish(&events, &mut self.display);
        if self.animation.is_finished() {
            self.start_chase();
        }
    }

    fn start_chase(&mut self) {
        self.animation.finish();
        render_all(self.game.state(), &mut self.display);
        self.current_scene = SceneType::Playing;
        self.display
            .add_message("Robber: WASD, Q/E teleports. Cop: arrows, SPACE/M fire.".to_string());
    }

    fn update_playing(&mut self, elapsed: Duration, inputs: &[PlayerInput]) {
        for input in inputs {
            if let PlayerInput::Command(command) = input {
                self.game.push(LoopEvent::Input(*command));
            }
        }
        self.game.advance_time(elapsed);
        let events = self.game.run_pending();
        publish_events(self.game.state(), &events, &mut self.display);

        if self.game.state().is_over() {
            self.current_scene = SceneType::Caught;
            self.display
                .add_message("The robber was caught! N for a new game, ESC to quit".to_string());
        }
    }

    fn update_caught(&mut self, inputs: &[PlayerInput]) -> ChaseResult<()> {
        if !inputs.contains(&PlayerInput::NewGame) {
            return Ok(());
        }

        self.config.seed = self.config.seed.wrapping_add(1);
        info!("Starting new game with seed: {}", self.config.seed);
        let state = GameState::new(&self.config)?;
        self.animation = CarveAnimation::new(state.dims(), state.traversal.clone(), self.config.carve_delay());
        self.game = GameLoop::new(state);
        self.display.clear_cells();
        self.display.add_message("Carving the maze... ENTER to skip".to_string());
        self.current_scene = SceneType::Carving;
        Ok(())
    }
}

//! # Game Loop
//!
//! Fixed-cadence ticking plus immediate input handling, serialized through
//! one event queue.
//!
//! Two producers feed the queue: a [`TickClock`] that turns elapsed time into
//! whole ticks, and the input handler that turns key presses into
//! [`Command`]s. The loop drains the queue in arrival order, so a test can
//! inject ticks and inputs in any order and get the same result every run.

use crate::game::{GameEvent, GameState};
use crate::input::Command;
use log::trace;
use std::collections::VecDeque;
use std::time::Duration;

/// An entry in the serialized update queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// Advance the projectile and check for a catch
    Tick,
    /// Apply a player command right away
    Input(Command),
}

/// Converts elapsed wall-clock time into a count of fixed-length ticks.
///
/// # Examples
///
/// ```
/// use mazechase::TickClock;
/// use std::time::Duration;
///
/// let mut clock = TickClock::new(Duration::from_millis(250));
/// assert_eq!(clock.advance(Duration::from_millis(200)), 0);
/// assert_eq!(clock.advance(Duration::from_millis(350)), 2);
/// assert_eq!(clock.advance(Duration::from_millis(10)), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// Creates a clock ticking every `interval`. The interval must be non-zero.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` time and returns how many ticks became due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }
}

/// Owns a [`GameState`] and feeds it ticks and inputs in order.
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    clock: TickClock,
    queue: VecDeque<LoopEvent>,
}

impl GameLoop {
    /// Wraps `state`, ticking at its configured interval.
    pub fn new(state: GameState) -> Self {
        let clock = TickClock::new(state.config.tick_interval());
        Self {
            state,
            clock,
            queue: VecDeque::new(),
        }
    }

    /// The simulation state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The simulation state mutably.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consumes the loop and returns its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Queues an event behind everything already pending.
    pub fn push(&mut self, event: LoopEvent) {
        self.queue.push_back(event);
    }

    /// Queues a player command.
    pub fn push_input(&mut self, command: Command) {
        self.push(LoopEvent::Input(command));
    }

    /// Number of events waiting to be processed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Lets `elapsed` time pass, queueing any ticks that fall due.
    pub fn advance_time(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            self.push(LoopEvent::Tick);
        }
        due
    }

    /// Processes every queued event in order and returns the state changes
    /// they produced.
    pub fn run_pending(&mut self) -> Vec<GameEvent> {
        while let Some(event) = self.queue.pop_front() {
            self.handle(event);
        }
        self.state.drain_events()
    }

    fn handle(&mut self, event: LoopEvent) {
        trace!("handling {:?}", event);
        match event {
            LoopEvent::Tick => self.state.tick(),
            LoopEvent::Input(command) => {
                self.state.apply_command(command);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Agent, Direction, GridDims, Role};
    use crate::generation::{GameConfig, MazeGraph};
    use crate::input::Action;

    fn corridor_loop() -> GameLoop {
        let mut config = GameConfig::for_testing(1);
        config.rows = 1;
        config.cols = 6;
        let edges: Vec<_> = (0..5).map(|v| (v, v + 1)).collect();
        let maze = MazeGraph::from_traversal(GridDims::new(1, 6), &edges);
        GameLoop::new(GameState::with_agents(
            config,
            maze,
            Agent::new(Role::Robber, 0),
            Agent::new(Role::Cop, 5),
        ))
    }

    #[test]
    fn test_clock_carries_remainder() {
        let mut clock = TickClock::new(Duration::from_millis(100));
        assert_eq!(clock.advance(Duration::from_millis(150)), 1);
        assert_eq!(clock.advance(Duration::from_millis(50)), 1);
        assert_eq!(clock.advance(Duration::from_millis(1000)), 10);
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut clock = TickClock::new(Duration::ZERO);
        assert_eq!(clock.advance(Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_advance_time_queues_ticks() {
        let mut game = corridor_loop();
        assert_eq!(game.advance_time(Duration::from_millis(600)), 2);
        assert_eq!(game.pending(), 2);
        game.run_pending();
        assert_eq!(game.state().tick_count, 2);
        assert_eq!(game.pending(), 0);
    }

    #[test]
    fn test_inputs_apply_without_ticks() {
        let mut game = corridor_loop();
        game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
        game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
        let events = game.run_pending();
        assert_eq!(events.len(), 2);
        assert_eq!(game.state().robber.position, Some(2));
        assert_eq!(game.state().tick_count, 0);
    }

    #[test]
    fn test_events_processed_in_arrival_order() {
        let mut game = corridor_loop();
        game.push_input(Command::new(Role::Cop, Action::Move(Direction::Left)));
        game.push_input(Command::new(Role::Cop, Action::Shoot));
        game.push(LoopEvent::Tick);
        // Robber steps into the bullet's path after the first tick
        game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
        game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
        game.push(LoopEvent::Tick);
        game.push(LoopEvent::Tick);

        game.run_pending();
        // Cop at 4 fires left: bullet 3, then 2, and the robber walked to 2
        assert_eq!(game.state().robber.position, None);
        assert!(game.state().is_over());
    }
}

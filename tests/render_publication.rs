//! Integration tests for the render-sink boundary.

use mazechase::{
    publish_events, render_all, Action, Agent, CarveAnimation, ChaseResult, Command, Direction,
    GameConfig, GameLoop, GameState, GridDims, LoopEvent, Marker, MazeGraph, Occupant,
    RecordingSink, Role,
};
use std::time::Duration;

fn corridor_game() -> GameLoop {
    let mut config = GameConfig::for_testing(1);
    config.rows = 1;
    config.cols = 5;
    let maze = MazeGraph::from_traversal(GridDims::new(1, 5), &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    GameLoop::new(GameState::with_agents(
        config,
        maze,
        Agent::new(Role::Robber, 0),
        Agent::new(Role::Cop, 4),
    ))
}

#[test]
fn test_move_redraws_both_cells() {
    let mut game = corridor_game();
    game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
    let events = game.run_pending();

    let mut sink = RecordingSink::new();
    publish_events(game.state(), &events, &mut sink);

    assert_eq!(sink.calls.len(), 2);
    assert_eq!(sink.last_view(0).map(|v| v.occupant), Some(Occupant::None));
    assert_eq!(sink.last_view(1).map(|v| v.occupant), Some(Occupant::Robber));
    assert_eq!(sink.last_view(0).and_then(|v| v.marker), Some(Marker::Start));
}

#[test]
fn test_bullet_and_elimination_are_rendered() {
    let mut game = corridor_game();
    game.push_input(Command::new(Role::Cop, Action::Move(Direction::Left)));
    game.push_input(Command::new(Role::Cop, Action::Shoot));
    let mut sink = RecordingSink::new();
    let events = game.run_pending();
    publish_events(game.state(), &events, &mut sink);
    // The cop hides the bullet on the shooter's own cell
    assert_eq!(sink.last_view(3).map(|v| v.occupant), Some(Occupant::Cop));

    game.push(LoopEvent::Tick);
    let events = game.run_pending();
    publish_events(game.state(), &events, &mut sink);
    assert_eq!(sink.last_view(2).map(|v| v.occupant), Some(Occupant::Bullet));

    game.push_input(Command::new(Role::Robber, Action::Move(Direction::Right)));
    game.push(LoopEvent::Tick);
    let events = game.run_pending();
    publish_events(game.state(), &events, &mut sink);
    // Robber walked to 1 and the bullet arrived there on the next tick
    assert!(game.state().is_over());
    assert_eq!(sink.last_view(1).map(|v| v.occupant), Some(Occupant::Bullet));
}

#[test]
fn test_carve_animation_ends_matching_maze() -> ChaseResult<()> {
    let state = GameState::new(&GameConfig::for_testing(21))?;
    let mut animation = CarveAnimation::new(
        state.dims(),
        state.traversal.clone(),
        Duration::from_millis(50),
    );

    let mut sink = RecordingSink::new();
    while !animation.is_finished() {
        let events = animation.update(Duration::from_millis(120));
        animation.publish(&events, &mut sink);
    }
    assert_eq!(animation.partial_maze(), &state.maze);

    // Every cell of a spanning tree is touched by at least one carved wall
    for vertex in 0..state.dims().vertex_count() {
        assert!(sink.last_view(vertex).is_some());
    }

    let mut full = RecordingSink::new();
    render_all(&state, &mut full);
    for vertex in 0..state.dims().vertex_count() {
        assert_eq!(
            full.last_view(vertex).map(|v| v.walls),
            sink.last_view(vertex).map(|v| v.walls)
        );
    }
    Ok(())
}

//! Performance tests for maze generation and ticking.

use mazechase::{ChaseResult, GameConfig, GameLoop, GameState, LoopEvent};
use std::time::Instant;

#[test]
fn test_large_maze_generation_performance() -> ChaseResult<()> {
    let mut config = GameConfig::new(777);
    config.rows = 200;
    config.cols = 200;

    let start = Instant::now();
    let state = GameState::new(&config)?;
    let elapsed = start.elapsed();

    println!("Generated 200x200 maze in {:?}", elapsed);
    assert_eq!(state.maze.connection_count(), 200 * 200 - 1);
    assert!(
        elapsed.as_secs() < 10,
        "Maze generation too slow: {:?}",
        elapsed
    );
    Ok(())
}

#[test]
fn test_tick_throughput() -> ChaseResult<()> {
    let mut game = GameLoop::new(GameState::new(&GameConfig::new(1))?);

    let start = Instant::now();
    let iterations = 10_000;
    for _ in 0..iterations {
        game.push(LoopEvent::Tick);
    }
    game.run_pending();
    let elapsed = start.elapsed();

    println!("Average tick time: {:?}", elapsed / iterations);
    assert_eq!(game.state().tick_count, iterations as u64);
    assert!(elapsed.as_secs() < 5, "Ticking too slow: {:?}", elapsed);
    Ok(())
}

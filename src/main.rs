//! # Mazechase Main Entry Point
//!
//! Parses the command line, sets up logging, and runs the scene loop.

use clap::Parser;
use mazechase::{
    ChaseResult, GameConfig, Generator, InputHandler, MazeGenerator, SceneManager,
};
#[cfg(feature = "dev-tools")]
use tracing::{error, info};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Command line arguments for Mazechase.
#[derive(Parser, Debug)]
#[command(name = "mazechase")]
#[command(about = "A cop-and-robber pursuit game on a procedurally carved maze")]
#[command(version)]
struct Args {
    /// Random seed for maze generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of maze rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of maze columns
    #[arg(long)]
    cols: Option<usize>,

    /// JSON configuration file; command line values take precedence
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Print the generated maze as JSON and exit
    #[arg(long)]
    dump_maze: bool,

    /// Start the chase without the carving animation
    #[arg(long)]
    skip_carving: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Mazechase")]
async fn main() -> ChaseResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Mazechase v{}", mazechase::VERSION);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Could not load configuration: {}", e);
            return Err(e);
        }
    };

    if args.dump_maze {
        return dump_maze(&config);
    }

    info!(
        "Generating {}x{} maze with seed: {}",
        config.rows, config.cols, config.seed
    );
    let mut scenes = SceneManager::new(config, InputHandler::new(), args.skip_carving)?;
    scenes.run().await?;

    info!("Game loop ended");
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

/// Merges the config file (if any) with command line overrides.
fn build_config(args: &Args) -> ChaseResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    config.validate()?;
    Ok(config)
}

/// Generates the configured maze and prints it to stdout as JSON.
fn dump_maze(config: &GameConfig) -> ChaseResult<()> {
    let mut rng = mazechase::generation::utils::create_rng(config);
    let generation = MazeGenerator::new().generate(config, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&generation)?);
    Ok(())
}

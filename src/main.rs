//! Goban: a Go rules engine.
//!
//! ## Usage
//!
//! - `goban` - Play a random demo game
//! - `goban gtp` - Start GTP server for GUI integration
//! - `goban demo` - Play a random demo game
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goban::board::BoardSize;
use goban::constants::DEFAULT_SIZE;
use goban::game::GameState;
use goban::gtp::GtpEngine;
use goban::playout::random_playout;

/// Goban: a Go rules engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp(GameArgs),
    /// Play a random game and print the final position
    Demo(GameArgs),
}

#[derive(Args)]
struct GameArgs {
    /// Board size (9, 13 or 19)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Seed for random move generation
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
        }
    }
}

impl GameArgs {
    fn board_size(&self) -> Result<BoardSize> {
        BoardSize::try_from(self.size).context("invalid --size")
    }

    fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp(args)) => {
            let mut engine = GtpEngine::with_config(args.board_size()?, args.seed);
            engine
                .run(io::stdin().lock(), io::stdout())
                .context("GTP session failed")?;
        }
        Some(Commands::Demo(args)) => run_demo(&args)?,
        None => run_demo(&GameArgs::default())?,
    }
    Ok(())
}

fn run_demo(args: &GameArgs) -> Result<()> {
    let size = args.board_size()?;
    println!("Goban: random game on {0}x{0}\n", size.len());

    let mut game = GameState::new(size);
    let score = random_playout(&mut game, &mut args.rng());

    println!("{game}");
    println!("Stones placed: {}", game.moves_played());
    println!("Score: {score}");
    match score.winner() {
        Some(color) => println!("Winner: {color} ({})", score.result_string()),
        None => println!("Draw"),
    }
    Ok(())
}

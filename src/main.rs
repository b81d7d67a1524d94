//! EpsilonGo: a stateless Go move-suggestion engine.
//!
//! ## Usage
//!
//! - `epsilon-go` - Show a demo
//! - `epsilon-go serve` - Answer JSON requests, one per line, on stdin/stdout
//! - `epsilon-go suggest [--input FILE]` - Answer a single JSON request
//! - `epsilon-go demo` - Run the demo
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use epsilon_go::board::{Board, Color};
use epsilon_go::constants::MAX_BOARD_SIZE;
use epsilon_go::evaluate::Prisoners;
use epsilon_go::protocol::{EngineConfig, JsonEngine};
use epsilon_go::rules::play_move;
use epsilon_go::selector::{Verdict, suggest_move_with_rng};

/// EpsilonGo: a random-move Go engine with a crude win-rate estimate
#[derive(Parser)]
#[command(name = "epsilon-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the move shuffle (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Largest board size to accept
    #[arg(long, global = true, default_value_t = MAX_BOARD_SIZE)]
    max_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer JSON requests line by line on stdin/stdout
    Serve,
    /// Answer a single JSON request
    Suggest {
        /// Request file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig {
        max_board_size: cli.max_size,
        seed: cli.seed,
    };

    match cli.command {
        Some(Commands::Serve) => {
            log::info!("serving JSON requests on stdin");
            let mut engine = JsonEngine::with_config(config);
            engine
                .run(io::stdin().lock(), io::stdout().lock())
                .context("request loop failed")?;
        }
        Some(Commands::Suggest { input, pretty }) => {
            let text = match input {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read request from stdin")?;
                    buf
                }
            };
            let mut engine = JsonEngine::with_config(config);
            let response = engine.handle_json(&text).context("request rejected")?;
            let out = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{out}");
        }
        Some(Commands::Demo) | None => run_demo(config.seed),
    }
    Ok(())
}

fn run_demo(seed: Option<u64>) {
    println!("EpsilonGo: random legal moves with a rough win rate\n");

    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut board = Board::new(9);
    let mut prisoners = Prisoners::default();
    let mut player = Color::Black;

    for _ in 0..12 {
        let s = suggest_move_with_rng(&board, player, &prisoners, &mut rng);
        println!(
            "{player}: {:?} (win rate {:.1}%, lead {})",
            s.verdict,
            s.win_rate * 100.0,
            s.lead
        );
        if let Verdict::Play(pt) = s.verdict {
            if let Ok(captured) = play_move(&mut board, pt, player) {
                prisoners.add(player, captured);
            }
        }
        player = player.opponent();
    }
    println!("\n{board}");
}

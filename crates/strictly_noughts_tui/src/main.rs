//! Strictly Noughts - terminal front-end
//!
//! Plays noughts and crosses in the terminal, or prints the move a computer
//! opponent would make on a given board.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod hint;
mod input;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_noughts::{Board, Difficulty};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
            delay_ms,
        } => {
            let mut settings = settings;
            if let Some(mode) = mode {
                settings = settings.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                settings = settings.with_difficulty(difficulty);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            if let Some(delay_ms) = delay_ms {
                settings = settings.with_thinking_delay_ms(delay_ms);
            }
            run_play(&settings).await
        }
        Command::Hint {
            board,
            difficulty,
            player,
            seed,
            json,
        } => run_hint(&settings, &board, &difficulty, &player, seed, json),
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Play in the terminal, logging to a file so the board stays clean.
async fn run_play(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(settings).await
}

/// Print the move the chosen policy would make.
#[instrument(skip(settings))]
fn run_hint(
    settings: &Settings,
    board: &str,
    difficulty: &str,
    player: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();

    let board: Board = board.parse().context("Invalid --board")?;
    let difficulty: Difficulty = difficulty.parse().context("Invalid --difficulty")?;
    let player = hint::parse_player(player).context("Invalid --player")?;

    let mut rng = match seed.or(*settings.seed()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let hint = hint::compute_hint(&board, player, difficulty, &mut rng)?;
    info!(cell = hint.cell(), "Hint ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&hint)?);
    } else {
        println!("{}\n\n{}", board, hint);
    }
    Ok(())
}

//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Noughts - noughts and crosses against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Noughts and crosses against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Opponent: human or computer
        #[arg(short, long)]
        mode: Option<String>,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,

        /// Computer thinking delay in milliseconds (0 replies instantly)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show the cell a computer opponent would play on a given board
    Hint {
        /// Board as nine cells of X, O and . (row-major), e.g. "X...O...."
        #[arg(short, long)]
        board: String,

        /// Computer strength: easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Side to move: x or o
        #[arg(short, long, default_value = "o")]
        player: String,

        /// Seed for the easy and medium policies
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

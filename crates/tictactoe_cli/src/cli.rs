//! Command-line interface for the tic-tac-toe terminal game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, GameMode};

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode: two-player or computer (overrides the config file)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        computer_delay_ms: Option<u64>,
    },

    /// Print the computer's move for a board, O to move
    Suggest {
        /// Nine squares in row-major order, e.g. "OO.XX...."
        board: Board,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Pause between moves, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
}

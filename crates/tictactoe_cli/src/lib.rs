//! Terminal front end for tic-tac-toe.
//!
//! - **Config**: TOML game settings with CLI overrides
//! - **Input**: stdin lines shared by human players and the post-game menu
//! - **Players**: human (stdin) and minimax players behind one trait
//! - **Orchestrator**: drives a [`GameSession`](tictactoe_core::GameSession)
//!   and reports [`GameEvent`]s to the renderer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod orchestrator;
pub mod players;
mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use input::{MenuCommand, SharedInput, read_command, shared_input, spawn_stdin_reader};
pub use orchestrator::{GameEvent, Orchestrator};
pub use render::render_events;

//! Terminal line input shared by players and the post-game menu.

use crate::orchestrator::GameEvent;
use anyhow::Result;
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// Input lines shared by every consumer of the terminal.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Wraps a line receiver so several consumers can take turns reading it.
pub fn shared_input(rx: mpsc::UnboundedReceiver<String>) -> SharedInput {
    Arc::new(Mutex::new(rx))
}

/// Forwards stdin lines into a channel from a dedicated thread.
///
/// A blocking read cannot be cancelled, so it lives outside the runtime.
pub fn spawn_stdin_reader() -> SharedInput {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    shared_input(rx)
}

/// Choice offered once a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start a new game in the same mode.
    Restart,
    /// Switch mode and start a new game.
    ToggleMode,
    /// Leave the program.
    Quit,
}

impl MenuCommand {
    /// Parses `r`, `m` or `q`, ignoring case and surrounding whitespace.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" => Some(Self::Restart),
            "m" => Some(Self::ToggleMode),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Waits for a post-game command.
///
/// Unknown lines are reported as [`GameEvent::Rejected`] and skipped.
/// Returns `None` once input closes.
pub async fn read_command(
    input: &SharedInput,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
) -> Result<Option<MenuCommand>> {
    let mut input = input.lock().await;
    while let Some(line) = input.recv().await {
        if let Some(command) = MenuCommand::parse(&line) {
            debug!(?command, "Menu command");
            return Ok(Some(command));
        }
        event_tx.send(GameEvent::Rejected(format!(
            "'{}' is not a command, enter r, m or q",
            line.trim()
        )))?;
    }
    Ok(None)
}

//! Human player reading squares from standard input.

use super::Player;
use crate::input::SharedInput;
use crate::orchestrator::GameEvent;
use anyhow::Result;
use tictactoe_core::{GameSession, Position};
use tokio::sync::mpsc;
use tracing::debug;

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input: SharedInput,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _session: &GameSession) -> Result<Option<Position>> {
        let mut input = self.input.lock().await;
        while let Some(line) = input.recv().await {
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                debug!(player = %self.name, "Player quit");
                return Ok(None);
            }
            if let Some(pos) = Position::from_label_or_number(line) {
                return Ok(Some(pos));
            }
            self.event_tx.send(GameEvent::Rejected(format!(
                "'{}' is not a square, enter 1-9 or q to quit",
                line
            )))?;
        }

        debug!(player = %self.name, "Input closed");
        Ok(None)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

//! Computer player backed by the minimax search.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use tictactoe_core::{GameSession, Position, best_move_for};
use tracing::debug;

/// Plays whichever side is to move with a full-depth search.
#[derive(Debug, derive_new::new)]
pub struct MinimaxPlayer {
    #[new(into)]
    name: String,
    delay: Duration,
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, session: &GameSession) -> Result<Option<Position>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = best_move_for(session.board(), session.current_player());
        debug!(player = %self.name, ?position, "Engine chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

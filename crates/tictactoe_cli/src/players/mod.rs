//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use tictactoe_core::{GameSession, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns `None` when the player leaves the game.
    async fn get_move(&mut self, session: &GameSession) -> Result<Option<Position>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

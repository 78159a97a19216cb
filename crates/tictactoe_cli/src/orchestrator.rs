//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_core::{Board, GameSession, GameStatus, Move, Player as Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board or status changed.
    StateChanged {
        /// The current board.
        board: Board,
        /// Status line for the current board.
        status: String,
    },
    /// The computer is about to reply.
    ComputerThinking,
    /// A move was applied.
    MoveMade(Move),
    /// Input or a move was refused.
    Rejected(String),
    /// Game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Status line for display.
        text: String,
    },
    /// Free-form prompt for the user.
    Prompt(String),
}

/// Drives one session between two players.
///
/// In [`GameMode::VersusComputer`](tictactoe_core::GameMode::VersusComputer)
/// the session plays O itself and `player_o` is only asked for moves after
/// the mode is toggled back to two players.
pub struct Orchestrator {
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    computer_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        computer_delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            computer_delay,
            event_tx,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the session for reset and mode changes between games.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Event receiver dropped")?;
        Ok(())
    }

    fn emit_state(&self) -> Result<()> {
        self.emit(GameEvent::StateChanged {
            board: *self.session.board(),
            status: self.session.status_text(),
        })
    }

    /// Plays until the game ends or a player leaves.
    ///
    /// Returns the final status, or `None` if a player quit.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub async fn play_game(&mut self) -> Result<Option<GameStatus>> {
        info!("Starting game");
        self.emit_state()?;

        loop {
            let status = self.session.status();
            if status.is_over() {
                info!(?status, "Game over");
                self.emit(GameEvent::GameOver {
                    status,
                    text: self.session.status_text(),
                })?;
                return Ok(Some(status));
            }

            let mov = if self.session.is_computer_turn() {
                self.emit(GameEvent::ComputerThinking)?;
                tokio::time::sleep(self.computer_delay).await;
                self.session
                    .computer_move()?
                    .context("Computer had no move on an open board")?
            } else {
                let mark = self.session.current_player();
                let player = match mark {
                    Mark::X => &mut self.player_x,
                    Mark::O => &mut self.player_o,
                };

                debug!(player = %player.name(), "Waiting for move");
                let Some(position) = player.get_move(&self.session).await? else {
                    info!(player = %player.name(), "Player left the game");
                    return Ok(None);
                };

                match self.session.play(position) {
                    Ok(_) => Move::new(mark, position),
                    Err(e) => {
                        warn!(error = %e, ?position, "Move rejected");
                        self.emit(GameEvent::Rejected(e.to_string()))?;
                        continue;
                    }
                }
            };

            self.emit(GameEvent::MoveMade(mov))?;
            self.emit_state()?;
        }
    }
}

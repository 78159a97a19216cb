//! Live game session: board, turn order, status and game mode.

use crate::action::{Move, MoveError};
use crate::rules::{check_winner, is_draw};
use crate::search::best_move;
use crate::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The side the computer plays in [`GameMode::VersusComputer`].
pub const COMPUTER: Player = Player::O;

/// Who controls O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays X against the computer as O.
    #[serde(alias = "computer")]
    #[strum(to_string = "versus-computer", serialize = "computer")]
    VersusComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VersusComputer,
            GameMode::VersusComputer => GameMode::TwoPlayer,
        }
    }
}

/// A single game in progress, plus the mode it is played in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    mode: GameMode,
}

impl GameSession {
    /// Starts a fresh game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True when the computer owns the next move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VersusComputer
            && self.status == GameStatus::InProgress
            && self.current_player == COMPUTER
    }

    /// Places the current player's mark at `position` on behalf of a human.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::AwaitingComputer`] while the computer is to move.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(MoveError::AwaitingComputer);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        Ok(self.apply(position))
    }

    /// Lets the computer reply if it is its turn.
    ///
    /// Returns the move played, or `None` when the computer is not to move.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Option<Move>, MoveError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }

        let position = best_move(&self.board).ok_or(MoveError::GameOver)?;
        let mov = Move::new(self.current_player, position);
        self.apply(position);
        info!(%mov, "Computer moved");
        Ok(Some(mov))
    }

    fn apply(&mut self, position: Position) -> GameStatus {
        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        debug!(?player, ?position, status = ?self.status, "Move applied");
        self.status
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Switches to `mode` and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    /// Flips the mode and starts a new game.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player),
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_with_x() {
        let session = GameSession::new(GameMode::TwoPlayer);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.status_text(), "X's turn");
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_players_alternate() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.play(Position::Center).unwrap();
        assert_eq!(session.current_player(), Player::O);
        session.play(Position::TopLeft).unwrap();
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(
            session.board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_mode_parses_from_text() {
        assert_eq!("two-player".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert_eq!(
            "computer".parse::<GameMode>().unwrap(),
            GameMode::VersusComputer
        );
        assert_eq!(
            "versus-computer".parse::<GameMode>().unwrap(),
            GameMode::VersusComputer
        );
        assert_eq!(GameMode::VersusComputer.to_string(), "versus-computer");
        assert!("solo".parse::<GameMode>().is_err());
    }
}

//! Tests for the game session.

use tictactoe_core::{
    Board, GameMode, GameSession, GameStatus, Move, MoveError, Player, Position, Square,
    check_winner, is_draw, is_full,
};

fn play_all(session: &mut GameSession, moves: &[Position]) -> GameStatus {
    let mut status = session.status();
    for &pos in moves {
        status = session.play(pos).expect("legal move");
    }
    status
}

#[test]
fn test_win_detection() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    let status = play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight, // X wins top row
        ],
    );

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(session.status_text(), "X wins!");
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_draw_detection() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    let status = play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight, // Draw
        ],
    );

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(session.status_text(), "It's a draw!");
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    let status = play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomRight,
            Position::BottomLeft, // X fills the left column and the board
        ],
    );

    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(is_full(session.board()));
    assert!(!is_draw(session.board()));
    assert_eq!(check_winner(session.board()), Some(Player::X));
}

#[test]
fn test_occupied_square_rejected() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    session.play(Position::Center).unwrap();

    let result = session.play(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(session.current_player(), Player::O);
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    play_all(
        &mut session,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ],
    );

    let before = *session.board();
    assert_eq!(session.play(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_human_cannot_move_for_computer() {
    let mut session = GameSession::new(GameMode::VersusComputer);
    session.play(Position::Center).unwrap();

    assert!(session.is_computer_turn());
    assert_eq!(
        session.play(Position::TopLeft),
        Err(MoveError::AwaitingComputer)
    );
}

#[test]
fn test_computer_replies_as_o() {
    let mut session = GameSession::new(GameMode::VersusComputer);
    session.play(Position::Center).unwrap();

    let reply = session.computer_move().unwrap().expect("computer moves");
    assert_eq!(reply.player, Player::O);
    assert_eq!(
        session.board().get(reply.position),
        Square::Occupied(Player::O)
    );
    assert_eq!(session.current_player(), Player::X);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_computer_waits_for_its_turn() {
    let mut session = GameSession::new(GameMode::VersusComputer);
    assert_eq!(session.computer_move(), Ok(None));

    let mut two_player = GameSession::new(GameMode::TwoPlayer);
    two_player.play(Position::Center).unwrap();
    assert_eq!(two_player.computer_move(), Ok(None));
}

#[test]
fn test_computer_beats_careless_x() {
    let mut session = GameSession::new(GameMode::VersusComputer);

    // X always takes the lowest free square, which lets O win.
    while !session.status().is_over() {
        let pos = Position::ALL
            .into_iter()
            .find(|&p| session.board().is_empty(p))
            .unwrap();
        session.play(pos).unwrap();
        session.computer_move().unwrap();
    }

    assert_eq!(session.status(), GameStatus::Won(Player::O));
    assert_eq!(session.status_text(), "O wins!");
}

#[test]
fn test_reset_keeps_mode() {
    let mut session = GameSession::new(GameMode::VersusComputer);
    session.play(Position::Center).unwrap();
    session.computer_move().unwrap();

    session.reset();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.mode(), GameMode::VersusComputer);
}

#[test]
fn test_toggle_mode_resets_board() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    session.play(Position::Center).unwrap();

    session.toggle_mode();
    assert_eq!(session.mode(), GameMode::VersusComputer);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.status_text(), "X's turn");

    session.set_mode(GameMode::TwoPlayer);
    assert_eq!(session.mode(), GameMode::TwoPlayer);
}

#[test]
fn test_session_serializes() {
    let mut session = GameSession::new(GameMode::VersusComputer);
    session.play(Position::Center).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    assert!(json.contains("\"versus-computer\""));
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_move_display() {
    let mov = Move::new(Player::O, Position::TopRight);
    assert_eq!(mov.to_string(), "O -> Top-right");
}

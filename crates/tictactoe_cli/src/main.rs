//! Tic-tac-toe terminal game
//!
//! Human vs human, human vs computer, or computer vs computer.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tictactoe_cli::players::{HumanPlayer, MinimaxPlayer};
use tictactoe_cli::{
    Cli, Command, GameConfig, GameEvent, MenuCommand, Orchestrator, read_command, render_events,
    spawn_stdin_reader,
};
use tictactoe_core::{Board, GameMode, GameSession, Player, Searcher};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            computer_delay_ms,
        } => run_play(&cli.config, mode, computer_delay_ms).await,
        Command::Suggest { board } => run_suggest(board),
        Command::SelfPlay { delay_ms } => run_self_play(Duration::from_millis(delay_ms)).await,
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run an interactive game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    computer_delay_ms: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)
        .context("Failed to load game config")?
        .with_overrides(mode, computer_delay_ms);
    info!(mode = %config.mode(), delay_ms = config.computer_delay_ms(), "Starting play");

    let input = spawn_stdin_reader();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx));

    let mut orchestrator = Orchestrator::new(
        GameSession::new(*config.mode()),
        Box::new(HumanPlayer::new("Player X", input.clone(), event_tx.clone())),
        Box::new(HumanPlayer::new("Player O", input.clone(), event_tx.clone())),
        config.computer_delay(),
        event_tx.clone(),
    );

    event_tx.send(GameEvent::Prompt(
        "Enter a square number (1-9) to move, q to quit.".to_string(),
    ))?;

    while orchestrator.play_game().await?.is_some() {
        event_tx.send(GameEvent::Prompt(format!(
            "r: restart, m: switch to {}, q: quit",
            orchestrator.session().mode().toggled()
        )))?;

        match read_command(&input, &event_tx).await? {
            Some(MenuCommand::Restart) => orchestrator.session_mut().reset(),
            Some(MenuCommand::ToggleMode) => orchestrator.session_mut().toggle_mode(),
            Some(MenuCommand::Quit) | None => break,
        }
    }

    drop(orchestrator);
    drop(event_tx);
    renderer.await.context("Renderer task failed")?;
    Ok(())
}

/// Print the computer's reply for a board
#[instrument(skip_all, fields(board = %board))]
fn run_suggest(board: Board) -> Result<()> {
    let mut searcher = Searcher::new();
    let result = searcher.analyze(&board, Player::O);

    println!("{}\n", board.display());
    match result.position {
        Some(position) => println!(
            "Best move for O: {} ({}), score {}, {} nodes searched",
            position.to_index() + 1,
            position,
            result.score,
            searcher.nodes()
        ),
        None => println!("No move: the game is already over"),
    }
    Ok(())
}

/// Let the engine play itself
#[instrument]
async fn run_self_play(delay: Duration) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx));

    let mut orchestrator = Orchestrator::new(
        GameSession::new(GameMode::TwoPlayer),
        Box::new(MinimaxPlayer::new("Engine X", delay)),
        Box::new(MinimaxPlayer::new("Engine O", delay)),
        delay,
        event_tx,
    );

    let status = orchestrator.play_game().await?;
    info!(?status, "Self-play finished");

    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;
    Ok(())
}

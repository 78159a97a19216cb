//! Prints orchestrator events to the terminal.

use crate::orchestrator::GameEvent;
use tokio::sync::mpsc;

/// Prints events until every sender is dropped.
pub async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::StateChanged { board, status } => {
                println!("\n{}\n\n{}", board.display(), status);
            }
            GameEvent::ComputerThinking => println!("Computer is thinking..."),
            GameEvent::MoveMade(mov) => println!("{}", mov),
            GameEvent::Rejected(reason) => println!("{}", reason),
            GameEvent::GameOver { text, .. } => println!("{}", text),
            GameEvent::Prompt(text) => println!("{}", text),
        }
    }
}

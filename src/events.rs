//! Messages from the game tasks to the console printer.

use noughts_board::{Board, GameOutcome, Player};
use tokio::sync::mpsc;
use tracing::debug;

/// Something the console should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is being asked for a move.
    Prompt {
        /// Player whose turn it is.
        player: Player,
    },
    /// A console line was refused before reaching the board.
    InputRejected {
        /// Player who typed the line.
        player: Player,
        /// One-line diagnostic.
        reason: String,
    },
    /// The board refused a move.
    MoveRejected {
        /// Player who made the move; asked again next.
        player: Player,
        /// One-line diagnostic.
        reason: String,
    },
    /// A move was applied; carries the board after it.
    BoardChanged(Board),
    /// Someone won. Sent once.
    GameOver(GameOutcome),
}

/// Sending half of the event channel.
pub type EventSender = mpsc::UnboundedSender<GameEvent>;

/// Receiving half of the event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<GameEvent>;

/// Sends an event, tolerating a printer that has already gone away.
pub(crate) fn emit(events: &EventSender, event: GameEvent) {
    if let Err(err) = events.send(event) {
        debug!(event = ?err.0, "Printer gone, event dropped");
    }
}

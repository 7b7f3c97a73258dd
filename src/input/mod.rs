//! Input collection: turning console lines into moves.

mod collector;
mod console;
mod parse;

pub use collector::InputCollector;
pub use console::ConsoleSource;
pub use parse::parse_move;

use crate::InputError;
use noughts_board::{Move, Player};

/// Anything that can produce moves on request.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Gets one well-formed move for `player`.
    ///
    /// Retries locally until it has one; only [`InputError::Closed`] (or
    /// another non-retryable failure) ends the wait.
    async fn next_move(&mut self, player: Player) -> Result<Move, InputError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

//! Two-player console tic-tac-toe.
//!
//! Two tasks share the work:
//!
//! - **Input collector**: asks a [`MoveSource`] for a move whenever the
//!   coordinator requests one, retrying bad input locally.
//! - **Turn coordinator**: owns the [`Board`], applies each move, and either
//!   announces the winner or requests the next move.
//!
//! They talk over two single-slot channels (player requests one way, moves
//! the other) and report to a console printer through [`GameEvent`]s.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{ConsoleSource, Game};
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let game = Game::new();
//! let source = ConsoleSource::new("console", BufReader::new(tokio::io::stdin()), game.events());
//! let (outcome, _stdout) = game.play(source, tokio::io::stdout()).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coordinator;
mod error;
mod events;
mod game;
mod input;
mod printer;

// Crate-level exports - orchestration
pub use coordinator::{TurnCoordinator, TurnState};
pub use game::Game;

// Crate-level exports - input
pub use input::{parse_move, ConsoleSource, InputCollector, MoveSource};

// Crate-level exports - output
pub use events::{EventReceiver, EventSender, GameEvent};
pub use printer::ConsolePrinter;

// Crate-level exports - errors
pub use error::{GameError, InputError, ParseError};

// Crate-level exports - board state machine
pub use noughts_board::{Board, GameOutcome, Line, Move, MoveError, Player};

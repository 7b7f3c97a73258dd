//! Board state machine for two-player console tic-tac-toe.
//!
//! Pure logic only: move validation, cell placement and win detection on a
//! 3x3 grid. Nothing in here blocks, prints or owns a board across calls;
//! the caller holds the single authoritative [`Board`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod outcome;
mod rules;
mod types;

pub use board::{Board, SIZE};
pub use error::MoveError;
pub use outcome::GameOutcome;
pub use rules::Line;
pub use types::{Move, Player};

//! Error types for input collection and game orchestration.

use noughts_board::MoveError;
use std::num::ParseIntError;

/// A console line that is not of the form `<row>,<col>`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// Not exactly two comma-separated fields.
    #[display("Error parsing move {line:?}: expected <row>,<col>")]
    WrongFieldCount {
        /// The offending line, newline stripped.
        line: String,
    },

    /// A field that is not an integer. The whole line is rejected.
    #[display("Error parsing move: {field:?} is not an integer")]
    InvalidField {
        /// The offending field.
        field: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },
}

/// Failure while obtaining a move from a [`MoveSource`](crate::MoveSource).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The line could not be parsed.
    #[display("{_0}")]
    Parse(ParseError),

    /// The line parsed but does not describe a well-formed move.
    #[display("{_0}")]
    InvalidMove(MoveError),

    /// Reading the line failed.
    #[display("Error reading move: {_0}")]
    Io(std::io::Error),

    /// Input ended; no further moves will arrive.
    #[display("Input closed")]
    Closed,
}

impl InputError {
    /// True for failures the collector answers by asking again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, InputError::Closed)
    }
}

impl From<ParseError> for InputError {
    fn from(err: ParseError) -> Self {
        InputError::Parse(err)
    }
}

impl From<MoveError> for InputError {
    fn from(err: MoveError) -> Self {
        InputError::InvalidMove(err)
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Reason a game stopped without producing an outcome.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The move channel closed before anyone won.
    #[display("Input closed before the game ended")]
    InputClosed,

    /// Writing the console transcript failed.
    #[display("Error writing game output: {_0}")]
    Output(std::io::Error),

    /// A game task panicked or was cancelled.
    #[display("Game task failed: {_0}")]
    TaskFailed(tokio::task::JoinError),
}

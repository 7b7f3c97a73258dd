//! Errors raised while applying a move to the board.

use crate::{Move, Player};

/// Reason a move was refused. The board is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates out of range, or no player attached.
    #[display("Please provide a valid move (got {_0})")]
    InvalidMove(Move),

    /// The target cell already holds a mark.
    #[display("Field {row},{column} already occupied by {occupant}")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        column: usize,
        /// Mark already in the cell.
        occupant: Player,
    },
}

impl std::error::Error for MoveError {}

//! The 3x3 grid and move application.

use crate::{Move, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Each cell moves from `Empty` to a concrete player at most once and is
/// never overwritten afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Player; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows, top row first.
    pub fn from_rows(cells: [[Player; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Occupant of the cell at (`row`, `column`), or `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells.get(row)?.get(column).copied()
    }

    /// True iff the move is well-formed. Does not look at the cells.
    #[instrument(level = "trace", ret)]
    pub fn validate(mv: &Move) -> bool {
        mv.is_well_formed()
    }

    /// Places the move's mark.
    ///
    /// Fails with [`MoveError::InvalidMove`] when the move is not well-formed and
    /// with [`MoveError::CellOccupied`] when the target cell is taken. On failure
    /// the board is unchanged.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let (row, column) = match mv.cell() {
            Some(cell) if Self::validate(&mv) => cell,
            _ => return Err(MoveError::InvalidMove(mv)),
        };

        let cell = &mut self.cells[row][column];
        if *cell != Player::Empty {
            return Err(MoveError::CellOccupied {
                row,
                column,
                occupant: *cell,
            });
        }

        *cell = mv.player;
        debug!(row, column, player = %mv.player, "Mark placed");
        Ok(())
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|p| p.is_concrete())
    }

    /// Three lines of three space-separated glyphs, without a trailing newline.
    #[instrument(level = "trace", skip(self))]
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(Player::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

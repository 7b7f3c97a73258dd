//! Win detection.

use crate::{Board, Player, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A row, column or diagonal of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row `0..=2`, top first.
    #[display("row {_0}")]
    Row(usize),
    /// Column `0..=2`, left first.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Every line in check order: rows, then columns, then both diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// `(row, column)` of each cell on the line.
    pub fn cells(self) -> [(usize, usize); SIZE] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

impl Board {
    /// First line holding three identical marks, with its owner.
    ///
    /// Lines are examined in [`Line::ALL`] order; when several lines are
    /// complete at once the earliest one is reported.
    #[instrument(level = "trace", skip(self))]
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        Line::ALL.into_iter().find_map(|line| {
            let [a, b, c] = line.cells().map(|(r, col)| self.get(r, col));
            match (a, b, c) {
                (Some(p), Some(q), Some(s)) if p.is_concrete() && p == q && q == s => {
                    Some((line, p))
                }
                _ => None,
            }
        })
    }

    /// `(true, winner)` when some line is complete, `(false, Empty)` otherwise.
    #[instrument(skip(self))]
    pub fn check_win(&self) -> (bool, Player) {
        match self.winning_line() {
            Some((line, winner)) => {
                debug!(%line, %winner, "Winning line found");
                (true, winner)
            }
            None => (false, Player::Empty),
        }
    }
}

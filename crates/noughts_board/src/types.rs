//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Occupant of a cell, or owner of a move.
///
/// Displays as the glyph used on the printed board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// No player; an unoccupied cell.
    #[default]
    #[display(".")]
    Empty,
    /// Cross (moves first).
    #[display("x")]
    Cross,
    /// Circle (moves second).
    #[display("o")]
    Circle,
}

impl Player {
    /// Returns the player who moves after this one.
    ///
    /// `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
            Player::Empty => Player::Empty,
        }
    }

    /// True for `Cross` and `Circle`.
    pub fn is_concrete(self) -> bool {
        self != Player::Empty
    }
}

/// A placement request: put `player`'s mark at (`row`, `column`).
///
/// Coordinates are signed so that out-of-range input survives parsing and
/// is rejected by [`Move::is_well_formed`] rather than by the type system.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{row},{column} ({player})")]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: i64,
    /// Column index, 0 at the left.
    pub column: i64,
    /// Player placing the mark.
    pub player: Player,
}

impl Move {
    /// True iff both coordinates are in `0..=2` and the player is concrete.
    pub fn is_well_formed(&self) -> bool {
        self.cell().is_some() && self.player.is_concrete()
    }

    /// Grid indices of the target cell, if both coordinates are in range.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < crate::SIZE)?;
        let column = usize::try_from(self.column)
            .ok()
            .filter(|c| *c < crate::SIZE)?;
        Some((row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::Cross.opponent(), Player::Circle);
        assert_eq!(Player::Circle.opponent(), Player::Cross);
        assert_eq!(Player::Empty.opponent(), Player::Empty);
    }

    #[test]
    fn test_glyphs() {
        let glyphs: Vec<String> = Player::iter().map(|p| p.to_string()).collect();
        assert_eq!(glyphs, vec![".", "x", "o"]);
    }

    #[test]
    fn test_well_formed_requires_concrete_player() {
        for player in Player::iter() {
            let mv = Move::new(1, 1, player);
            assert_eq!(mv.is_well_formed(), player.is_concrete());
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i64::MAX, 1), (i64::MIN, 2)] {
            let mv = Move::new(row, column, Player::Cross);
            assert!(!mv.is_well_formed(), "{row},{column} should be rejected");
            assert_eq!(mv.cell(), None);
        }
    }

    #[test]
    fn test_cell_indices() {
        assert_eq!(Move::new(2, 0, Player::Circle).cell(), Some((2, 0)));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(1, 2, Player::Cross).to_string(), "1,2 (x)");
    }
}

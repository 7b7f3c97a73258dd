//! Parsing of `<row>,<col>` console lines.

use crate::ParseError;
use noughts_board::{Move, Player};
use tracing::instrument;

/// Parses one console line into a candidate move for `player`.
///
/// A single trailing newline (`\n` or `\r\n`) is stripped. Exactly two
/// comma-separated integer fields are required; any bad field rejects the
/// whole line. Range checks are left to [`Board::validate`](noughts_board::Board::validate).
#[instrument(level = "debug")]
pub fn parse_move(line: &str, player: Player) -> Result<Move, ParseError> {
    let text = match line.strip_suffix('\n') {
        Some(text) => text.strip_suffix('\r').unwrap_or(text),
        None => line,
    };

    let fields: Vec<&str> = text.split(',').collect();
    let [row, column] = fields.as_slice() else {
        return Err(ParseError::WrongFieldCount {
            line: text.to_string(),
        });
    };

    Ok(Move::new(parse_field(row)?, parse_field(column)?, player))
}

fn parse_field(field: &str) -> Result<i64, ParseError> {
    field.parse().map_err(|source| ParseError::InvalidField {
        field: field.to_string(),
        source,
    })
}

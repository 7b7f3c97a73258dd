//! Console-backed move source.

use super::{parse_move, MoveSource};
use crate::events::{emit, EventSender, GameEvent};
use crate::InputError;
use noughts_board::{Board, Move, MoveError, Player};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument, warn};

/// Reads `<row>,<col>` lines until one is a well-formed move.
///
/// Every attempt is preceded by a prompt and every refused line is reported
/// to the printer. There is no attempt limit.
pub struct ConsoleSource<R> {
    name: String,
    reader: R,
    events: EventSender,
}

impl<R> ConsoleSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Creates a source reading from `reader` and reporting on `events`.
    pub fn new(name: impl Into<String>, reader: R, events: EventSender) -> Self {
        Self {
            name: name.into(),
            reader,
            events,
        }
    }

    /// Reads and checks a single line.
    async fn read_candidate(&mut self, player: Player) -> Result<Move, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(InputError::Closed);
        }

        let mv = parse_move(&line, player)?;
        if !Board::validate(&mv) {
            return Err(MoveError::InvalidMove(mv).into());
        }
        Ok(mv)
    }
}

#[async_trait::async_trait]
impl<R> MoveSource for ConsoleSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[instrument(skip(self), fields(source = %self.name))]
    async fn next_move(&mut self, player: Player) -> Result<Move, InputError> {
        loop {
            emit(&self.events, GameEvent::Prompt { player });

            match self.read_candidate(player).await {
                Ok(mv) => {
                    debug!(%mv, "Move collected");
                    return Ok(mv);
                }
                Err(err) if err.is_retryable() => {
                    warn!(error = %err, "Input rejected");
                    emit(
                        &self.events,
                        GameEvent::InputRejected {
                            player,
                            reason: err.to_string(),
                        },
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

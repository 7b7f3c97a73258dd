//! The input collector task.

use super::MoveSource;
use crate::InputError;
use noughts_board::{Move, Player};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Answers each player request from the coordinator with exactly one move.
///
/// Never produces a move it was not asked for. Ends when the coordinator
/// stops asking or when the source runs dry.
pub struct InputCollector<S> {
    source: S,
    requests: mpsc::Receiver<Player>,
    moves: mpsc::Sender<Move>,
    requested: Player,
}

impl<S: MoveSource> InputCollector<S> {
    /// Creates a collector bridging `source` to the coordinator's channels.
    pub fn new(source: S, requests: mpsc::Receiver<Player>, moves: mpsc::Sender<Move>) -> Self {
        Self {
            source,
            requests,
            moves,
            requested: Player::Empty,
        }
    }

    /// Player most recently requested; `Empty` before the first request.
    pub fn requested_player(&self) -> Player {
        self.requested
    }

    /// Waits for the next request and collects a move for it.
    ///
    /// Returns `Ok(None)` once the coordinator has hung up.
    pub async fn next_move(&mut self) -> Result<Option<Move>, InputError> {
        let Some(player) = self.requests.recv().await else {
            return Ok(None);
        };
        self.requested = player;
        debug!(%player, "Move requested");
        self.source.next_move(player).await.map(Some)
    }

    /// Serves requests until either side hangs up.
    #[instrument(skip(self), fields(source = %self.source.name()))]
    pub async fn run(mut self) -> Result<(), InputError> {
        while let Some(mv) = self.next_move().await? {
            if self.moves.send(mv).await.is_err() {
                break;
            }
        }
        info!("Input collector finished");
        Ok(())
    }
}

//! Turn coordination: owns the board and decides whose move comes next.

use crate::events::{emit, EventSender, GameEvent};
use crate::GameError;
use noughts_board::{Board, GameOutcome, Move, Player};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Where the coordinator is in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a move from the given player.
    AwaitingMove(Player),
    /// A move has arrived and is being applied.
    ApplyingMove(Move),
    /// Someone won; no further moves are requested.
    GameOver(GameOutcome),
}

/// Single owner of the authoritative board.
///
/// The current player only changes after a move is applied; a rejected move
/// leaves the same player to go again. The first request is always for cross.
pub struct TurnCoordinator {
    board: Board,
    current: Player,
    state: TurnState,
    requests: mpsc::Sender<Player>,
    moves: mpsc::Receiver<Move>,
    events: EventSender,
}

impl TurnCoordinator {
    /// Creates a coordinator with an empty board, cross to move.
    pub fn new(
        requests: mpsc::Sender<Player>,
        moves: mpsc::Receiver<Move>,
        events: EventSender,
    ) -> Self {
        Self {
            board: Board::new(),
            current: Player::Cross,
            state: TurnState::AwaitingMove(Player::Cross),
            requests,
            moves,
            events,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player whose move is awaited (or who made the winning move).
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Applies one move and returns the state it leads to.
    ///
    /// - rejected: back to `AwaitingMove` for the same player
    /// - applied, no line: `AwaitingMove` for the opponent
    /// - applied, line complete: `GameOver`, reported exactly once
    ///
    /// Moves arriving after `GameOver` are ignored.
    #[instrument(skip(self), fields(mv = %mv, current = %self.current))]
    pub fn handle_move(&mut self, mv: Move) -> TurnState {
        if let TurnState::GameOver(_) = self.state {
            warn!("Move after game over ignored");
            return self.state;
        }

        self.state = TurnState::ApplyingMove(mv);
        let player = self.current;

        if let Err(err) = self.board.apply(mv) {
            warn!(error = %err, "Move rejected");
            emit(
                &self.events,
                GameEvent::MoveRejected {
                    player,
                    reason: err.to_string(),
                },
            );
            self.state = TurnState::AwaitingMove(player);
            return self.state;
        }

        emit(&self.events, GameEvent::BoardChanged(self.board.clone()));

        self.state = match self.board.check_win() {
            (true, winner) => {
                let outcome = GameOutcome::won(winner);
                info!(%winner, "Game over");
                emit(&self.events, GameEvent::GameOver(outcome));
                TurnState::GameOver(outcome)
            }
            (false, _) => {
                if self.board.is_full() {
                    // No draw rule: the next request can only be refused.
                    warn!("Board full without a winning line");
                }
                self.current = player.opponent();
                debug!(next = %self.current, "Turn passed");
                TurnState::AwaitingMove(self.current)
            }
        };
        self.state
    }

    /// Drives the game until someone wins.
    ///
    /// Fails with [`GameError::InputClosed`] if the collector goes away first.
    /// Dropping `self` on return hangs up the request channel, which lets the
    /// collector finish.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<GameOutcome, GameError> {
        info!("Starting game");
        loop {
            if let TurnState::GameOver(outcome) = self.state {
                return Ok(outcome);
            }

            // ApplyingMove never outlives handle_move, so a move is awaited here.
            let player = self.current_player();
            debug!(%player, "Requesting move");
            self.requests
                .send(player)
                .await
                .map_err(|_| GameError::InputClosed)?;
            let mv = self.moves.recv().await.ok_or(GameError::InputClosed)?;
            self.handle_move(mv);
        }
    }
}

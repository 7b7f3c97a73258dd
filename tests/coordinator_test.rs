//! Tests for the turn coordination protocol.

use noughts::{
    GameError, GameEvent, InputCollector, InputError, Move, MoveSource, Player, TurnCoordinator,
};
use std::collections::VecDeque;
use tokio::sync::mpsc;

use Player::{Circle as O, Cross as X};

struct Harness {
    requests: mpsc::Receiver<Player>,
    moves: mpsc::Sender<Move>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    coordinator: tokio::task::JoinHandle<Result<noughts::GameOutcome, GameError>>,
}

fn start() -> Harness {
    let (request_tx, requests) = mpsc::channel(1);
    let (moves, move_rx) = mpsc::channel(1);
    let (event_tx, events) = mpsc::unbounded_channel();
    let coordinator = tokio::spawn(TurnCoordinator::new(request_tx, move_rx, event_tx).run());
    Harness {
        requests,
        moves,
        events,
        coordinator,
    }
}

impl Harness {
    /// Answers the pending request and returns the next one.
    async fn play(&mut self, row: i64, column: i64, player: Player) -> Option<Player> {
        self.moves
            .send(Move::new(row, column, player))
            .await
            .unwrap();
        self.requests.recv().await
    }
}

#[tokio::test]
async fn test_turns_alternate_from_cross() {
    let mut h = start();
    assert_eq!(h.requests.recv().await, Some(X));
    assert_eq!(h.play(0, 0, X).await, Some(O));
    assert_eq!(h.play(1, 1, O).await, Some(X));
    assert_eq!(h.play(2, 2, X).await, Some(O));
}

#[tokio::test]
async fn test_failed_move_rerequests_same_player() {
    let mut h = start();
    assert_eq!(h.requests.recv().await, Some(X));
    assert_eq!(h.play(0, 0, X).await, Some(O));

    // Occupied, then out of range: circle is asked again both times.
    assert_eq!(h.play(0, 0, O).await, Some(O));
    assert_eq!(h.play(0, 9, O).await, Some(O));
    assert_eq!(h.play(0, 1, O).await, Some(X));
}

#[tokio::test]
async fn test_win_ends_requests() {
    let mut h = start();
    assert_eq!(h.requests.recv().await, Some(X));
    assert_eq!(h.play(0, 0, X).await, Some(O));
    assert_eq!(h.play(1, 0, O).await, Some(X));
    assert_eq!(h.play(0, 1, X).await, Some(O));
    assert_eq!(h.play(1, 1, O).await, Some(X));

    // Winning move: the coordinator hangs up instead of asking again.
    assert_eq!(h.play(0, 2, X).await, None);

    let outcome = h.coordinator.await.unwrap().unwrap();
    assert!(*outcome.ended());
    assert_eq!(*outcome.winner(), X);

    let game_overs: Vec<_> = std::iter::from_fn(|| h.events.try_recv().ok())
        .filter(|e| matches!(e, GameEvent::GameOver(_)))
        .collect();
    assert_eq!(game_overs, vec![GameEvent::GameOver(outcome)]);
}

#[tokio::test]
async fn test_closed_move_channel() {
    let mut h = start();
    assert_eq!(h.requests.recv().await, Some(X));
    drop(h.moves);

    let err = h.coordinator.await.unwrap().unwrap_err();
    assert!(matches!(err, GameError::InputClosed));
}

#[tokio::test]
async fn test_board_printed_after_each_applied_move() {
    let mut h = start();
    h.requests.recv().await;
    h.play(1, 1, X).await;
    h.play(1, 1, O).await;

    let events: Vec<_> = std::iter::from_fn(|| h.events.try_recv().ok()).collect();
    assert!(matches!(events[0], GameEvent::BoardChanged(_)));
    assert!(matches!(
        events[1],
        GameEvent::MoveRejected { player: O, .. }
    ));
    assert_eq!(events.len(), 2);
}

/// Answers with pre-set coordinates for whichever player is asked.
struct Scripted {
    cells: VecDeque<(i64, i64)>,
}

#[async_trait::async_trait]
impl MoveSource for Scripted {
    async fn next_move(&mut self, player: Player) -> Result<Move, InputError> {
        let (row, column) = self.cells.pop_front().ok_or(InputError::Closed)?;
        Ok(Move::new(row, column, player))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[tokio::test]
async fn test_collector_answers_only_what_was_asked() {
    let (request_tx, request_rx) = mpsc::channel(1);
    let (move_tx, mut move_rx) = mpsc::channel(1);
    let source = Scripted {
        cells: VecDeque::from([(0, 0), (1, 1), (2, 2)]),
    };
    let mut collector = InputCollector::new(source, request_rx, move_tx);
    assert_eq!(collector.requested_player(), Player::Empty);

    request_tx.send(O).await.unwrap();
    let mv = collector.next_move().await.unwrap();
    assert_eq!(mv, Some(Move::new(0, 0, O)));
    assert_eq!(collector.requested_player(), O);

    let handle = tokio::spawn(collector.run());
    request_tx.send(X).await.unwrap();
    assert_eq!(move_rx.recv().await, Some(Move::new(1, 1, X)));
    assert!(move_rx.try_recv().is_err());

    drop(request_tx);
    handle.await.unwrap().unwrap();
    assert_eq!(move_rx.recv().await, None);
}

#[tokio::test]
async fn test_collector_stops_when_source_runs_dry() {
    let (request_tx, request_rx) = mpsc::channel(1);
    let (move_tx, _move_rx) = mpsc::channel(1);
    let collector = InputCollector::new(
        Scripted {
            cells: VecDeque::new(),
        },
        request_rx,
        move_tx,
    );

    request_tx.send(X).await.unwrap();
    let err = collector.run().await.unwrap_err();
    assert!(matches!(err, InputError::Closed));
}

/// There is no draw rule: once the board fills without a line the next
/// player is still asked for a move, and every answer is refused.
#[tokio::test]
async fn test_full_board_without_line_keeps_requesting() {
    let mut h = start();
    assert_eq!(h.requests.recv().await, Some(X));

    let script = [
        (0, 0, X),
        (0, 1, O),
        (0, 2, X),
        (1, 1, O),
        (1, 0, X),
        (2, 0, O),
        (2, 1, X),
        (1, 2, O),
        (2, 2, X),
    ];
    for (row, column, player) in script {
        assert_eq!(h.play(row, column, player).await, Some(player.opponent()));
    }

    for (row, column) in [(0, 0), (1, 1), (2, 2)] {
        assert_eq!(h.play(row, column, O).await, Some(O));
    }

    let rejected = std::iter::from_fn(|| h.events.try_recv().ok())
        .filter(|e| matches!(e, GameEvent::MoveRejected { player: O, .. }))
        .count();
    assert_eq!(rejected, 3);

    drop(h.moves);
    assert!(matches!(
        h.coordinator.await.unwrap(),
        Err(GameError::InputClosed)
    ));
}

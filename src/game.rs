//! Top-level wiring of the coordinator, collector and printer tasks.

use crate::events::{EventReceiver, EventSender};
use crate::{ConsolePrinter, GameError, InputCollector, MoveSource, TurnCoordinator};
use noughts_board::GameOutcome;
use tokio::io::AsyncWrite;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, instrument, warn};

/// A game waiting to be played.
///
/// Created first so that move sources can be handed the event sender
/// before play starts.
pub struct Game {
    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl Game {
    /// Creates a game with a fresh event channel.
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            events_tx,
            events_rx,
        }
    }

    /// Sender for console events; give one to each move source.
    pub fn events(&self) -> EventSender {
        self.events_tx.clone()
    }

    /// Plays to completion, printing to `out`.
    ///
    /// Spawns the collector, coordinator and printer, waits for the
    /// coordinator's verdict, and returns the outcome together with the
    /// writer once every event the game produced has been printed. Senders
    /// obtained from [`Game::events`] may outlive the call.
    #[instrument(skip_all, fields(source = %source.name()))]
    pub async fn play<S, W>(self, source: S, out: W) -> Result<(GameOutcome, W), GameError>
    where
        S: MoveSource + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel(1);
        let (move_tx, move_rx) = mpsc::channel(1);

        let collector = InputCollector::new(source, request_rx, move_tx);
        let coordinator = TurnCoordinator::new(request_tx, move_rx, self.events_tx);
        let printer = ConsolePrinter::new(out);
        let (done_tx, done_rx) = oneshot::channel();

        let printer = tokio::spawn(printer.run(self.events_rx, done_rx));
        let collector = tokio::spawn(async move {
            if let Err(err) = collector.run().await {
                warn!(error = %err, "Input collector stopped");
            }
        });
        let verdict = tokio::spawn(coordinator.run())
            .await
            .map_err(GameError::TaskFailed)?;

        collector.await.map_err(GameError::TaskFailed)?;

        // Both game tasks are done; stop the printer even if callers still
        // hold event senders.
        let _ = done_tx.send(());
        let out = printer
            .await
            .map_err(GameError::TaskFailed)?
            .map_err(GameError::Output)?;

        let outcome = verdict?;
        info!(%outcome, "Game finished");
        Ok((outcome, out))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

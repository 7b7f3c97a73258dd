//! Console output.

use crate::events::{EventReceiver, GameEvent};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot;
use tracing::{debug, instrument};

/// Writes game events to the console as plain text.
pub struct ConsolePrinter<W> {
    out: W,
}

impl<W> ConsolePrinter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Formats an event the way it appears on the console.
    pub fn format(event: &GameEvent) -> String {
        match event {
            GameEvent::Prompt { player } => format!("Player {player}. Enter Move (ex: 1,1) :\n"),
            GameEvent::InputRejected { reason, .. } => format!("{reason}\n"),
            GameEvent::MoveRejected { reason, .. } => format!("{reason}\n"),
            GameEvent::BoardChanged(board) => format!("\n{board}\n\n"),
            GameEvent::GameOver(outcome) => format!("{outcome}\n"),
        }
    }

    /// Writes one event and flushes.
    pub async fn print(&mut self, event: &GameEvent) -> std::io::Result<()> {
        self.out.write_all(Self::format(event).as_bytes()).await?;
        self.out.flush().await
    }

    /// Prints events until `done` fires (or all senders are gone), then
    /// prints whatever is still queued and hands back the writer.
    ///
    /// Senders still held elsewhere do not keep the printer alive past `done`.
    #[instrument(skip_all)]
    pub async fn run(
        mut self,
        mut events: EventReceiver,
        mut done: oneshot::Receiver<()>,
    ) -> std::io::Result<W> {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.print(&event).await?,
                    None => return Ok(self.out),
                },
                _ = &mut done => break,
            }
        }

        events.close();
        while let Ok(event) = events.try_recv() {
            self.print(&event).await?;
        }
        debug!("Printer drained");
        Ok(self.out)
    }
}

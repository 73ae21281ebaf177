//! Deferred delivery of AI moves.
//!
//! The engine hands out [`OpponentTurn`] tickets. The scheduler sleeps for
//! the ticket's delay on a tokio task and then sends it back over a channel
//! for the UI loop to play. At most one ticket is scheduled at a time.

use tictactoe_engine::OpponentTurn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Keeps at most one pending AI move on a timer.
#[derive(Debug)]
pub struct OpponentScheduler {
    tx: mpsc::UnboundedSender<OpponentTurn>,
    scheduled: Option<(OpponentTurn, JoinHandle<()>)>,
}

impl OpponentScheduler {
    /// Creates a scheduler and the receiver that fired tickets arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OpponentTurn>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, scheduled: None }, rx)
    }

    /// The ticket currently on the timer, if any.
    pub fn scheduled(&self) -> Option<OpponentTurn> {
        self.scheduled.as_ref().map(|(turn, _)| *turn)
    }

    /// Makes the timer match the engine's pending turn.
    ///
    /// Keeps the running timer if `desired` is the ticket already scheduled.
    /// Otherwise the old timer is aborted and, if `desired` is present, a new
    /// one is started. Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn sync(&mut self, desired: Option<OpponentTurn>) {
        if self.scheduled() == desired {
            return;
        }

        self.cancel();

        if let Some(turn) = desired {
            debug!(epoch = turn.epoch(), ply = turn.ply(), "Scheduling opponent turn");
            let tx = self.tx.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(turn.delay()).await;
                // Receiver gone means the UI has shut down.
                let _ = tx.send(turn);
            });
            self.scheduled = Some((turn, handle));
        }
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some((turn, handle)) = self.scheduled.take() {
            debug!(epoch = turn.epoch(), ply = turn.ply(), "Cancelling opponent turn");
            handle.abort();
        }
    }
}

impl Drop for OpponentScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Single-owner queue in front of a [`KanbanBoard`].
//!
//! The drag lifecycle only makes sense when events arrive strictly in order.
//! When several producers share a board they talk to one task that owns it,
//! and that task applies commands one at a time.

use crate::command::{BoardCommand, Outcome};
use crate::controller::KanbanBoard;
use crate::error::Result;
use crate::types::{Board, DragItem};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

const QUEUE_DEPTH: usize = 64;

/// A consistent view of the board and the drag in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active: Option<DragItem>,
}

enum Request {
    Apply {
        command: BoardCommand,
        reply: oneshot::Sender<Outcome>,
    },
    Snapshot {
        reply: oneshot::Sender<Snapshot>,
    },
}

/// Cloneable handle to a board owned by a background task
#[derive(Debug, Clone)]
pub struct BoardHandle {
    tx: mpsc::Sender<Request>,
}

/// The task that owns the board
pub struct BoardTask {
    join: JoinHandle<KanbanBoard>,
}

impl BoardHandle {
    /// Move `board` into a new task. Must be called inside a tokio runtime.
    pub fn spawn(board: KanbanBoard) -> (Self, BoardTask) {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        let join = tokio::spawn(run(board, rx));
        (Self { tx }, BoardTask { join })
    }

    /// Apply a command after every command queued before it
    pub async fn apply(&self, command: BoardCommand) -> Result<Outcome> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Request::Apply { command, reply }).await?;
        Ok(rx.await?)
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Request::Snapshot { reply }).await?;
        Ok(rx.await?)
    }
}

impl BoardTask {
    /// Wait for every handle to drop, then return the board.
    ///
    /// Commands already queued are applied first.
    pub async fn shutdown(self) -> Result<KanbanBoard> {
        self.join.await.map_err(|e| {
            tracing::error!("board task failed: {}", e);
            crate::TaskboardError::ChannelClosed
        })
    }
}

async fn run(mut board: KanbanBoard, mut rx: mpsc::Receiver<Request>) -> KanbanBoard {
    while let Some(request) = rx.recv().await {
        match request {
            Request::Apply { command, reply } => {
                let outcome = board.apply(command);
                // The caller may have given up waiting; the command still counts.
                let _ = reply.send(outcome);
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(Snapshot {
                    board: board.board().clone(),
                    active: board.session().active().cloned(),
                });
            }
        }
    }
    debug!("board queue closed");
    board
}

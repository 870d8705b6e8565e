//! The authoritative in-memory board and its CRUD mutations.
//!
//! Every mutation is total: an id that does not exist is a no-op, and the
//! mutation reports that by returning `false` or `None`. Unaffected items keep
//! their relative order.

mod column;
mod task;

use crate::ids::{ColumnId, IdSource, TaskId, UlidIds};
use crate::session::DragSession;
use crate::types::{Board, Column, DragItem, DragKind, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefixes for generated default titles ("Column 3", "Task 12")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub column: String,
    pub task: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            column: "Column".to_string(),
            task: "Task".to_string(),
        }
    }
}

/// The item under the pointer, borrowed for drawing the drag overlay
#[derive(Debug, PartialEq, Eq)]
pub enum ActiveItem<'a> {
    Column {
        column: &'a Column,
        tasks: Vec<&'a Task>,
    },
    Task(&'a Task),
}

/// Owns the board and mints ids for new items
pub struct BoardStore {
    board: Board,
    ids: Box<dyn IdSource>,
    labels: Labels,
}

impl BoardStore {
    /// An empty board with ULID ids and default labels
    pub fn new() -> Self {
        Self::with_ids(UlidIds::new())
    }

    pub fn with_ids(ids: impl IdSource + 'static) -> Self {
        Self {
            board: Board::new(),
            ids: Box::new(ids),
            labels: Labels::default(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Start from an existing board.
    ///
    /// Tasks whose column is missing are dropped so the store never holds a
    /// dangling reference.
    pub fn with_board(mut self, mut board: Board) -> Self {
        let before = board.tasks.len();
        let columns: Vec<ColumnId> = board.columns.iter().map(|c| c.id.clone()).collect();
        board.tasks.retain(|t| columns.contains(&t.column_id));
        if board.tasks.len() != before {
            tracing::warn!(
                dropped = before - board.tasks.len(),
                "dropped tasks referencing missing columns"
            );
        }
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn columns(&self) -> &[Column] {
        &self.board.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.board.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.board.find_column(id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.board.find_task(id)
    }

    /// Column ids in board order
    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.board.columns.iter().map(|c| &c.id).collect()
    }

    /// Tasks of a column in display order
    pub fn tasks_in(&self, column: &ColumnId) -> Vec<&Task> {
        self.board.tasks_in(column).collect()
    }

    pub fn task_count(&self, column: &ColumnId) -> usize {
        self.board.tasks_in(column).count()
    }

    /// See [`Board::resolve`]
    pub fn resolve(&self, id: &str) -> Option<DragItem> {
        self.board.resolve(id)
    }

    /// The item currently being dragged, if it still exists
    pub fn active_item(&self, session: &DragSession) -> Option<ActiveItem<'_>> {
        match session.active()? {
            DragItem::Column(id) => {
                let column = self.board.find_column(id)?;
                Some(ActiveItem::Column {
                    column,
                    tasks: self.tasks_in(id),
                })
            }
            DragItem::Task(id) => self.board.find_task(id).map(ActiveItem::Task),
        }
    }

    /// Mutable access for the reconciliation engine
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Next id from the source that is not already on the board. A loaded
    /// board may hold ids the source would otherwise hand out again.
    fn next_id(&mut self, kind: DragKind) -> String {
        loop {
            let id = self.ids.next_id(kind);
            if self.board.resolve(&id).is_none() {
                return id;
            }
            tracing::trace!(%id, "skipping id already on the board");
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("board", &self.board)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

//! Serializable commands covering every way a board can change.
//!
//! A command script is a list of these, e.g. in YAML:
//!
//! ```yaml
//! - op: add_column
//! - op: add_task
//!   column: col-1
//! - op: drag_start
//!   item: { kind: task, id: task-1 }
//! - op: drag_over
//!   active: { kind: task, id: task-1 }
//!   over: { kind: column, id: col-2 }
//! - op: drag_end
//!   active: { kind: task, id: task-1 }
//! ```

use crate::ids::{ColumnId, TaskId};
use crate::types::DragItem;
use serde::{Deserialize, Serialize};

/// One mutation or drag event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    AddColumn,
    AddTask {
        column: ColumnId,
    },
    RemoveColumn {
        id: ColumnId,
    },
    RemoveTask {
        id: TaskId,
    },
    RenameColumn {
        id: ColumnId,
        title: String,
    },
    EditTask {
        id: TaskId,
        content: String,
    },
    DragStart {
        item: DragItem,
    },
    DragOver {
        active: DragItem,
        #[serde(default)]
        over: Option<DragItem>,
    },
    DragEnd {
        active: DragItem,
        #[serde(default)]
        over: Option<DragItem>,
    },
    BeginEdit {
        item: DragItem,
    },
    FinishEdit,
}

impl BoardCommand {
    /// Canonical "verb noun" name, e.g. "add column" or "drag over"
    pub fn op_string(&self) -> &'static str {
        match self {
            Self::AddColumn => "add column",
            Self::AddTask { .. } => "add task",
            Self::RemoveColumn { .. } => "remove column",
            Self::RemoveTask { .. } => "remove task",
            Self::RenameColumn { .. } => "rename column",
            Self::EditTask { .. } => "edit task",
            Self::DragStart { .. } => "drag start",
            Self::DragOver { .. } => "drag over",
            Self::DragEnd { .. } => "drag end",
            Self::BeginEdit { .. } => "begin edit",
            Self::FinishEdit => "finish edit",
        }
    }

    /// Drag-over events arrive continuously and are logged at trace level
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::DragOver { .. })
    }
}

/// What applying a command did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A new column or task was added
    Created { item: DragItem },
    /// The board or the drag session changed
    Changed,
    /// Nothing happened, usually because an id was unknown
    Unchanged,
}

impl Outcome {
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

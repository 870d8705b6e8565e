//! Drag payload types: which kind of item a drag event refers to.

use crate::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of draggable items on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Column,
    Task,
}

impl DragKind {
    /// Lowercase noun used in op strings and log lines
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// A typed reference to a draggable item.
///
/// Drag events carry the kind explicitly, so the engine never has to guess
/// whether an id names a column or a task. Serializes as
/// `{"kind": "task", "id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    Column(ColumnId),
    Task(TaskId),
}

impl DragItem {
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Task(_) => DragKind::Task,
        }
    }

    /// The raw identifier, regardless of kind
    pub fn id(&self) -> &str {
        match self {
            Self::Column(id) => id.as_str(),
            Self::Task(id) => id.as_str(),
        }
    }
}

impl fmt::Display for DragItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

//! Board-level types: Board, Column, Task

use super::drag::DragItem;
use crate::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// The board: an ordered sequence of columns and an ordered sequence of tasks.
///
/// Order is positional. A task's place inside its column is its position in
/// `tasks` relative to the other tasks with the same `column_id`; tasks of
/// different columns may interleave freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Whether the item exists with the kind it claims
    pub fn contains(&self, item: &DragItem) -> bool {
        match item {
            DragItem::Column(id) => self.column_index(id).is_some(),
            DragItem::Task(id) => self.task_index(id).is_some(),
        }
    }

    /// Resolve a bare identifier into a typed item, looking at tasks first.
    ///
    /// This is the boundary helper for callers that only have a raw id.
    /// Returns `None` for an id that names neither a task nor a column.
    pub fn resolve(&self, id: &str) -> Option<DragItem> {
        if let Some(task) = self.tasks.iter().find(|t| t.id.as_str() == id) {
            return Some(DragItem::Task(task.id.clone()));
        }
        self.columns
            .iter()
            .find(|c| c.id.as_str() == id)
            .map(|c| DragItem::Column(c.id.clone()))
    }

    /// Tasks of one column, in column order
    pub fn tasks_in<'a>(&'a self, column: &ColumnId) -> impl Iterator<Item = &'a Task> + 'a {
        let column = column.clone();
        self.tasks.iter().filter(move |t| t.column_id == column)
    }

    /// Tasks whose column does not exist. Always empty on a healthy board.
    pub fn dangling_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |t| self.column_index(&t.column_id).is_none())
    }

    /// Every task references an existing column
    pub fn is_consistent(&self) -> bool {
        self.dangling_tasks().next().is_none()
    }
}

/// A column is a named container of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A task belongs to exactly one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board {
            columns: vec![Column::new("a", "A"), Column::new("b", "B")],
            tasks: vec![
                Task::new("t1", "a", "one"),
                Task::new("t2", "b", "two"),
                Task::new("t3", "a", "three"),
            ],
        }
    }

    #[test]
    fn test_tasks_in_keeps_sequence_order() {
        let board = sample();
        let column = ColumnId::from("a");
        let ids: Vec<&str> = board.tasks_in(&column).map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }

    #[test]
    fn test_tasks_in_outlives_column_argument() {
        let board = sample();
        let tasks: Vec<&Task> = board.tasks_in(&ColumnId::from("b")).collect();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, "two");
    }

    #[test]
    fn test_resolve_prefers_tasks() {
        let mut board = sample();
        assert_eq!(board.resolve("b"), Some(DragItem::column("b")));
        assert_eq!(board.resolve("t2"), Some(DragItem::task("t2")));
        assert_eq!(board.resolve("missing"), None);

        // A task sharing an id with a column wins
        board.tasks.push(Task::new("a", "b", "shadow"));
        assert_eq!(board.resolve("a"), Some(DragItem::task("a")));
    }

    #[test]
    fn test_contains_checks_kind() {
        let board = sample();
        assert!(board.contains(&DragItem::column("a")));
        assert!(!board.contains(&DragItem::task("a")));
    }

    #[test]
    fn test_dangling_tasks() {
        let mut board = sample();
        assert!(board.is_consistent());

        board.columns.retain(|c| c.id.as_str() != "b");
        let dangling: Vec<&str> = board.dangling_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(dangling, vec!["t2"]);
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_board_serialization() {
        let board = sample();
        let json = serde_json::to_string_pretty(&board).unwrap();
        assert!(json.contains("\"column_id\": \"a\""));

        let parsed: Board = serde_json::from_str(r#"{"columns": [{"id": "x", "title": "X"}]}"#)
            .unwrap();
        assert_eq!(parsed.columns.len(), 1);
        assert!(parsed.tasks.is_empty());
    }
}

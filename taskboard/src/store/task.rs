//! Task mutations

use super::BoardStore;
use crate::ids::{ColumnId, TaskId};
use crate::types::{DragKind, Task};
use tracing::debug;

impl BoardStore {
    /// Append a new task to a column.
    ///
    /// The default content counts every task on the board, not just the
    /// column's. Returns `None` without touching the board when the column
    /// does not exist.
    pub fn add_task(&mut self, column_id: &ColumnId) -> Option<Task> {
        if self.board.column_index(column_id).is_none() {
            debug!(column = %column_id, "add task: no such column");
            return None;
        }

        let id = TaskId::from(self.next_id(DragKind::Task));
        let content = format!("{} {}", self.labels.task, self.board.tasks.len() + 1);
        let task = Task::new(id, column_id.clone(), content);

        debug!(id = %task.id, column = %column_id, "add task");
        self.board.tasks.push(task.clone());
        Some(task)
    }

    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        match self.board.task_index(id) {
            Some(index) => {
                self.board.tasks.remove(index);
                debug!(%id, "remove task");
                true
            }
            None => {
                debug!(%id, "remove task: no such task");
                false
            }
        }
    }

    /// Replace a task's content in place
    pub fn edit_task(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        match self.board.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.content = content.into();
                debug!(%id, "edit task");
                true
            }
            None => {
                debug!(%id, "edit task: no such task");
                false
            }
        }
    }
}

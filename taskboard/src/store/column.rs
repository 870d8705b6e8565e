//! Column mutations

use super::BoardStore;
use crate::ids::ColumnId;
use crate::types::{Column, DragKind};
use tracing::debug;

impl BoardStore {
    /// Append a new column with a fresh id and a positional default title
    pub fn add_column(&mut self) -> Column {
        let id = ColumnId::from(self.next_id(DragKind::Column));
        let title = format!("{} {}", self.labels.column, self.board.columns.len() + 1);
        let column = Column::new(id, title);

        debug!(id = %column.id, title = %column.title, "add column");
        self.board.columns.push(column.clone());
        column
    }

    /// Remove a column and every task it holds.
    ///
    /// Returns `false` when the column does not exist; the board is untouched.
    pub fn remove_column(&mut self, id: &ColumnId) -> bool {
        let Some(index) = self.board.column_index(id) else {
            debug!(%id, "remove column: no such column");
            return false;
        };

        self.board.columns.remove(index);
        let before = self.board.tasks.len();
        self.board.tasks.retain(|t| &t.column_id != id);

        debug!(%id, cascaded = before - self.board.tasks.len(), "remove column");
        true
    }

    /// Replace a column's title in place
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> bool {
        match self.board.columns.iter_mut().find(|c| &c.id == id) {
            Some(column) => {
                column.title = title.into();
                debug!(%id, title = %column.title, "rename column");
                true
            }
            None => {
                debug!(%id, "rename column: no such column");
                false
            }
        }
    }
}

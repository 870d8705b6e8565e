//! The board as a view sees it: store, drag session and engine in one place.

use crate::command::{BoardCommand, Outcome};
use crate::config::TaskboardConfig;
use crate::ids::{ColumnId, TaskId};
use crate::logging::Pretty;
use crate::reconcile;
use crate::session::DragSession;
use crate::store::{ActiveItem, BoardStore};
use crate::types::{Board, Column, DragItem, Task};
use tracing::{debug, trace, warn};

/// A kanban board driven by drag events.
///
/// Drag events follow a strict lifecycle: one [`on_drag_start`], any number
/// of [`on_drag_over`], then one [`on_drag_end`]. The end event always
/// clears the session, whatever else happens.
///
/// [`on_drag_start`]: KanbanBoard::on_drag_start
/// [`on_drag_over`]: KanbanBoard::on_drag_over
/// [`on_drag_end`]: KanbanBoard::on_drag_end
#[derive(Debug, Default)]
pub struct KanbanBoard {
    store: BoardStore,
    session: DragSession,
    editing: Option<DragItem>,
}

impl KanbanBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: BoardStore) -> Self {
        Self {
            store,
            session: DragSession::new(),
            editing: None,
        }
    }

    /// An empty board using the configured id scheme and labels
    pub fn from_config(config: &TaskboardConfig) -> Self {
        Self::with_store(config.build_store())
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The item being dragged, for drawing the overlay
    pub fn active_item(&self) -> Option<ActiveItem<'_>> {
        self.store.active_item(&self.session)
    }

    /// The item currently in edit mode, if any
    pub fn editing(&self) -> Option<&DragItem> {
        self.editing.as_ref()
    }

    pub fn into_store(self) -> BoardStore {
        self.store
    }

    // Drag lifecycle

    /// Start dragging `item`.
    ///
    /// Items that do not exist, and the item in edit mode, cannot be dragged.
    pub fn on_drag_start(&mut self, item: DragItem) -> bool {
        if !self.store.board().contains(&item) {
            debug!(%item, "drag start ignored: unknown item");
            return false;
        }
        if self.editing.as_ref() == Some(&item) {
            debug!(%item, "drag start ignored: item is being edited");
            return false;
        }
        self.session.begin(item);
        true
    }

    /// Pointer is hovering `over` while dragging `active`.
    ///
    /// Events for a drag other than the active one are ignored, as are
    /// repeats of the previous hover target.
    pub fn on_drag_over(&mut self, active: &DragItem, over: Option<DragItem>) -> bool {
        if !self.session.is_dragging(active) {
            warn!(%active, session = ?self.session.active(), "drag over for inactive item");
            return false;
        }
        if !self.session.hover(over.clone()) {
            trace!(%active, "drag over: target unchanged");
            return false;
        }
        let Some(over) = over else {
            return false;
        };

        reconcile::apply_over(self.store.board_mut(), active, &over)
    }

    /// Release the dragged item over `over` (or over nothing).
    ///
    /// The session is cleared first so that no exit path can leave a drag
    /// stuck open.
    pub fn on_drag_end(&mut self, active: &DragItem, over: Option<&DragItem>) -> bool {
        let ended = self.session.end();
        if ended.as_ref() != Some(active) {
            warn!(%active, session = ?ended, "drag end for inactive item");
            return false;
        }

        let changed = reconcile::apply_end(self.store.board_mut(), active, over);
        if changed {
            debug!(board = %Pretty(self.store.board()), "board after drop");
        }
        changed
    }

    // Editing

    /// Put an item into edit mode. Only one item is edited at a time.
    pub fn begin_edit(&mut self, item: DragItem) -> bool {
        if !self.store.board().contains(&item) {
            debug!(%item, "begin edit ignored: unknown item");
            return false;
        }
        self.editing = Some(item);
        true
    }

    pub fn finish_edit(&mut self) -> Option<DragItem> {
        self.editing.take()
    }

    // CRUD

    pub fn add_column(&mut self) -> Column {
        self.store.add_column()
    }

    pub fn add_task(&mut self, column_id: &ColumnId) -> Option<Task> {
        self.store.add_task(column_id)
    }

    /// Remove a column with its tasks, ending any drag or edit that pointed
    /// at one of them
    pub fn remove_column(&mut self, id: &ColumnId) -> bool {
        let doomed: Vec<TaskId> = self.store.tasks_in(id).iter().map(|t| t.id.clone()).collect();
        if !self.store.remove_column(id) {
            return false;
        }

        let affected = |item: &DragItem| match item {
            DragItem::Column(column) => column == id,
            DragItem::Task(task) => doomed.contains(task),
        };
        if self.session.active().is_some_and(affected) {
            debug!(column = %id, "removed column held the active drag");
            self.session.end();
        }
        if self.editing.as_ref().is_some_and(affected) {
            self.editing = None;
        }
        true
    }

    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        if !self.store.remove_task(id) {
            return false;
        }

        let item = DragItem::Task(id.clone());
        if self.session.is_dragging(&item) {
            debug!(task = %id, "removed task was being dragged");
            self.session.end();
        }
        if self.editing.as_ref() == Some(&item) {
            self.editing = None;
        }
        true
    }

    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> bool {
        self.store.rename_column(id, title)
    }

    pub fn edit_task(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        self.store.edit_task(id, content)
    }

    /// Apply one command
    pub fn apply(&mut self, command: BoardCommand) -> Outcome {
        if command.is_continuous() {
            trace!(op = command.op_string(), "apply");
        } else {
            debug!(op = command.op_string(), "apply");
        }

        match command {
            BoardCommand::AddColumn => Outcome::Created {
                item: DragItem::Column(self.add_column().id),
            },
            BoardCommand::AddTask { column } => match self.add_task(&column) {
                Some(task) => Outcome::Created {
                    item: DragItem::Task(task.id),
                },
                None => Outcome::Unchanged,
            },
            BoardCommand::RemoveColumn { id } => Outcome::from_changed(self.remove_column(&id)),
            BoardCommand::RemoveTask { id } => Outcome::from_changed(self.remove_task(&id)),
            BoardCommand::RenameColumn { id, title } => {
                Outcome::from_changed(self.rename_column(&id, title))
            }
            BoardCommand::EditTask { id, content } => {
                Outcome::from_changed(self.edit_task(&id, content))
            }
            BoardCommand::DragStart { item } => Outcome::from_changed(self.on_drag_start(item)),
            BoardCommand::DragOver { active, over } => {
                Outcome::from_changed(self.on_drag_over(&active, over))
            }
            BoardCommand::DragEnd { active, over } => {
                // Ending a drag always changes the session, even if the drop
                // itself was a no-op.
                let was_active = self.session.is_dragging(&active);
                let changed = self.on_drag_end(&active, over.as_ref());
                Outcome::from_changed(was_active || changed)
            }
            BoardCommand::BeginEdit { item } => Outcome::from_changed(self.begin_edit(item)),
            BoardCommand::FinishEdit => Outcome::from_changed(self.finish_edit().is_some()),
        }
    }
}

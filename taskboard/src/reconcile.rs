//! Reorder/move reconciliation.
//!
//! Given a board and one drag event, compute the next board. Drag-over events
//! move tasks (within a column or across columns) as the pointer travels;
//! the drag-end event reorders columns. Every function here is pure with
//! respect to the board it is handed: there is no hidden state, and an event
//! naming an item that does not exist leaves the board as it was.
//!
//! Two forms are provided. `reconcile_*` take and return a [`Board`] by value;
//! `apply_*` work in place and report whether anything changed.

use crate::types::{Board, DragItem};
use tracing::{debug, trace};

/// Move the element at `from` so that it ends up at index `to`.
///
/// Elements between the two slots shift by one toward `from`. Out of range
/// indices leave the sequence alone.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Reconcile a drag-over event, returning the next board.
///
/// Repeating the same `(active, over)` pair is not a fixed point here: a
/// second task-over-task call relocates against the anchor's new index and
/// swaps the two back. [`KanbanBoard::on_drag_over`] skips a hover whose
/// target has not changed, which makes repeats no-ops during a drag.
///
/// [`KanbanBoard::on_drag_over`]: crate::KanbanBoard::on_drag_over
pub fn reconcile_over(mut board: Board, active: &DragItem, over: &DragItem) -> Board {
    apply_over(&mut board, active, over);
    board
}

/// Reconcile a drag-end event, returning the next board.
///
/// `over` is `None` when the item was released outside any drop target.
pub fn reconcile_end(mut board: Board, active: &DragItem, over: Option<&DragItem>) -> Board {
    apply_end(&mut board, active, over);
    board
}

/// In-place form of [`reconcile_over`]. Returns `true` if the board changed.
///
/// - task over task: the active task adopts the hovered task's column if it
///   differs, then is relocated to the hovered task's index.
/// - task over column: the active task adopts the column; its place in the
///   sequence does not change.
/// - anything with a column active: nothing, columns reorder on drop.
pub fn apply_over(board: &mut Board, active: &DragItem, over: &DragItem) -> bool {
    if active.id() == over.id() {
        return false;
    }

    match (active, over) {
        (DragItem::Task(active_id), DragItem::Task(over_id)) => {
            let (Some(from), Some(to)) = (board.task_index(active_id), board.task_index(over_id))
            else {
                trace!(active = %active_id, over = %over_id, "task over task: unknown task");
                return false;
            };

            let target_column = board.tasks[to].column_id.clone();
            let moved_column = board.tasks[from].column_id != target_column;
            if moved_column {
                board.tasks[from].column_id = target_column;
            }
            relocate(&mut board.tasks, from, to);

            debug!(
                task = %active_id,
                over = %over_id,
                from,
                to,
                moved_column,
                "task over task"
            );
            moved_column || from != to
        }
        (DragItem::Task(active_id), DragItem::Column(column_id)) => {
            if board.column_index(column_id).is_none() {
                trace!(column = %column_id, "task over column: unknown column");
                return false;
            }
            let Some(task) = board.tasks.iter_mut().find(|t| &t.id == active_id) else {
                trace!(task = %active_id, "task over column: unknown task");
                return false;
            };
            if &task.column_id == column_id {
                return false;
            }

            task.column_id = column_id.clone();
            debug!(task = %active_id, column = %column_id, "task over column");
            true
        }
        (DragItem::Column(_), _) => false,
    }
}

/// In-place form of [`reconcile_end`]. Returns `true` if the board changed.
///
/// Only a column dropped on another column does anything: it is relocated to
/// the target column's index. A task drop is final as the last drag-over
/// left it.
pub fn apply_end(board: &mut Board, active: &DragItem, over: Option<&DragItem>) -> bool {
    let Some(over) = over else {
        trace!(%active, "dropped outside any target");
        return false;
    };
    if active.id() == over.id() {
        return false;
    }

    match (active, over) {
        (DragItem::Column(active_id), DragItem::Column(over_id)) => {
            let (Some(from), Some(to)) =
                (board.column_index(active_id), board.column_index(over_id))
            else {
                trace!(active = %active_id, over = %over_id, "column drop: unknown column");
                return false;
            };

            relocate(&mut board.columns, from, to);
            debug!(column = %active_id, over = %over_id, from, to, "column drop");
            true
        }
        _ => false,
    }
}

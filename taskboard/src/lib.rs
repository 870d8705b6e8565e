//! Kanban board engine with drag-and-drop reconciliation
//!
//! This crate keeps an ordered board of columns, each holding an ordered list
//! of tasks, and turns a stream of drag events into the next board state.
//!
//! ## Overview
//!
//! - **Positional order** - Columns and tasks live in two `Vec`s; order is
//!   position, there are no rank fields
//! - **Typed drag payloads** - Every drag event names a [`DragItem`], either a
//!   column or a task
//! - **Pure reconciliation** - [`reconcile`] maps `(board, event)` to the
//!   next board and never fails; unknown ids are no-ops
//! - **One owner** - [`BoardHandle`] serializes commands from many producers
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{BoardStore, DragItem, KanbanBoard, SequentialIds};
//!
//! let mut board = KanbanBoard::with_store(BoardStore::with_ids(SequentialIds::new()));
//! let todo = board.add_column();
//! let done = board.add_column();
//! let task = board.add_task(&todo.id).unwrap();
//!
//! // Drag the task onto the empty "done" column and drop it there
//! let active = DragItem::Task(task.id.clone());
//! board.on_drag_start(active.clone());
//! board.on_drag_over(&active, Some(DragItem::Column(done.id.clone())));
//! board.on_drag_end(&active, Some(&DragItem::Column(done.id.clone())));
//!
//! assert_eq!(board.store().task_count(&done.id), 1);
//! assert!(!board.session().is_active());
//! ```
//!
//! ## Drag lifecycle
//!
//! ```text
//! on_drag_start(item)        session: idle -> active(item)
//! on_drag_over(item, over)*  tasks move between/within columns
//! on_drag_end(item, over)    columns reorder; session: -> idle (always)
//! ```

pub mod command;
pub mod config;
mod controller;
mod error;
pub mod handle;
pub mod ids;
pub mod logging;
pub mod reconcile;
pub mod session;
pub mod store;
pub mod types;

pub use command::{BoardCommand, Outcome};
pub use config::{IdScheme, TaskboardConfig};
pub use controller::KanbanBoard;
pub use error::{Result, TaskboardError};
pub use handle::{BoardHandle, BoardTask, Snapshot};
pub use ids::{ColumnId, IdSource, SequentialIds, TaskId, UlidIds};
pub use logging::Pretty;
pub use session::DragSession;
pub use store::{ActiveItem, BoardStore, Labels};

// Re-export commonly used types
pub use types::{Board, Column, DragItem, DragKind, Task};

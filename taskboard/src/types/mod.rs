//! Core types for the board engine

mod board;
mod drag;

pub use board::{Board, Column, Task};
pub use drag::{DragItem, DragKind};

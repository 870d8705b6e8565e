//! Guided walk through the basic drag gestures.

use crate::cli::OutputFormat;
use crate::replay::render;
use taskboard::{DragItem, KanbanBoard, Result};

/// Build a two column board, then move a task across columns, release a
/// task outside the board, swap the columns, remove one, and finally drag a
/// task into a new empty column. Each step's board is written to `out`.
pub fn run(
    mut board: KanbanBoard,
    format: OutputFormat,
    out: &mut impl std::io::Write,
) -> Result<()> {
    let todo = board.add_column();
    let doing = board.add_column();
    board.rename_column(&todo.id, "To Do");
    board.rename_column(&doing.id, "Doing");

    let tasks = (
        board.add_task(&todo.id),
        board.add_task(&todo.id),
        board.add_task(&doing.id),
    );
    let (Some(first), Some(_), Some(third)) = tasks else {
        return Ok(());
    };
    print_step(out, "initial board", &board, format)?;

    let active = DragItem::Task(first.id.clone());
    let over = DragItem::Task(third.id.clone());
    board.on_drag_start(active.clone());
    board.on_drag_over(&active, Some(over.clone()));
    board.on_drag_end(&active, Some(&over));
    print_step(out, "first task dragged onto a task in Doing", &board, format)?;

    board.on_drag_start(active.clone());
    board.on_drag_end(&active, None);
    print_step(out, "same task released outside the board", &board, format)?;

    let active = DragItem::Column(todo.id.clone());
    let over = DragItem::Column(doing.id.clone());
    board.on_drag_start(active.clone());
    board.on_drag_end(&active, Some(&over));
    print_step(out, "To Do column dropped on Doing", &board, format)?;

    board.remove_column(&todo.id);
    print_step(out, "To Do column removed with its tasks", &board, format)?;

    let done = board.add_column();
    board.rename_column(&done.id, "Done");
    let active = DragItem::Task(third.id.clone());
    let over = DragItem::Column(done.id.clone());
    board.on_drag_start(active.clone());
    board.on_drag_over(&active, Some(over.clone()));
    board.on_drag_end(&active, Some(&over));
    print_step(out, "task dragged into the empty Done column", &board, format)?;

    Ok(())
}

fn print_step(
    out: &mut impl std::io::Write,
    title: &str,
    board: &KanbanBoard,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out, "# {}", title)?;
    write!(out, "{}", render(board.board(), format)?)?;
    Ok(())
}

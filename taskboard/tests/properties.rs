//! Property-based tests for board invariants
//!
//! Random sequences of CRUD operations and drag gestures are applied to a
//! board; after every step the board must still hold together.

use proptest::prelude::*;
use taskboard::{
    reconcile, Board, BoardStore, ColumnId, DragItem, KanbanBoard, SequentialIds, TaskId,
};

/// Ids are picked by index into whatever exists when the step runs; an
/// index past the end picks an id that does not exist.
#[derive(Debug, Clone)]
enum Step {
    AddColumn,
    AddTask(usize),
    RemoveColumn(usize),
    RemoveTask(usize),
    RenameColumn(usize, String),
    EditTask(usize, String),
    DragTask { task: usize, path: Vec<Target> },
    DragColumn { column: usize, drop: Option<usize> },
}

#[derive(Debug, Clone)]
enum Target {
    Task(usize),
    Column(usize),
    Nothing,
}

fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,12}").expect("valid regex for text")
}

fn target() -> impl Strategy<Value = Target> {
    prop_oneof![
        (0..12usize).prop_map(Target::Task),
        (0..6usize).prop_map(Target::Column),
        Just(Target::Nothing),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => Just(Step::AddColumn),
        4 => (0..6usize).prop_map(Step::AddTask),
        1 => (0..6usize).prop_map(Step::RemoveColumn),
        1 => (0..12usize).prop_map(Step::RemoveTask),
        1 => (0..6usize, text()).prop_map(|(i, t)| Step::RenameColumn(i, t)),
        1 => (0..12usize, text()).prop_map(|(i, t)| Step::EditTask(i, t)),
        3 => (0..12usize, prop::collection::vec(target(), 0..6))
            .prop_map(|(task, path)| Step::DragTask { task, path }),
        2 => (0..6usize, prop::option::of(0..6usize))
            .prop_map(|(column, drop)| Step::DragColumn { column, drop }),
    ]
}

fn column_at(board: &KanbanBoard, i: usize) -> ColumnId {
    board
        .board()
        .columns
        .get(i)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| ColumnId::from("ghost-column"))
}

fn task_at(board: &KanbanBoard, i: usize) -> TaskId {
    board
        .board()
        .tasks
        .get(i)
        .map(|t| t.id.clone())
        .unwrap_or_else(|| TaskId::from("ghost-task"))
}

fn resolve_target(board: &KanbanBoard, target: &Target) -> Option<DragItem> {
    match target {
        Target::Task(i) => Some(DragItem::Task(task_at(board, *i))),
        Target::Column(i) => Some(DragItem::Column(column_at(board, *i))),
        Target::Nothing => None,
    }
}

fn ids(board: &Board) -> (Vec<String>, Vec<String>) {
    (
        board.columns.iter().map(|c| c.id.to_string()).collect(),
        board.tasks.iter().map(|t| t.id.to_string()).collect(),
    )
}

fn run(board: &mut KanbanBoard, step: &Step) -> Result<(), TestCaseError> {
    match step {
        Step::AddColumn => {
            board.add_column();
        }
        Step::AddTask(i) => {
            let column = column_at(board, *i);
            let before = board.board().clone();
            if board.add_task(&column).is_none() {
                prop_assert_eq!(board.board(), &before);
            }
        }
        Step::RemoveColumn(i) => {
            let column = column_at(board, *i);
            let before = board.board().clone();
            if board.remove_column(&column) {
                prop_assert_eq!(board.store().task_count(&column), 0);
                prop_assert!(board.board().find_column(&column).is_none());
            } else {
                prop_assert_eq!(board.board(), &before);
            }
        }
        Step::RemoveTask(i) => {
            let task = task_at(board, *i);
            let before = board.board().clone();
            if !board.remove_task(&task) {
                prop_assert_eq!(board.board(), &before);
            }
        }
        Step::RenameColumn(i, title) => {
            let column = column_at(board, *i);
            let before = ids(board.board());
            board.rename_column(&column, title.clone());
            prop_assert_eq!(ids(board.board()), before);
        }
        Step::EditTask(i, content) => {
            let task = task_at(board, *i);
            let before = ids(board.board());
            board.edit_task(&task, content.clone());
            prop_assert_eq!(ids(board.board()), before);
        }
        Step::DragTask { task, path } => {
            let active = DragItem::Task(task_at(board, *task));
            board.on_drag_start(active.clone());

            let mut last = None;
            for target in path {
                let over = resolve_target(board, target);
                board.on_drag_over(&active, over.clone());

                // Repeating the same hover is a fixed point
                let settled = board.board().clone();
                prop_assert!(!board.on_drag_over(&active, over.clone()));
                prop_assert_eq!(board.board(), &settled);

                prop_assert_eq!(board.board().columns.len(), settled.columns.len());
                last = over;
            }

            let before_drop = board.board().clone();
            board.on_drag_end(&active, last.as_ref());
            prop_assert_eq!(board.board(), &before_drop);
            prop_assert!(!board.session().is_active());
        }
        Step::DragColumn { column, drop } => {
            let active = DragItem::Column(column_at(board, *column));
            let over = drop.map(|i| DragItem::Column(column_at(board, i)));
            let tasks_before = board.board().tasks.clone();
            let mut columns_before = ids(board.board()).0;

            board.on_drag_start(active.clone());
            board.on_drag_end(&active, over.as_ref());

            prop_assert_eq!(&board.board().tasks, &tasks_before);
            let mut columns_after = ids(board.board()).0;
            columns_before.sort();
            columns_after.sort();
            prop_assert_eq!(columns_after, columns_before);
            prop_assert!(!board.session().is_active());
        }
    }
    Ok(())
}

proptest! {
    /// Property: every reachable board keeps referential integrity, and each
    /// step honors its own contract
    #[test]
    fn prop_random_sessions_keep_board_consistent(
        steps in prop::collection::vec(step(), 0..40)
    ) {
        let mut board = KanbanBoard::with_store(BoardStore::with_ids(SequentialIds::new()));
        for step in &steps {
            run(&mut board, step)?;
            prop_assert!(board.board().is_consistent(), "dangling task after {:?}", step);
        }
    }

    /// Property: the pure engine ignores self-hover for any item
    #[test]
    fn prop_self_hover_is_noop(
        steps in prop::collection::vec(step(), 0..20),
        pick in 0..12usize,
        as_column in any::<bool>(),
    ) {
        let mut board = KanbanBoard::with_store(BoardStore::with_ids(SequentialIds::new()));
        for step in &steps {
            run(&mut board, step)?;
        }

        let item = if as_column {
            DragItem::Column(column_at(&board, pick % 6))
        } else {
            DragItem::Task(task_at(&board, pick))
        };
        let snapshot = board.board().clone();
        prop_assert_eq!(reconcile::reconcile_over(snapshot.clone(), &item, &item), snapshot.clone());
        prop_assert_eq!(reconcile::reconcile_end(snapshot.clone(), &item, Some(&item)), snapshot);
    }
}

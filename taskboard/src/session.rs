//! Tracks the single item being dragged.

use crate::types::DragItem;
use tracing::{trace, warn};

/// The drag in progress, if any.
///
/// Besides the active item the session remembers the last hover target it
/// was told about. Repeated drag-over events against an unchanged target are
/// skipped by comparing against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<DragItem>,
    last_over: Option<DragItem>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the active item, replacing any drag that was never ended
    pub fn begin(&mut self, item: DragItem) {
        if let Some(previous) = &self.active {
            warn!(%previous, next = %item, "drag started before previous drag ended");
        }
        trace!(%item, "drag begin");
        self.active = Some(item);
        self.last_over = None;
    }

    /// Clear the session unconditionally, returning what was active
    pub fn end(&mut self) -> Option<DragItem> {
        self.last_over = None;
        let ended = self.active.take();
        if let Some(item) = &ended {
            trace!(%item, "drag end");
        }
        ended
    }

    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `item` is the one being dragged
    pub fn is_dragging(&self, item: &DragItem) -> bool {
        self.active.as_ref() == Some(item)
    }

    pub fn last_over(&self) -> Option<&DragItem> {
        self.last_over.as_ref()
    }

    /// Record the current hover target.
    ///
    /// Returns `true` when it differs from the previous one.
    pub fn hover(&mut self, over: Option<DragItem>) -> bool {
        if self.last_over == over {
            return false;
        }
        self.last_over = over;
        true
    }
}

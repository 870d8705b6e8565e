//! Helpers for logging board state.

use serde::Serialize;
use std::fmt::{self, Debug};

/// Renders a value as YAML inside tracing statements.
///
/// ```
/// use taskboard::{Board, Pretty};
///
/// let board = Board::new();
/// tracing::debug!("board: {}", Pretty(&board));
/// ```
///
/// Output starts on a new line. `Debug` is the fallback if serialization
/// fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//! Identifier newtypes and the sources that mint them.

use crate::types::DragKind;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a column on the board
    ColumnId
);

define_id!(
    /// Identifier of a task on the board
    TaskId
);

/// Supplies fresh, unique, opaque identifiers.
///
/// The kind of item being created is passed in so that implementations can
/// keep separate namespaces; ULIDs ignore it.
pub trait IdSource: Send {
    fn next_id(&mut self, kind: DragKind) -> String;
}

/// Monotonic ULIDs, unique across the process.
pub struct UlidIds {
    generator: ulid::Generator,
}

impl UlidIds {
    pub fn new() -> Self {
        Self {
            generator: ulid::Generator::new(),
        }
    }
}

impl Default for UlidIds {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UlidIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UlidIds").finish_non_exhaustive()
    }
}

impl IdSource for UlidIds {
    fn next_id(&mut self, _kind: DragKind) -> String {
        // Overflow only happens after 2^80 ids within one millisecond.
        self.generator
            .generate()
            .unwrap_or_else(|_| ulid::Ulid::new())
            .to_string()
    }
}

/// Deterministic `col-N` / `task-N` identifiers.
///
/// Used by scripts and tests that need to refer to items before they exist.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    columns: u64,
    tasks: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, kind: DragKind) -> String {
        match kind {
            DragKind::Column => {
                self.columns += 1;
                format!("col-{}", self.columns)
            }
            DragKind::Task => {
                self.tasks += 1;
                format!("task-{}", self.tasks)
            }
        }
    }
}

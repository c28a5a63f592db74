//! Todo entity and its draft form.
//!
//! # Responsibility
//! - Define the stored todo record and the not-yet-persisted draft.
//! - Provide the two-phase mutation operations (`toggle`, `set_title`);
//!   persisting a mutation is always a separate, explicit step.
//!
//! # Invariants
//! - `id` is assigned by the persistence adapter on first save, never here.
//! - `created` is stamped exactly once, when the draft is constructed.
//! - `set_title` never stores a title that is blank after trimming.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a stored todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// A stored todo record.
///
/// Wire shape is `{id, title, completed, created}`; one record per todo in
/// the persistence adapter, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable identifier assigned by the persistence adapter.
    pub id: TodoId,
    /// Task text. Mutable, but never persisted blank.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation time in epoch milliseconds. Immutable after the draft.
    pub created: i64,
}

impl Todo {
    /// Flips the completion flag and returns the entity for chaining.
    ///
    /// Does not persist. The caller commits through the owning list so that
    /// batch operations can choose per-item persistence.
    pub fn toggle(&mut self) -> &mut Self {
        self.completed = !self.completed;
        self
    }

    /// Sets the title to `text` as given, unless `text` is blank after trim.
    ///
    /// Returns whether a change was applied. A whitespace-only `text` is a
    /// no-op, guarding against a blank title reaching storage from an edit
    /// commit.
    pub fn set_title(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.title = text.to_string();
        true
    }

    /// Returns the completion flag.
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// A todo that has not been saved yet and therefore has no identifier.
///
/// Constructing the draft is the moment the record is "first recognized as
/// new": `created` is stamped here and carried into the stored record
/// unchanged by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Task text. Callers pass it already trimmed and non-blank.
    pub title: String,
    /// Completion flag, `false` for fresh drafts.
    pub completed: bool,
    /// Creation time in epoch milliseconds.
    pub created: i64,
}

impl NewTodo {
    /// Creates a draft with `completed = false` and `created = now`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            created: now_epoch_ms(),
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

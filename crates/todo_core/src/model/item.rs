//! Todo item domain model.
//!
//! # Responsibility
//! - Define the single record stored by the list.
//! - Provide the completion transition.
//!
//! # Invariants
//! - `id` is generated once and never changes afterwards.
//! - `title` is trimmed on creation; empty titles are allowed.
//! - `is_done` only moves from `false` to `true`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// One todo entry.
///
/// Serialized with camelCase field names (`id`, `title`, `isDone`), which is
/// the persisted file shape. A missing `isDone` deserializes as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    id: ItemId,
    title: String,
    #[serde(default)]
    is_done: bool,
}

impl TodoItem {
    /// Creates a pending item with a generated ID.
    ///
    /// # Invariants
    /// - Surrounding whitespace is stripped from `title`.
    /// - `is_done` starts as `false`.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.as_ref().trim().to_string(),
            is_done: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Marks this item as done. Calling it again has no further effect.
    pub fn mark_done(&mut self) {
        self.is_done = true;
    }
}

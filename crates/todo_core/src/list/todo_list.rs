//! In-memory todo list.
//!
//! # Responsibility
//! - Exclusively own `TodoItem` records in insertion order.
//! - Mutate items in place by ID lookup.
//!
//! # Invariants
//! - Items are only created via `add` (or a file load) and only destroyed via
//!   `remove`.
//! - `count()` is always derived from the backing vector.

use crate::model::item::{ItemId, TodoItem};

/// Ordered, owning collection of todo items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    pub(crate) items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending item and returns it.
    ///
    /// # Contract
    /// - Title is trimmed per `TodoItem::new`.
    /// - The returned borrow points at the stored element, so
    ///   `list.add("x").mark_done()` updates the list.
    pub fn add(&mut self, title: impl AsRef<str>) -> &mut TodoItem {
        self.items.push(TodoItem::new(title));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Removes every item with `id`.
    ///
    /// Returns `false` when nothing matched; an absent ID is not an error.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Returns items whose title contains `needle`, ignoring case.
    ///
    /// Results follow insertion order and are computed fresh on each call.
    /// An empty `needle` matches every item.
    ///
    /// Both sides are folded with Unicode `to_lowercase`, so multi-char
    /// lowercase mappings (e.g. `'İ'` -> `"i\u{307}"`) follow Unicode rules
    /// rather than per-code-unit ordinal folding.
    pub fn find(&self, needle: &str) -> Vec<&TodoItem> {
        let needle = needle.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.title().to_lowercase().contains(needle.as_str()))
            .collect()
    }

    /// Marks the item with `id` as done.
    ///
    /// Returns `false` when no item has that ID.
    pub fn mark_done(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items[index].mark_done();
                true
            }
            None => false,
        }
    }

    /// Returns the first item with `id`, if any.
    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of items currently in the list.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Same as [`TodoList::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of all items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Domain model for todo entries.
//!
//! # Responsibility
//! - Define the canonical item record owned by `TodoList`.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Completion is one-directional: pending -> done.

pub mod item;

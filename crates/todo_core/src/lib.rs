//! Core domain logic for todo lists.
//! This crate owns item identity, list ordering and the JSON file format.

pub mod list;
pub mod logging;
pub mod model;
pub mod store;

pub use list::todo_list::TodoList;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, TodoItem};
pub use store::{StoreError, StoreResult};

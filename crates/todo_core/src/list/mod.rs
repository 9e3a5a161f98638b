//! Ordered item collection and its query operations.
//!
//! # Responsibility
//! - Own todo items and keep insertion order.
//! - Provide add/remove/search entry points for host applications.
//!
//! # See also
//! - `crate::store` for whole-list persistence.

pub mod todo_list;

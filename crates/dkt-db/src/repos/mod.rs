//! Repository modules implementing owner-scoped storage operations.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod tasks;

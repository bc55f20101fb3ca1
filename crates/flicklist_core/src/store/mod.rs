//! State ownership layer for the task collection.
//!
//! # Responsibility
//! - Provide the single mutation surface for canonical task state.
//! - Keep derived views (priority sort, pending count) read-only.
//!
//! # Invariants
//! - The presentation layer never mutates tasks directly; every write
//!   goes through `TaskStore` operations.

pub mod task_store;

//! Domain model for the single-screen task list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep value types free of platform and presentation concerns.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Theme values are immutable palettes selected by time bucket.

pub mod task;
pub mod theme;

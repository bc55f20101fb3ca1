//! Time-driven state for the list screen.
//!
//! # Responsibility
//! - House the wall-clock theme selection logic.
//!
//! # Invariants
//! - Clock state is owned by the screen session; no module-level
//!   timers or load-time side effects.

pub mod theme_clock;

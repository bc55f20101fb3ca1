//! Use-case orchestration for the list screen.
//!
//! # Responsibility
//! - Compose the state-owning subsystems behind one session facade.
//!
//! # Invariants
//! - Service APIs never bypass the store's mutation contracts.

pub mod screen_session;

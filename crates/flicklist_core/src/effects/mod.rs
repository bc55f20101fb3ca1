//! Cosmetic feedback subsystems.
//!
//! # Responsibility
//! - Own the transient particle-burst state and its animation math.
//! - Select haptic effect kinds for task interactions.
//!
//! # Invariants
//! - Effects never mutate task state; they only react to it.

pub mod haptics;
pub mod particles;

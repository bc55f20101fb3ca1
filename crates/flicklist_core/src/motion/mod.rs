//! Motion-sensor event handling.
//!
//! # Responsibility
//! - Interpret the accelerometer collaborator's sample stream.
//!
//! # Invariants
//! - Sensor availability is a capability, not a precondition; missing
//!   hardware degrades to a no-op.

pub mod shake;

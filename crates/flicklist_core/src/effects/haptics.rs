//! Haptic feedback effect selection.
//!
//! # Responsibility
//! - Declare the effect kinds the haptics collaborator understands.
//! - Decide which effect each task interaction fires.
//!
//! # Invariants
//! - Effects are fire-and-forget hints; the platform side may drop
//!   them (web has no haptics) without surfacing an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::store::task_store::ToggleOutcome;

/// Effect kind forwarded to the platform haptics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HapticEffect {
    Light,
    Medium,
    Success,
    Warning,
    Error,
}

impl HapticEffect {
    /// Stable string id used on the FFI wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => HAPTIC_LIGHT,
            Self::Medium => HAPTIC_MEDIUM,
            Self::Success => HAPTIC_SUCCESS,
            Self::Warning => HAPTIC_WARNING,
            Self::Error => HAPTIC_ERROR,
        }
    }

    /// Effect fired when a task is added successfully.
    pub fn for_add() -> Self {
        Self::Light
    }

    /// Effect fired when an add is rejected by validation.
    pub fn for_rejected_add() -> Self {
        Self::Warning
    }

    /// Effect fired for a completion toggle, keyed by its direction.
    pub fn for_toggle(outcome: ToggleOutcome) -> Self {
        match outcome {
            ToggleOutcome::Completed => Self::Success,
            ToggleOutcome::Reopened => Self::Light,
        }
    }

    /// Effect fired when a task is deleted.
    pub fn for_delete() -> Self {
        Self::Medium
    }
}

/// Wire string for the light effect.
pub const HAPTIC_LIGHT: &str = "light";
/// Wire string for the medium effect.
pub const HAPTIC_MEDIUM: &str = "medium";
/// Wire string for the success effect.
pub const HAPTIC_SUCCESS: &str = "success";
/// Wire string for the warning effect.
pub const HAPTIC_WARNING: &str = "warning";
/// Wire string for the error effect.
pub const HAPTIC_ERROR: &str = "error";

/// Parses one haptic effect from its wire string value.
pub fn parse_haptic_effect(value: &str) -> Result<HapticEffect, HapticEffectParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(HapticEffectParseError::Empty);
    }
    match normalized {
        HAPTIC_LIGHT => Ok(HapticEffect::Light),
        HAPTIC_MEDIUM => Ok(HapticEffect::Medium),
        HAPTIC_SUCCESS => Ok(HapticEffect::Success),
        HAPTIC_WARNING => Ok(HapticEffect::Warning),
        HAPTIC_ERROR => Ok(HapticEffect::Error),
        other => Err(HapticEffectParseError::Unsupported(other.to_string())),
    }
}

/// Error raised when a haptic wire string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticEffectParseError {
    Empty,
    Unsupported(String),
}

impl Display for HapticEffectParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "haptic effect cannot be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported haptic effect `{value}`; expected light|medium|success|warning|error"
            ),
        }
    }
}

impl Error for HapticEffectParseError {}

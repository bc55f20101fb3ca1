//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the list screen.
//! - Provide priority ranking for the derived sorted view.
//! - Validate user-entered titles before a task is created.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after whitespace trimming.
//! - `completed` starts `false` for every new task.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task held by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency level used by the derived priority-sorted view.
///
/// Ordered `urgent < high < normal < low`; the canonical list order is
/// never changed by this ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Urgent,
    High,
    Normal,
    Low,
}

impl TaskPriority {
    /// Pure sort key: `urgent=0, high=1, normal=2, low=3`.
    pub fn rank(self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Normal => 2,
            Self::Low => 3,
        }
    }

    /// Stable string id used on the FFI wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }

    /// Parses a priority from its wire string value.
    pub fn parse(value: &str) -> Result<Self, TaskPriorityParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            other => Err(TaskPriorityParseError::Unsupported(other.to_string())),
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Normal
    }
}

/// Error raised when a priority wire string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPriorityParseError {
    Unsupported(String),
}

impl Display for TaskPriorityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(
                f,
                "unsupported priority `{value}`; expected urgent|high|normal|low"
            ),
        }
    }
}

impl Error for TaskPriorityParseError {}

/// Validation failure for user-entered task fields.
///
/// Recovered locally: the caller surfaces a warning and no task is
/// created (store state is unchanged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title was empty after whitespace trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for one user-entered work item.
///
/// Owned exclusively by the task store; the presentation layer only
/// reads derived snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, assigned at creation, never reused.
    pub id: TaskId,
    /// Non-empty display title (whitespace-trimmed at creation).
    pub title: String,
    /// Free-form detail text; may be empty.
    pub description: String,
    /// Completion flag, flipped by the toggle operation.
    pub completed: bool,
    /// Current urgency level; mutable after creation.
    pub priority: TaskPriority,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Contract
    /// - Trims `title`; rejects it when empty after trimming.
    /// - `completed` starts `false`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Result<Self, TaskValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description: description.into(),
            completed: false,
            priority,
        })
    }
}

//! In-memory task store.
//!
//! # Responsibility
//! - Own the canonical ordered task collection for the screen lifetime.
//! - Provide every mutation entry point (add, toggle, delete,
//!   reprioritize, shuffle) and the derived read views.
//!
//! # Invariants
//! - Task IDs are unique within the store at all times.
//! - Canonical order is insertion/shuffle order; the priority-sorted
//!   view never reorders the canonical collection.
//! - State is memory-only and reinitializes empty with every store.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::task::{Task, TaskId, TaskPriority, TaskValidationError};

/// Direction of one completion toggle, decided from the snapshot taken
/// before the mutation was applied.
///
/// Callers use `Completed` to trigger the celebratory burst; flipping a
/// task back to pending carries no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task went incomplete -> complete.
    Completed,
    /// The task went complete -> incomplete.
    Reopened,
}

/// Canonical owner of the screen's task collection.
///
/// Missing IDs are treated as stale references and ignored silently;
/// IDs are generated internally, so a miss is never a user error.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store. Nothing is restored from disk; the
    /// collection always starts empty on screen mount.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Adds a task and prepends it to the canonical order
    /// (most-recent-first).
    ///
    /// # Contract
    /// - Rejects titles that are empty after trimming; the store is
    ///   unchanged and the caller surfaces a user-facing warning.
    /// - Returns the generated stable ID on success.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Result<TaskId, TaskValidationError> {
        let task = Task::new(title, description, priority)?;
        let id = task.id;
        self.tasks.insert(0, task);
        info!(
            "event=task_added module=store status=ok id={} priority={} count={}",
            id,
            priority.as_str(),
            self.tasks.len()
        );
        Ok(id)
    }

    /// Flips the completion flag of one task.
    ///
    /// # Contract
    /// - Returns `None` when the ID is unknown (silent no-op).
    /// - The outcome reflects the completed flag read *before* this
    ///   mutation, so effect decisions cannot race the state update.
    pub fn toggle_completion(&mut self, id: TaskId) -> Option<ToggleOutcome> {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task,
            None => {
                debug!("event=task_toggle module=store status=not_found id={id}");
                return None;
            }
        };
        let was_completed = task.completed;
        task.completed = !was_completed;
        let outcome = if was_completed {
            ToggleOutcome::Reopened
        } else {
            ToggleOutcome::Completed
        };
        info!(
            "event=task_toggle module=store status=ok id={} outcome={:?}",
            id, outcome
        );
        Some(outcome)
    }

    /// Removes a task from the collection.
    ///
    /// Returns `false` (no-op) when the ID is unknown; deleting twice
    /// leaves the collection unchanged the second time.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(
                "event=task_deleted module=store status=ok id={} count={}",
                id,
                self.tasks.len()
            );
        } else {
            debug!("event=task_deleted module=store status=not_found id={id}");
        }
        removed
    }

    /// Overwrites the priority of one task; no-op when the ID is unknown.
    pub fn set_priority(&mut self, id: TaskId, priority: TaskPriority) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.priority = priority;
                info!(
                    "event=task_priority module=store status=ok id={} priority={}",
                    id,
                    priority.as_str()
                );
                true
            }
            None => {
                debug!("event=task_priority module=store status=not_found id={id}");
                false
            }
        }
    }

    /// Re-orders the canonical collection into a uniformly random
    /// permutation (Fisher-Yates via `SliceRandom::shuffle`).
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.tasks.shuffle(rng);
        info!(
            "event=tasks_shuffled module=store status=ok count={}",
            self.tasks.len()
        );
    }

    /// Derived view, stable-sorted by ascending priority rank.
    ///
    /// Equal-priority tasks keep their canonical relative order; the
    /// canonical collection itself is untouched.
    pub fn sorted_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|t| t.priority.rank());
        view
    }

    /// Count of tasks with `completed == false`.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Canonical-order read access for the presentation layer.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by stable ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

//! Screen-session use-case service.
//!
//! # Responsibility
//! - Own all process-wide state for one mounted list screen: task
//!   store, particle engine, shake detector, theme clock, RNG.
//! - Wire the cross-component contracts (completion -> burst, shake ->
//!   shuffle, interaction -> haptic hint).
//!
//! # Invariants
//! - State is created on screen mount and discarded on unmount; there
//!   are no module-level timers or load-time side effects.
//! - Mutations apply in the order gestures are dispatched; the caller
//!   serializes access (single-threaded UI event loop).
//! - The completion effect decision uses the task snapshot taken
//!   before the toggle mutation, never after.

use chrono::{DateTime, Local};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::theme_clock::ThemeClock;
use crate::effects::haptics::HapticEffect;
use crate::effects::particles::{BurstToken, ParticleEngine, ParticleFrame, Point};
use crate::model::task::{TaskId, TaskPriority, TaskValidationError};
use crate::model::theme::Theme;
use crate::motion::shake::{AccelSample, ShakeDetector};
use crate::store::task_store::{TaskStore, ToggleOutcome};

/// Result of one completion toggle, including the effects it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResponse {
    /// Direction of the flip, decided pre-mutation.
    pub outcome: ToggleOutcome,
    /// Token of the celebratory burst; set only on incomplete -> complete.
    pub burst: Option<BurstToken>,
    /// Haptic hint for the platform collaborator.
    pub haptic: HapticEffect,
}

/// All state for one mounted list screen.
pub struct ScreenSession {
    store: TaskStore,
    engine: ParticleEngine,
    detector: ShakeDetector,
    theme: ThemeClock,
    motion_available: bool,
    rng: StdRng,
}

impl ScreenSession {
    /// Creates a fresh session at screen mount.
    ///
    /// # Contract
    /// - The task collection always starts empty (memory-only state,
    ///   no cross-session durability).
    /// - `motion_available` reflects the sensor capability check;
    ///   sample delivery degrades to a no-op when it is `false`.
    pub fn new(now: DateTime<Local>, motion_available: bool) -> Self {
        Self::with_parts(now, motion_available, ParticleEngine::new(), StdRng::from_entropy())
    }

    /// Creates a session with deterministic randomness for tests.
    pub fn with_seed(seed: u64, now: DateTime<Local>, motion_available: bool) -> Self {
        Self::with_parts(
            now,
            motion_available,
            ParticleEngine::with_seed(seed),
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_parts(
        now: DateTime<Local>,
        motion_available: bool,
        engine: ParticleEngine,
        rng: StdRng,
    ) -> Self {
        info!(
            "event=screen_mounted module=session status=ok motion_available={motion_available}"
        );
        Self {
            store: TaskStore::new(),
            engine,
            detector: ShakeDetector::new(),
            theme: ThemeClock::new(now),
            motion_available,
            rng,
        }
    }

    // --- Task operations ---

    /// Adds a task from the entry form.
    ///
    /// Validation failures leave the store unchanged; the caller
    /// surfaces the warning (`HapticEffect::for_rejected_add`).
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Result<TaskId, TaskValidationError> {
        self.store.add(title, description, priority)
    }

    /// Toggles one task's completion flag.
    ///
    /// # Contract
    /// - Returns `None` when the ID is unknown (silent no-op).
    /// - Spawns the celebratory burst at `tap` only when the
    ///   pre-mutation snapshot says the task was incomplete.
    pub fn toggle_task(&mut self, id: TaskId, tap: Point, now_ms: i64) -> Option<ToggleResponse> {
        let outcome = self.store.toggle_completion(id)?;
        let burst = match outcome {
            ToggleOutcome::Completed => Some(self.engine.spawn_default(tap, now_ms)),
            ToggleOutcome::Reopened => None,
        };
        Some(ToggleResponse {
            outcome,
            burst,
            haptic: HapticEffect::for_toggle(outcome),
        })
    }

    /// Deletes one task. The confirmation dialog is a presentation
    /// collaborator; this is called only after an affirmative answer.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.delete(id)
    }

    /// Overwrites one task's priority; no-op when the ID is unknown.
    pub fn set_priority(&mut self, id: TaskId, priority: TaskPriority) -> bool {
        self.store.set_priority(id, priority)
    }

    /// Shuffles the canonical order into a uniform random permutation.
    pub fn shuffle_tasks(&mut self) {
        self.store.shuffle(&mut self.rng);
    }

    /// Read access to the task collection and its derived views.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    // --- Motion ---

    /// Feeds one accelerometer sample through the shake detector.
    ///
    /// Returns `true` when a debounced shake fired and the tasks were
    /// shuffled. A no-op when the platform reported no motion sensor.
    pub fn on_accel_sample(&mut self, sample: &AccelSample) -> bool {
        if !self.motion_available {
            return false;
        }
        if !self.detector.on_sample(sample) {
            return false;
        }
        self.shuffle_tasks();
        true
    }

    /// Whether the platform reported an accelerometer at mount.
    pub fn motion_available(&self) -> bool {
        self.motion_available
    }

    // --- Theme ---

    /// Recomputes the theme for `now`; idempotent within an hour bucket.
    pub fn refresh_theme(&mut self, now: DateTime<Local>) -> bool {
        self.theme.refresh(now)
    }

    /// The single current theme.
    pub fn active_theme(&self) -> &Theme {
        self.theme.active()
    }

    // --- Particles ---

    /// Interpolated render frames for the active burst.
    pub fn particle_frame(&self, now_ms: i64) -> Vec<ParticleFrame> {
        self.engine.frame(now_ms)
    }

    /// Drops the burst identified by `token` if it is still current.
    pub fn clear_burst(&mut self, token: BurstToken) -> bool {
        self.engine.clear(token)
    }

    /// Read access to the particle engine (render-set inspection).
    pub fn particles(&self) -> &ParticleEngine {
        &self.engine
    }
}

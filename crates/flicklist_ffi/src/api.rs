//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the process-wide screen session with an explicit
//!   mount/unmount lifecycle.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Screen state reinitializes empty on every mount; nothing is
//!   persisted across sessions.
//! - Unknown task IDs produce `ok=false` envelopes, never errors.

use flicklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AccelSample, HapticEffect, ParticleFrame, Point, ScreenSession, TaskPriority, Theme,
    THEME_REFRESH_INTERVAL_MS,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<Option<ScreenSession>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

// --- Screen lifecycle ---

/// Mounts the task screen, replacing any previous session with a fresh
/// empty one.
///
/// # FFI contract
/// - Sync call; idempotent (a second mount starts over from empty).
/// - `motion_available` is the platform's accelerometer capability
///   check; `false` turns sensor sample delivery into a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_mount(motion_available: bool) {
    let slot = session_slot();
    let mut guard = lock_session(slot);
    let replaced = guard.is_some();
    *guard = Some(ScreenSession::new(chrono_now(), motion_available));
    log::info!("event=screen_mount module=ffi status=ok replaced={replaced}");
}

/// Unmounts the task screen and discards all in-memory state.
///
/// # FFI contract
/// - Sync call; idempotent (unmounting twice is a no-op).
/// - The caller must also cancel its theme timer and sensor
///   subscription; nothing is retained on the Rust side.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_unmount() {
    let slot = session_slot();
    let mut guard = lock_session(slot);
    let was_mounted = guard.take().is_some();
    log::info!("event=screen_unmount module=ffi status=ok was_mounted={was_mounted}");
}

// --- Task DTOs ---

/// One task row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Priority wire value (`urgent|high|normal|low`).
    pub priority: String,
}

/// Generic action response envelope for task command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation changed state.
    pub ok: bool,
    /// Optional affected task ID.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Haptic effect hint (`light|medium|success|warning|error`).
    pub haptic: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: String, haptic: HapticEffect) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
            haptic: haptic.as_str().to_owned(),
        }
    }

    fn failure(message: impl Into<String>, haptic: HapticEffect) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
            haptic: haptic.as_str().to_owned(),
        }
    }
}

/// Response envelope for the completion toggle flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskToggleResponse {
    /// Whether a task was found and toggled.
    pub ok: bool,
    /// Completion flag after the toggle.
    pub now_completed: bool,
    /// Celebration burst token; set only on incomplete -> complete.
    /// The caller schedules `particles_clear(burst_token)` after the
    /// burst duration.
    pub burst_token: Option<u64>,
    /// Haptic effect hint.
    pub haptic: String,
    pub message: String,
}

// --- Task operations ---

/// Adds a task from the entry form.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Empty (post-trim) titles are rejected with `ok=false` and a
///   warning haptic; store state is unchanged.
/// - Unknown priority strings are rejected the same way.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String, description: String, priority: String) -> TaskActionResponse {
    let priority = match TaskPriority::parse(&priority) {
        Ok(priority) => priority,
        Err(err) => {
            return TaskActionResponse::failure(err.to_string(), HapticEffect::for_rejected_add())
        }
    };
    match with_session(|session| session.add_task(title.clone(), description.clone(), priority)) {
        Some(Ok(task_id)) => TaskActionResponse::success(
            "Task added.",
            task_id.to_string(),
            HapticEffect::for_add(),
        ),
        Some(Err(err)) => {
            TaskActionResponse::failure(err.to_string(), HapticEffect::for_rejected_add())
        }
        None => not_mounted_response(),
    }
}

/// Toggles one task's completion flag.
///
/// # FFI contract
/// - Sync call; never panics.
/// - `tap_x`/`tap_y` locate the gesture in screen coordinates; they
///   seed the celebration burst origin on incomplete -> complete.
/// - Unknown or malformed IDs return `ok=false` (stale reference, not
///   a user error).
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(task_id: String, tap_x: f64, tap_y: f64, now_ms: i64) -> TaskToggleResponse {
    let id = match parse_task_id(&task_id) {
        Some(id) => id,
        None => return toggle_miss_response(),
    };
    let tap = Point::new(tap_x, tap_y);
    let result = with_session(|session| {
        session
            .toggle_task(id, tap, now_ms)
            .map(|response| (response, session.store().get(id).map(|t| t.completed)))
    });
    match result.flatten() {
        Some((response, completed)) => TaskToggleResponse {
            ok: true,
            now_completed: completed.unwrap_or(false),
            burst_token: response.burst,
            haptic: response.haptic.as_str().to_owned(),
            message: "Task toggled.".to_owned(),
        },
        None => toggle_miss_response(),
    }
}

/// Deletes one task. Call only after the confirmation dialog
/// collaborator answered yes.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Deleting an unknown ID is a no-op reported as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> TaskActionResponse {
    let id = match parse_task_id(&task_id) {
        Some(id) => id,
        None => return TaskActionResponse::failure("Task not found.", HapticEffect::Light),
    };
    match with_session(|session| session.delete_task(id)) {
        Some(true) => {
            TaskActionResponse::success("Task deleted.", id.to_string(), HapticEffect::for_delete())
        }
        Some(false) => TaskActionResponse::failure("Task not found.", HapticEffect::Light),
        None => not_mounted_response(),
    }
}

/// Overwrites one task's priority.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Unknown IDs are silent no-ops reported as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_priority(task_id: String, priority: String) -> TaskActionResponse {
    let id = match parse_task_id(&task_id) {
        Some(id) => id,
        None => return TaskActionResponse::failure("Task not found.", HapticEffect::Light),
    };
    let priority = match TaskPriority::parse(&priority) {
        Ok(priority) => priority,
        Err(err) => return TaskActionResponse::failure(err.to_string(), HapticEffect::Warning),
    };
    match with_session(|session| session.set_priority(id, priority)) {
        Some(true) => {
            TaskActionResponse::success("Priority updated.", id.to_string(), HapticEffect::Light)
        }
        Some(false) => TaskActionResponse::failure("Task not found.", HapticEffect::Light),
        None => not_mounted_response(),
    }
}

fn to_task_item(task: &flicklist_core::Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
        priority: task.priority.as_str().to_owned(),
    }
}

/// Shuffles the canonical task order (the shake gesture's effect,
/// also exposed for a toolbar action).
///
/// # FFI contract
/// - Sync call; never panics. Returns `false` when no screen is
///   mounted.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_shuffle() -> bool {
    with_session(|session| session.shuffle_tasks()).is_some()
}

/// Tasks in canonical (insertion/shuffle) order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_canonical() -> Vec<TaskItem> {
    with_session(|session| session.store().tasks().iter().map(to_task_item).collect())
        .unwrap_or_default()
}

/// Derived view stable-sorted by ascending priority rank.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_sorted() -> Vec<TaskItem> {
    with_session(|session| {
        session
            .store()
            .sorted_view()
            .into_iter()
            .map(to_task_item)
            .collect()
    })
    .unwrap_or_default()
}

/// Count of tasks not yet completed.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_pending_count() -> u32 {
    with_session(|session| session.store().pending_count() as u32).unwrap_or(0)
}

// --- Motion ---

/// Feeds one accelerometer sample from the sensor collaborator.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Returns `true` when a debounced shake fired and the tasks were
///   shuffled (at most once per cooldown window).
/// - A no-op (`false`) when unmounted or when the platform reported no
///   motion sensor at mount.
#[flutter_rust_bridge::frb(sync)]
pub fn motion_sample(x: f64, y: f64, z: f64, timestamp_ms: i64) -> bool {
    let sample = AccelSample {
        x,
        y,
        z,
        timestamp_ms,
    };
    with_session(|session| session.on_accel_sample(&sample)).unwrap_or(false)
}

// --- Theme ---

/// Theme palette DTO for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    /// Human-readable bucket label (`Morning|Afternoon|Evening|Night`).
    pub name: String,
    /// Background gradient stops as `#RRGGBB`, top to bottom.
    pub colors: Vec<String>,
    pub accent: String,
    pub text: String,
}

fn to_theme_info(theme: &Theme) -> ThemeInfo {
    ThemeInfo {
        name: theme.name.to_owned(),
        colors: theme.colors.iter().map(|c| c.hex()).collect(),
        accent: theme.accent.hex(),
        text: theme.text.hex(),
    }
}

/// Recomputes and returns the current time-of-day theme.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Idempotent within an hour bucket; the caller invokes it once at
///   mount and from its single repeating refresh timer.
/// - Returns the night palette when no screen is mounted.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_refresh() -> ThemeInfo {
    let now = chrono_now();
    with_session(|session| {
        session.refresh_theme(now);
        to_theme_info(session.active_theme())
    })
    .unwrap_or_else(|| to_theme_info(&flicklist_core::ThemeKind::Night.theme()))
}

/// Refresh cadence the presentation timer should use, in milliseconds.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_refresh_interval_ms() -> u64 {
    THEME_REFRESH_INTERVAL_MS
}

// --- Particles ---

/// Interpolated particle snapshot for one render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleFrameItem {
    /// Particle ID, unique within its burst.
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Fades linearly 1 -> 0 across the burst duration.
    pub opacity: f64,
    /// Particle color as `#RRGGBB`.
    pub color: String,
}

fn to_particle_frame_item(frame: &ParticleFrame) -> ParticleFrameItem {
    ParticleFrameItem {
        id: frame.id,
        x: frame.x,
        y: frame.y,
        opacity: frame.opacity,
        color: frame.color.hex(),
    }
}

/// Render frames for the active celebration burst at `now_ms`.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Empty once the burst duration has elapsed or when nothing is
///   active.
#[flutter_rust_bridge::frb(sync)]
pub fn particles_frame(now_ms: i64) -> Vec<ParticleFrameItem> {
    with_session(|session| {
        session
            .particle_frame(now_ms)
            .iter()
            .map(to_particle_frame_item)
            .collect()
    })
    .unwrap_or_default()
}

/// Clears the burst identified by `burst_token`.
///
/// # FFI contract
/// - Sync call; never panics.
/// - A stale token (its burst was superseded by a newer one) is a
///   harmless no-op returning `false`.
#[flutter_rust_bridge::frb(sync)]
pub fn particles_clear(burst_token: u64) -> bool {
    with_session(|session| session.clear_burst(burst_token)).unwrap_or(false)
}

// --- Helpers ---

fn session_slot() -> &'static Mutex<Option<ScreenSession>> {
    SESSION.get_or_init(|| Mutex::new(None))
}

fn lock_session(
    slot: &'static Mutex<Option<ScreenSession>>,
) -> std::sync::MutexGuard<'static, Option<ScreenSession>> {
    // A poisoned lock only means a panic was already reported; the
    // session data itself stays usable.
    match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn with_session<T>(f: impl FnOnce(&mut ScreenSession) -> T) -> Option<T> {
    let mut guard = lock_session(session_slot());
    guard.as_mut().map(f)
}

fn parse_task_id(task_id: &str) -> Option<flicklist_core::TaskId> {
    Uuid::parse_str(task_id.trim()).ok()
}

fn chrono_now() -> chrono::DateTime<chrono::Local> {
    chrono::Local::now()
}

fn not_mounted_response() -> TaskActionResponse {
    TaskActionResponse::failure("Screen is not mounted.", HapticEffect::Error)
}

fn toggle_miss_response() -> TaskToggleResponse {
    TaskToggleResponse {
        ok: false,
        now_completed: false,
        burst_token: None,
        haptic: HapticEffect::Light.as_str().to_owned(),
        message: "Task not found.".to_owned(),
    }
}

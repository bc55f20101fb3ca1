//! Core domain logic for the flicklist task screen.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod effects;
pub mod logging;
pub mod model;
pub mod motion;
pub mod service;
pub mod store;

pub use clock::theme_clock::{ThemeClock, THEME_REFRESH_INTERVAL_MS};
pub use effects::haptics::{parse_haptic_effect, HapticEffect, HapticEffectParseError};
pub use effects::particles::{
    BurstToken, Particle, ParticleEngine, ParticleFrame, Point, BURST_DURATION_MS,
    BURST_PARTICLE_COUNT, PARTICLE_PALETTE, SPEED_BASE, SPEED_RANGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskPriority, TaskPriorityParseError, TaskValidationError};
pub use model::theme::{Color, Theme, ThemeKind};
pub use motion::shake::{
    AccelSample, ShakeDetector, ACCEL_SAMPLE_INTERVAL_MS, SHAKE_COOLDOWN_MS, SHAKE_THRESHOLD,
};
pub use service::screen_session::{ScreenSession, ToggleResponse};
pub use store::task_store::{TaskStore, ToggleOutcome};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

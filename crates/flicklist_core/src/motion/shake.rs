//! Accelerometer shake detection.
//!
//! # Responsibility
//! - Turn a stream of 3-axis acceleration samples into debounced
//!   shuffle triggers.
//!
//! # Invariants
//! - At most one trigger fires per cooldown window, regardless of the
//!   sample rate.
//! - The detector never schedules callbacks itself; re-arming is
//!   expressed as a timestamp deadline compared against incoming
//!   samples, so the state machine is testable without a UI host.
//! - On platforms without a motion sensor no samples arrive and the
//!   detector simply stays idle; absence is never an error.

use log::info;

/// Magnitude above which a sample counts as a shake, in sensor units.
pub const SHAKE_THRESHOLD: f64 = 2.5;

/// Quiet window after a trigger before the detector re-arms.
pub const SHAKE_COOLDOWN_MS: i64 = 1_000;

/// Nominal interval at which the sensor collaborator delivers samples.
pub const ACCEL_SAMPLE_INTERVAL_MS: i64 = 100;

/// One 3-axis accelerometer reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Sample delivery time in epoch milliseconds (arrival order).
    pub timestamp_ms: i64,
}

impl AccelSample {
    /// Euclidean magnitude of the acceleration vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Two-state debounce machine: armed or cooling down.
///
/// Starts armed; a triggering sample disarms it until
/// `timestamp + SHAKE_COOLDOWN_MS`.
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    /// Samples at or after this instant may trigger again.
    rearm_at_ms: i64,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self {
            rearm_at_ms: i64::MIN,
        }
    }

    /// Whether a sample at `now_ms` would be eligible to trigger.
    pub fn is_armed(&self, now_ms: i64) -> bool {
        now_ms >= self.rearm_at_ms
    }

    /// Consumes one sample; returns `true` when a shuffle trigger fires.
    ///
    /// # Contract
    /// - Fires only when the magnitude exceeds `SHAKE_THRESHOLD` and
    ///   the detector is armed at the sample's timestamp.
    /// - A firing sample starts the cooldown window; all samples inside
    ///   it are absorbed without effect.
    pub fn on_sample(&mut self, sample: &AccelSample) -> bool {
        let magnitude = sample.magnitude();
        if magnitude <= SHAKE_THRESHOLD || !self.is_armed(sample.timestamp_ms) {
            return false;
        }
        self.rearm_at_ms = sample.timestamp_ms + SHAKE_COOLDOWN_MS;
        info!(
            "event=shake_detected module=motion status=ok magnitude={magnitude:.3} rearm_at={}",
            self.rearm_at_ms
        );
        true
    }
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new()
    }
}

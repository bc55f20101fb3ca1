//! Wall-clock driven theme selection.
//!
//! # Responsibility
//! - Derive the current theme from the local hour of day.
//! - Keep refresh idempotent so a repeating timer can call it blindly.
//!
//! # Invariants
//! - Exactly one current theme exists per clock instance.
//! - Refreshing within the same hour bucket yields an identical theme
//!   value and reports no change.
//! - The presentation layer hosts exactly one repeating refresh timer
//!   at `THEME_REFRESH_INTERVAL_MS` and cancels it on screen unmount.

use chrono::{DateTime, Local, Timelike};
use log::info;

use crate::model::theme::{Theme, ThemeKind};

/// Refresh cadence for the presentation-layer timer, in milliseconds.
pub const THEME_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Holder of the single current theme, recomputed wholesale on refresh.
#[derive(Debug, Clone)]
pub struct ThemeClock {
    kind: ThemeKind,
    active: Theme,
}

impl ThemeClock {
    /// Creates a clock with the theme for the given instant (the
    /// startup evaluation the screen performs on mount).
    pub fn new(now: DateTime<Local>) -> Self {
        let kind = ThemeKind::for_hour(now.hour());
        info!(
            "event=theme_init module=clock status=ok bucket={:?} hour={}",
            kind,
            now.hour()
        );
        Self {
            kind,
            active: kind.theme(),
        }
    }

    /// Recomputes the theme for the given instant.
    ///
    /// Returns `true` when the time bucket changed and a new theme was
    /// installed; `false` when the recomputation was a no-op.
    pub fn refresh(&mut self, now: DateTime<Local>) -> bool {
        let kind = ThemeKind::for_hour(now.hour());
        if kind == self.kind {
            return false;
        }
        info!(
            "event=theme_changed module=clock status=ok from={:?} to={:?}",
            self.kind, kind
        );
        self.kind = kind;
        self.active = kind.theme();
        true
    }

    /// The current theme value.
    pub fn active(&self) -> &Theme {
        &self.active
    }

    /// The current time bucket.
    pub fn kind(&self) -> ThemeKind {
        self.kind
    }
}

impl Default for ThemeClock {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

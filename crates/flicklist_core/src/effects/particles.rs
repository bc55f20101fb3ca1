//! Completion-burst particle engine.
//!
//! # Responsibility
//! - Generate a fixed-size burst of independently animated points when
//!   a task transitions to complete.
//! - Interpolate particle positions and opacity for render frames.
//!
//! # Invariants
//! - At most one burst is active at a time; spawning replaces any
//!   in-flight burst outright.
//! - Every burst carries a monotonically increasing token; a scheduled
//!   clear only takes effect while its token is still current, so a
//!   superseded burst's clear is a harmless no-op.
//! - The whole burst is discarded as a unit when its duration elapses,
//!   never particle by particle.

use std::f64::consts::TAU;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::theme::Color;

/// Particles per burst.
pub const BURST_PARTICLE_COUNT: u32 = 15;

/// Lifetime of one burst, in milliseconds.
pub const BURST_DURATION_MS: i64 = 600;

/// Minimum travel distance from origin to destination.
pub const SPEED_BASE: f64 = 50.0;

/// Width of the uniform speed interval `[SPEED_BASE, SPEED_BASE + SPEED_RANGE)`.
pub const SPEED_RANGE: f64 = 50.0;

/// Fixed palette particles draw their color from, uniformly with
/// replacement.
pub const PARTICLE_PALETTE: [Color; 5] = [
    Color::new(0xFF, 0xD6, 0x4D),
    Color::new(0xFF, 0x6B, 0x6B),
    Color::new(0x4D, 0x96, 0xFF),
    Color::new(0x6B, 0xCB, 0x77),
    Color::new(0xC7, 0x80, 0xFA),
];

/// 2D point in the presentation layer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Generation counter identifying one spawned burst.
pub type BurstToken = u64;

/// One animated point within a burst.
///
/// Geometry is stored as polar offsets from the shared burst origin;
/// positions are interpolated per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Unique within the owning burst.
    pub id: u32,
    /// Launch angle in radians; slice `i` of `count` gets `TAU * i / count`.
    pub angle: f64,
    /// Travel distance, uniform in `[SPEED_BASE, SPEED_BASE + SPEED_RANGE)`.
    pub speed: f64,
    /// Drawn uniformly at random from `PARTICLE_PALETTE`.
    pub color: Color,
}

impl Particle {
    /// Final position once the animation completes.
    pub fn destination(&self, origin: Point) -> Point {
        Point::new(
            origin.x + self.angle.cos() * self.speed,
            origin.y + self.angle.sin() * self.speed,
        )
    }
}

/// Interpolated render snapshot of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Fades linearly 1 -> 0 across the burst duration.
    pub opacity: f64,
    pub color: Color,
}

#[derive(Debug, Clone)]
struct Burst {
    token: BurstToken,
    origin: Point,
    started_at_ms: i64,
    duration_ms: i64,
    particles: Vec<Particle>,
}

impl Burst {
    /// Animation progress in `[0, 1]`, clamped.
    fn progress(&self, now_ms: i64) -> f64 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.started_at_ms) as f64;
        (elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.started_at_ms + self.duration_ms
    }
}

/// Owner of the single transient burst rendered by the screen.
#[derive(Debug)]
pub struct ParticleEngine {
    active: Option<Burst>,
    next_token: BurstToken,
    rng: StdRng,
}

impl ParticleEngine {
    /// Creates an engine with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            active: None,
            next_token: 0,
            rng,
        }
    }

    /// Spawns a burst with the default count and duration.
    pub fn spawn_default(&mut self, origin: Point, now_ms: i64) -> BurstToken {
        self.spawn(origin, BURST_PARTICLE_COUNT, BURST_DURATION_MS, now_ms)
    }

    /// Spawns a burst of `count` particles around `origin`.
    ///
    /// # Contract
    /// - Partitions the full circle into `count` equal angular slices.
    /// - Speed is drawn independently per particle, uniform in
    ///   `[SPEED_BASE, SPEED_BASE + SPEED_RANGE)`.
    /// - Replaces any burst still in flight; the returned token
    ///   identifies the new burst for its scheduled clear.
    pub fn spawn(
        &mut self,
        origin: Point,
        count: u32,
        duration_ms: i64,
        now_ms: i64,
    ) -> BurstToken {
        self.next_token += 1;
        let token = self.next_token;

        let particles = (0..count)
            .map(|i| Particle {
                id: i,
                angle: TAU * f64::from(i) / f64::from(count.max(1)),
                speed: self.rng.gen_range(SPEED_BASE..SPEED_BASE + SPEED_RANGE),
                color: PARTICLE_PALETTE[self.rng.gen_range(0..PARTICLE_PALETTE.len())],
            })
            .collect();

        if self.active.is_some() {
            debug!("event=burst_superseded module=effects status=ok token={token}");
        }
        self.active = Some(Burst {
            token,
            origin,
            started_at_ms: now_ms,
            duration_ms,
            particles,
        });
        token
    }

    /// Clears the active burst, but only when `token` is still current.
    ///
    /// Returns `true` when the burst was dropped; a stale token (its
    /// burst was already superseded) leaves the engine untouched.
    pub fn clear(&mut self, token: BurstToken) -> bool {
        match &self.active {
            Some(burst) if burst.token == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Interpolated render frames for the active burst at `now_ms`.
    ///
    /// Positions move linearly from the origin toward each particle's
    /// destination and opacity fades 1 -> 0; the result is empty once
    /// the duration has elapsed or when no burst is active.
    pub fn frame(&self, now_ms: i64) -> Vec<ParticleFrame> {
        let burst = match &self.active {
            Some(burst) if !burst.is_expired(now_ms) => burst,
            _ => return Vec::new(),
        };
        let progress = burst.progress(now_ms);
        burst
            .particles
            .iter()
            .map(|p| {
                let dest = p.destination(burst.origin);
                ParticleFrame {
                    id: p.id,
                    x: burst.origin.x + (dest.x - burst.origin.x) * progress,
                    y: burst.origin.y + (dest.y - burst.origin.y) * progress,
                    opacity: 1.0 - progress,
                    color: p.color,
                }
            })
            .collect()
    }

    /// Token of the burst currently in flight, if any.
    pub fn active_token(&self) -> Option<BurstToken> {
        self.active.as_ref().map(|b| b.token)
    }

    /// Particle set of the active burst with its shared origin.
    pub fn active_particles(&self) -> Option<(Point, &[Particle])> {
        self.active
            .as_ref()
            .map(|b| (b.origin, b.particles.as_slice()))
    }
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::new()
    }
}

use std::f64::consts::TAU;

use flicklist_core::{
    ParticleEngine, Point, BURST_DURATION_MS, BURST_PARTICLE_COUNT, PARTICLE_PALETTE, SPEED_BASE,
    SPEED_RANGE,
};

const ORIGIN: Point = Point::new(120.0, 340.0);

#[test]
fn default_burst_has_fifteen_evenly_spaced_particles() {
    let mut engine = ParticleEngine::with_seed(1);
    engine.spawn_default(ORIGIN, 0);

    let (origin, particles) = engine.active_particles().expect("burst should be active");
    assert_eq!(origin, ORIGIN);
    assert_eq!(particles.len(), BURST_PARTICLE_COUNT as usize);

    let slice = TAU / f64::from(BURST_PARTICLE_COUNT);
    for (i, particle) in particles.iter().enumerate() {
        assert_eq!(particle.id, i as u32);
        let expected_angle = slice * i as f64;
        assert!(
            (particle.angle - expected_angle).abs() < 1e-12,
            "particle {i} angle {} should be {expected_angle}",
            particle.angle
        );
    }
}

#[test]
fn speeds_are_uniform_in_the_configured_interval() {
    let mut engine = ParticleEngine::with_seed(2);
    engine.spawn(ORIGIN, 200, BURST_DURATION_MS, 0);

    let (_, particles) = engine.active_particles().expect("burst should be active");
    for particle in particles {
        assert!(
            particle.speed >= SPEED_BASE && particle.speed < SPEED_BASE + SPEED_RANGE,
            "speed {} outside [{SPEED_BASE}, {})",
            particle.speed,
            SPEED_BASE + SPEED_RANGE
        );
    }
}

#[test]
fn colors_come_from_the_fixed_palette() {
    let mut engine = ParticleEngine::with_seed(3);
    engine.spawn(ORIGIN, 100, BURST_DURATION_MS, 0);

    let (_, particles) = engine.active_particles().expect("burst should be active");
    for particle in particles {
        assert!(
            PARTICLE_PALETTE.contains(&particle.color),
            "color {:?} not in the palette",
            particle.color
        );
    }
}

#[test]
fn seeded_engines_are_deterministic() {
    let mut a = ParticleEngine::with_seed(42);
    let mut b = ParticleEngine::with_seed(42);
    a.spawn_default(ORIGIN, 0);
    b.spawn_default(ORIGIN, 0);

    assert_eq!(
        a.active_particles().map(|(_, p)| p.to_vec()),
        b.active_particles().map(|(_, p)| p.to_vec()),
    );
}

#[test]
fn frames_interpolate_position_and_opacity_linearly() {
    let mut engine = ParticleEngine::with_seed(4);
    engine.spawn_default(ORIGIN, 1_000);
    let (_, particles) = engine.active_particles().expect("burst should be active");
    let destinations: Vec<Point> = particles.iter().map(|p| p.destination(ORIGIN)).collect();

    // At start: everything sits at the origin, fully opaque.
    for frame in engine.frame(1_000) {
        assert!((frame.x - ORIGIN.x).abs() < 1e-9);
        assert!((frame.y - ORIGIN.y).abs() < 1e-9);
        assert!((frame.opacity - 1.0).abs() < 1e-9);
    }

    // Halfway: midpoint between origin and destination, half opacity.
    let halfway = engine.frame(1_000 + BURST_DURATION_MS / 2);
    for frame in &halfway {
        let dest = destinations[frame.id as usize];
        let mid_x = (ORIGIN.x + dest.x) / 2.0;
        let mid_y = (ORIGIN.y + dest.y) / 2.0;
        assert!((frame.x - mid_x).abs() < 1e-9);
        assert!((frame.y - mid_y).abs() < 1e-9);
        assert!((frame.opacity - 0.5).abs() < 1e-9);
    }
}

#[test]
fn the_whole_burst_clears_as_a_unit_when_the_duration_elapses() {
    let mut engine = ParticleEngine::with_seed(5);
    engine.spawn_default(ORIGIN, 0);

    assert_eq!(engine.frame(BURST_DURATION_MS - 1).len(), 15);
    assert!(engine.frame(BURST_DURATION_MS).is_empty());
    assert!(engine.frame(BURST_DURATION_MS + 500).is_empty());
}

#[test]
fn clear_drops_the_current_burst() {
    let mut engine = ParticleEngine::with_seed(6);
    let token = engine.spawn_default(ORIGIN, 0);

    assert!(engine.clear(token));
    assert_eq!(engine.active_token(), None);
    assert!(engine.frame(1).is_empty());

    // Clearing again is a no-op.
    assert!(!engine.clear(token));
}

#[test]
fn a_new_burst_replaces_the_active_one_and_invalidates_its_token() {
    let mut engine = ParticleEngine::with_seed(7);
    let first = engine.spawn_default(ORIGIN, 0);

    // Second completion lands while the first burst is still in flight.
    let second = engine.spawn_default(Point::new(10.0, 20.0), 300);
    assert_ne!(first, second);
    assert_eq!(engine.active_token(), Some(second));

    // The first burst's scheduled clear fires against a stale token.
    assert!(!engine.clear(first));
    assert_eq!(engine.active_token(), Some(second));
    assert!(!engine.frame(400).is_empty());

    // The current token still clears normally.
    assert!(engine.clear(second));
    assert!(engine.frame(400).is_empty());
}

use flicklist_core::{
    AccelSample, ShakeDetector, ACCEL_SAMPLE_INTERVAL_MS, SHAKE_COOLDOWN_MS, SHAKE_THRESHOLD,
};

fn sample(magnitude_along_x: f64, timestamp_ms: i64) -> AccelSample {
    AccelSample {
        x: magnitude_along_x,
        y: 0.0,
        z: 0.0,
        timestamp_ms,
    }
}

#[test]
fn magnitude_is_the_euclidean_norm() {
    let reading = AccelSample {
        x: 0.6,
        y: 0.8,
        z: 0.0,
        timestamp_ms: 0,
    };
    assert!((reading.magnitude() - 1.0).abs() < 1e-12);

    let reading = AccelSample {
        x: 1.0,
        y: 2.0,
        z: 2.0,
        timestamp_ms: 0,
    };
    assert!((reading.magnitude() - 3.0).abs() < 1e-12);
}

#[test]
fn detector_starts_armed() {
    let detector = ShakeDetector::new();
    assert!(detector.is_armed(0));
}

#[test]
fn sub_threshold_samples_never_fire() {
    let mut detector = ShakeDetector::new();
    for i in 0..50 {
        assert!(!detector.on_sample(&sample(1.0, i * ACCEL_SAMPLE_INTERVAL_MS)));
    }
    assert!(detector.is_armed(50 * ACCEL_SAMPLE_INTERVAL_MS));
}

#[test]
fn magnitude_exactly_at_threshold_does_not_fire() {
    let mut detector = ShakeDetector::new();
    assert!(!detector.on_sample(&sample(SHAKE_THRESHOLD, 0)));
}

#[test]
fn a_burst_of_loud_samples_fires_exactly_once_per_cooldown_window() {
    let mut detector = ShakeDetector::new();

    // Ten consecutive above-threshold samples at the nominal 100ms rate,
    // all inside one 1000ms cooldown window.
    let mut triggers = 0;
    for i in 0..10 {
        if detector.on_sample(&sample(5.0, i * ACCEL_SAMPLE_INTERVAL_MS)) {
            triggers += 1;
        }
    }
    assert_eq!(triggers, 1);
}

#[test]
fn detector_rearms_after_the_cooldown_elapses() {
    let mut detector = ShakeDetector::new();

    assert!(detector.on_sample(&sample(5.0, 0)));
    assert!(!detector.is_armed(SHAKE_COOLDOWN_MS - 1));
    assert!(!detector.on_sample(&sample(5.0, SHAKE_COOLDOWN_MS - 1)));

    assert!(detector.is_armed(SHAKE_COOLDOWN_MS));
    assert!(detector.on_sample(&sample(5.0, SHAKE_COOLDOWN_MS)));
}

#[test]
fn quiet_samples_inside_the_cooldown_do_not_extend_it() {
    let mut detector = ShakeDetector::new();

    assert!(detector.on_sample(&sample(5.0, 0)));
    assert!(!detector.on_sample(&sample(1.0, 500)));
    assert!(!detector.on_sample(&sample(1.0, 900)));

    // The window still ends at the original deadline.
    assert!(detector.on_sample(&sample(5.0, SHAKE_COOLDOWN_MS)));
}

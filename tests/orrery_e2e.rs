//! End-to-end acceptance tests for the orbital simulation engine.
//!
//! Each test falsifies one externally observable property of the engine:
//! deterministic positions, playback gating, tolerant feed ingestion, and
//! registry integrity. All tests run headless; no renderer is involved.

use serde_json::json;

use orrery::prelude::*;

fn playing_engine() -> OrreryEngine {
    OrreryEngine::new(OrreryConfig::default()).expect("planet table is valid")
}

/// Position algorithm produces the documented ellipse coordinates.
///
/// Hypothesis to falsify: position deviates from `x = a(cos φ - e)`,
/// `z = a sin φ` for the stylized Mercury orbit.
#[test]
fn position_algorithm_reference_values() {
    let params = OrbitalParameters::new(6.0, 0.205, 0.04).expect("valid parameters");

    let at_zero = position_at(&params, 0.0);
    assert!((at_zero.x - 4.77).abs() < 0.005, "x = {}", at_zero.x);
    assert!(at_zero.z.abs() < 1e-9);

    let at_quarter = position_at(&params, std::f64::consts::FRAC_PI_2);
    assert!((at_quarter.x - (-1.23)).abs() < 0.005, "x = {}", at_quarter.x);
    assert!((at_quarter.z - 6.0).abs() < 1e-9);
}

/// Pause and play are idempotent and never reset accumulated phase.
///
/// Hypothesis to falsify: a redundant command perturbs playback state or
/// body phase.
#[test]
fn playback_commands_idempotent() {
    let mut engine = playing_engine();
    for _ in 0..10 {
        engine.tick();
    }
    let phase_before = engine.registry().get("Earth").expect("Earth exists").phase();

    engine.on_pause();
    engine.on_pause();
    assert_eq!(engine.clock().state(), PlaybackState::Paused);

    engine.on_play();
    engine.on_play();
    assert_eq!(engine.clock().state(), PlaybackState::Playing);

    let phase_after = engine.registry().get("Earth").expect("Earth exists").phase();
    assert!((phase_before - phase_after).abs() < f64::EPSILON);
}

/// While playing every tick advances each body by exactly its orbital
/// speed; while paused nothing moves.
///
/// Hypothesis to falsify: phase increments drift from the per-body speed,
/// or paused ticks leak movement.
#[test]
fn tick_monotonicity_and_freeze() {
    let mut engine = playing_engine();

    for tick in 1..=20 {
        engine.tick();
        for body in engine.registry().iter() {
            let expected = f64::from(tick) * body.orbital().orbital_speed();
            assert!(
                (body.phase() - expected).abs() < 1e-9,
                "{} drifted at tick {tick}",
                body.id
            );
        }
    }

    engine.on_pause();
    let snapshot: Vec<f64> = engine.registry().iter().map(|b| b.phase()).collect();
    for _ in 0..50 {
        engine.tick();
    }
    let frozen: Vec<f64> = engine.registry().iter().map(|b| b.phase()).collect();
    assert_eq!(snapshot, frozen);
}

/// A contentless record still becomes a simulated asteroid.
///
/// Hypothesis to falsify: missing fields reject the record instead of
/// degrading to the documented defaults.
#[test]
fn empty_record_degrades_gracefully() {
    let mut engine = playing_engine();
    engine.ingest_feed(&[json!({})]);
    engine.tick();

    assert_eq!(engine.registry().len(), 9);
    let asteroid = engine.registry().get("asteroid-0").expect("default id assigned");
    assert!((asteroid.orbital().semi_major_axis() - 50.0).abs() < f64::EPSILON);
    assert!((asteroid.orbital().eccentricity() - 0.5).abs() < f64::EPSILON);
    assert!((asteroid.orbital().orbital_speed() - 0.002).abs() < f64::EPSILON);
    assert!(!asteroid.is_hazardous);
}

/// Both hazard-flag encodings classify as hazardous.
///
/// Hypothesis to falsify: only one feed convention is recognized.
#[test]
fn hazard_flag_both_encodings() {
    let mut engine = playing_engine();
    engine.ingest_feed(&[
        json!({"id": "bool-flag", "is_potentially_hazardous_asteroid": true}),
        json!({"id": "char-flag", "pha": "Y"}),
        json!({"id": "benign", "pha": "N"}),
    ]);
    engine.tick();

    assert!(engine.registry().get("bool-flag").expect("ingested").is_hazardous);
    assert!(engine.registry().get("char-flag").expect("ingested").is_hazardous);
    assert!(!engine.registry().get("benign").expect("ingested").is_hazardous);
}

/// Registering a colliding planet id fails loudly and changes nothing.
///
/// Hypothesis to falsify: a duplicate id is silently ignored or grows the
/// registry.
#[test]
fn registry_uniqueness_enforced() {
    let mut registry = BodyRegistry::new();
    let first = CelestialBody::planet("Earth", Color::WHITE, 1.0, 15.0, 0.017, 0.02)
        .expect("valid planet");
    let second = CelestialBody::planet("Earth", Color::WHITE, 1.0, 16.0, 0.02, 0.02)
        .expect("valid planet");

    registry.add_planet(first).expect("first registration succeeds");
    let err = registry.add_planet(second).expect_err("duplicate must fail");
    assert!(matches!(err, OrreryError::DuplicateId { ref id } if id == "Earth"));
    assert_eq!(registry.len(), 1);
}

/// Full session: planets only, a late feed, then a hundred ticks.
///
/// Hypothesis to falsify: ingestion disturbs existing bodies, or Earth's
/// accumulated phase misses `100 * 0.02` after 100 playing ticks.
#[test]
fn full_session_with_late_feed() {
    let mut engine = playing_engine();
    assert_eq!(engine.registry().len(), 8);

    // Feed resolves at some arbitrary point relative to simulation start
    let sink = engine.feed_sink();
    sink.deliver(&[
        json!({"id": "2021-AB", "semi_major_axis": "2.1", "eccentricity": "0.3"}),
        json!({"id": "2021-CD", "a": 3.0, "e": 0.12, "pha": "N"}),
        json!({"id": "2021-EF", "pha": "Y"}),
    ]);

    for _ in 0..100 {
        engine.tick();
    }

    assert_eq!(engine.registry().len(), 11);

    let earth = engine.registry().get("Earth").expect("Earth exists");
    let expected = (100.0 * 0.02) % std::f64::consts::TAU;
    assert!(
        (earth.phase() % std::f64::consts::TAU - expected).abs() < 1e-9,
        "Earth phase = {}",
        earth.phase()
    );

    // Frames expose every body to the renderer, planets first
    let frame = engine.frame();
    assert_eq!(frame.len(), 11);
    assert_eq!(frame[0].display_name, "Mercury");
    assert_eq!(frame[10].display_name, "Asteroid (2021-EF)");
    assert!(frame[10].is_hazardous);
}

/// A failed fetch costs only the asteroid set.
///
/// Hypothesis to falsify: feed failure halts or corrupts planet playback.
#[test]
fn feed_failure_keeps_planets_running() {
    let mut engine = playing_engine();
    engine.feed_sink().fail("HTTP 503 from upstream");

    for _ in 0..10 {
        engine.tick();
    }

    assert_eq!(engine.registry().len(), 8);
    let earth = engine.registry().get("Earth").expect("Earth exists");
    assert!((earth.phase() - 0.2).abs() < 1e-9);
}

/// Engine teardown before the fetch resolves is a silent no-op.
///
/// Hypothesis to falsify: a late delivery faults against a disposed
/// registry.
#[test]
fn late_feed_after_teardown() {
    let sink = {
        let engine = playing_engine();
        engine.feed_sink()
    };
    assert!(!sink.is_connected());
    sink.deliver(&[json!({"id": "orphan"})]);
    sink.fail("also fine");
}

/// Forward command scales with its configured step count and leaves the
/// paused state untouched.
///
/// Hypothesis to falsify: fast-forward resumes playback or applies a
/// hard-coded step count.
#[test]
fn configured_fast_forward() {
    let config = OrreryConfig::builder()
        .start_paused(true)
        .fast_forward_steps(25)
        .build();
    let mut engine = OrreryEngine::new(config).expect("valid config");

    engine.on_forward();

    assert_eq!(engine.clock().state(), PlaybackState::Paused);
    let mercury = engine.registry().get("Mercury").expect("Mercury exists");
    assert!((mercury.phase() - 25.0 * 0.04).abs() < 1e-9);
}

// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);
    assert!(SPRING_REST_DELTA > 0.0);
    assert!(SPRING_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn integration_substep_is_stable_for_tuning() {
    // semi-implicit Euler needs omega * h well below 2
    let omega = (SPRING_STIFFNESS / SPRING_MASS).sqrt();
    assert!(omega * SPRING_SUBSTEP_SEC < 0.5);
    assert!(SPRING_SUBSTEP_SEC < SPRING_MAX_FRAME_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_consistent() {
    assert_eq!(PARTICLE_COUNT, 3);
    assert!(PARTICLE_IDLE_PERIOD_SEC > 0.0);
    assert!(PARTICLE_MAX_DELAY_SEC >= 0.0);
    assert_eq!(PARTICLE_OPACITY_KEYS[0], PARTICLE_OPACITY_KEYS[2]);
    assert_eq!(PARTICLE_SCALE_KEYS[0], PARTICLE_SCALE_KEYS[2]);
    assert!(PARTICLE_OPACITY_KEYS.iter().all(|o| (0.0..=1.0).contains(o)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_have_logical_relationships() {
    assert_eq!(OFFSET_LIMIT, 0.5);
    assert!(MAX_TILT_DEG > 0.0 && MAX_TILT_DEG < 90.0);
    assert!(GLOW_RADIUS_PX > 0.0);
    assert!(GLOW_FADE_PERCENT > 0.0 && GLOW_FADE_PERCENT <= 100.0);
    assert!(HERO_OPACITY_RANGE[1] < HERO_OPACITY_RANGE[0]);
    assert!(HERO_SCALE_RANGE[1] < HERO_SCALE_RANGE[0]);
    assert!(DEFAULT_SPOTLIGHT_COLOR.starts_with("rgba("));
}

// Host-side tests for the idle keyframe loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod idle {
        include!("../src/core/idle.rs");
    }
}

use crate::core::idle::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const PERIOD: Duration = Duration::from_secs(2);

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn ease_in_out_endpoints_and_midpoint() {
    assert!(close(ease_in_out(0.0), 0.0));
    assert!(close(ease_in_out(0.5), 0.5));
    assert!(close(ease_in_out(1.0), 1.0));
    assert!(ease_in_out(0.1) < 0.1);
    assert!(ease_in_out(0.9) > 0.9);
}

#[test]
fn keyframes_hit_each_value() {
    let k = Keyframes::new([0.0, 1.0, 0.0]);
    assert!(close(k.sample(0.0), 0.0));
    assert!(close(k.sample(0.25), 0.5));
    assert!(close(k.sample(0.5), 1.0));
    assert!(close(k.sample(1.0), 0.0));
    assert!(close(Keyframes::new([7.0]).sample(0.3), 7.0));
}

#[test]
fn clock_waits_for_delay_then_cycles() {
    let mut c = LoopClock::new(Duration::from_secs(2), Duration::from_millis(500));
    c.advance(Duration::from_millis(300));
    assert_eq!(c.phase(), None);
    assert_eq!(c.progress(), 0.0);

    c.advance(Duration::from_millis(1200));
    assert_eq!(c.phase(), Some(Duration::from_secs(1)));
    assert!(close(c.progress(), 0.5));

    c.advance(Duration::from_millis(1500));
    assert_eq!(c.phase(), Some(Duration::from_millis(500)));
}

#[test]
fn clock_runs_indefinitely() {
    let mut c = LoopClock::new(Duration::from_secs(2), Duration::ZERO);
    for _ in 0..100_000 {
        c.advance(Duration::from_millis(16));
    }
    let phase = c.phase().unwrap();
    assert!(phase < Duration::from_secs(2));
    // 1600 s is exactly 800 cycles
    assert_eq!(phase, Duration::ZERO);
}

#[test]
fn particle_rests_during_delay() {
    let mut p = ParticleIdle::with_period(PERIOD, Duration::from_secs(1));
    p.advance(Duration::from_millis(900));
    assert!(close(p.opacity(), 0.0));
    assert!(close(p.scale(), 0.5));
}

#[test]
fn particle_peaks_mid_cycle() {
    let mut p = ParticleIdle::with_period(PERIOD, Duration::from_millis(400));
    p.advance(Duration::from_millis(1400));
    assert!(close(p.opacity(), 1.0));
    assert!(close(p.scale(), 1.2));
    p.advance(Duration::from_millis(1000));
    assert!(close(p.opacity(), 0.0));
    assert!(close(p.scale(), 0.5));
}

#[test]
fn particles_are_independent() {
    let mut a = ParticleIdle::with_period(PERIOD, Duration::ZERO);
    let mut b = ParticleIdle::with_period(PERIOD, Duration::from_millis(500));
    a.advance(Duration::from_millis(500));
    b.advance(Duration::from_millis(500));
    assert!(close(a.opacity(), 0.5));
    assert!(close(b.opacity(), 0.0));
}

#[test]
fn random_delay_is_bounded_and_seedable() {
    let period = Duration::from_secs(2);
    let max = Duration::from_secs(2);
    let mut rng = StdRng::seed_from_u64(7);
    let first: Vec<Duration> = (0..16)
        .map(|_| ParticleIdle::random(&mut rng, period, max).clock.delay)
        .collect();
    assert!(first.iter().all(|d| *d < max));

    let mut rng = StdRng::seed_from_u64(7);
    let again: Vec<Duration> = (0..16)
        .map(|_| ParticleIdle::random(&mut rng, period, max).clock.delay)
        .collect();
    assert_eq!(first, again);

    let none = ParticleIdle::random(&mut rng, period, Duration::ZERO);
    assert_eq!(none.clock.delay, Duration::ZERO);
}

// Host-side tests for landing page content, hero parallax and ambient loops.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod idle {
        include!("../src/core/idle.rs");
    }
    pub mod landing {
        include!("../src/core/landing.rs");
    }
    pub mod mapper {
        include!("../src/core/mapper.rs");
    }
}

use crate::core::landing::*;
use std::collections::HashSet;
use std::time::Duration;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn stats_render_with_suffix() {
    let shown: Vec<String> = STATS.iter().map(Stat::display).collect();
    assert_eq!(shown, vec!["500+", "1200+", "850+", "94%"]);
    assert_eq!(STATS[3].label, "Match Accuracy");
}

#[test]
fn counters_stagger_their_start() {
    assert!(close(counter_delay(0).as_secs_f32(), 0.2));
    assert!(close(counter_delay(3).as_secs_f32(), 0.5));
}

#[test]
fn counter_counts_up_from_zero() {
    let duration = Duration::from_secs(2);
    let delay = Duration::from_millis(200);
    assert_eq!(counter_value(500, Duration::ZERO, duration, delay), 0);
    assert_eq!(counter_value(500, delay, duration, delay), 0);
    assert_eq!(counter_value(500, Duration::from_millis(1200), duration, delay), 250);
    assert_eq!(counter_value(500, Duration::from_millis(2200), duration, delay), 500);
    assert_eq!(counter_value(500, Duration::from_secs(60), duration, delay), 500);

    let mut prev = 0;
    for ms in (0..2400).step_by(16) {
        let v = counter_value(1200, Duration::from_millis(ms), duration, delay);
        assert!(v >= prev && v <= 1200, "{v} after {prev}");
        prev = v;
    }
}

#[test]
fn zero_duration_counter_jumps_to_target() {
    let delay = Duration::from_millis(100);
    assert_eq!(counter_value(94, Duration::ZERO, Duration::ZERO, delay), 0);
    assert_eq!(counter_value(94, delay, Duration::ZERO, delay), 94);
}

#[test]
fn stat_text_counts_up_with_suffix() {
    assert_eq!(STATS[0].display_at(0, Duration::ZERO), "0+");
    assert_eq!(STATS[3].display_at(3, Duration::from_millis(400)), "0%");
    assert_eq!(STATS[3].display_at(3, Duration::from_millis(1500)), "47%");
    assert!(!counters_done(Duration::from_millis(2400)));
    assert!(counters_done(Duration::from_millis(2600)));
    for (i, stat) in STATS.iter().enumerate() {
        assert_eq!(stat.display_at(i, Duration::from_millis(2600)), stat.display());
    }
}

#[test]
fn content_lists_are_complete() {
    assert_eq!(STEPS.len(), 3);
    assert_eq!(STEPS[1].title, "Get AI Matches");
    assert_eq!(FEATURES.len(), 6);
    assert!(FEATURES.iter().all(|f| !f.is_empty()));
}

#[test]
fn scroll_progress_spans_hero_height() {
    assert_eq!(scroll_progress(120.0, 800.0), 0.0);
    assert_eq!(scroll_progress(0.0, 800.0), 0.0);
    assert!(close(scroll_progress(-400.0, 800.0), 0.5));
    assert_eq!(scroll_progress(-800.0, 800.0), 1.0);
    assert_eq!(scroll_progress(-5000.0, 800.0), 1.0);
}

#[test]
fn scroll_progress_handles_unmeasured_hero() {
    assert_eq!(scroll_progress(-100.0, 0.0), 0.0);
    assert_eq!(scroll_progress(f32::NAN, 800.0), 0.0);
    assert_eq!(scroll_progress(-100.0, f32::NAN), 0.0);
}

#[test]
fn hero_transform_endpoints() {
    assert_eq!(
        HeroTransform::at(0.0),
        HeroTransform {
            opacity: 1.0,
            scale: 1.0,
            translate_y_px: 0.0
        }
    );
    let end = HeroTransform::at(1.0);
    assert!(close(end.opacity, 0.0));
    assert!(close(end.scale, 0.8));
    assert!(close(end.translate_y_px, 100.0));
    let mid = HeroTransform::at(0.5);
    assert!(close(mid.opacity, 0.5));
    assert!(close(mid.scale, 0.9));
    assert!(close(mid.translate_y_px, 50.0));
}

#[test]
fn ambient_loops_start_on_first_keyframe() {
    for def in AMBIENT_LOOPS.iter() {
        let clock = def.clock();
        assert!(close(def.sample(&clock), def.keyframes.values[0]));
        assert!(def.period_ms > 0);
    }
}

#[test]
fn ambient_loops_return_to_start_each_period() {
    for def in AMBIENT_LOOPS.iter() {
        let mut clock = def.clock();
        clock.advance(Duration::from_millis(def.period_ms * 3));
        assert!(close(def.sample(&clock), def.keyframes.values[0]));
        clock.advance(Duration::from_millis(def.period_ms / 2));
        assert!(close(def.sample(&clock), def.keyframes.values[1]));
    }
}

#[test]
fn each_element_property_pair_is_unique() {
    let mut seen = HashSet::new();
    for def in AMBIENT_LOOPS.iter() {
        assert!(
            seen.insert((def.element_id, def.property)),
            "duplicate loop for #{}",
            def.element_id
        );
    }
}

#[test]
fn ambient_style_combines_properties() {
    let mut style = AmbientStyle::default();
    assert_eq!(style.opacity, None);
    style.apply(LoopProperty::Scale, 1.2);
    style.apply(LoopProperty::Opacity, 0.4);
    style.apply(LoopProperty::TranslateY, -20.0);
    assert_eq!(
        style,
        AmbientStyle {
            scale: 1.2,
            opacity: Some(0.4),
            translate_y_px: -20.0
        }
    );
}

#[test]
fn match_badge_bobs_every_two_seconds() {
    let badge = AMBIENT_LOOPS
        .iter()
        .find(|d| d.element_id == "match-badge")
        .unwrap();
    assert_eq!(badge.property, LoopProperty::TranslateY);
    assert_eq!(badge.period_ms, 2000);
    let mut clock = badge.clock();
    clock.advance(Duration::from_secs(1));
    assert!(close(badge.sample(&clock), -5.0));
    clock.advance(Duration::from_secs(1));
    assert!(close(badge.sample(&clock), 0.0));
}

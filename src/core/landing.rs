use crate::constants::*;
use crate::core::idle::{ease_in_out, Keyframes, LoopClock};
use crate::core::mapper::interpolate;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

impl Stat {
    pub fn display(&self) -> String {
        self.display_value(self.value)
    }

    pub fn display_value(&self, shown: u32) -> String {
        format!("{}{}", shown, self.suffix)
    }

    /// Counter text for the stat at `index`, `elapsed` after the page mounted.
    pub fn display_at(&self, index: usize, elapsed: Duration) -> String {
        self.display_value(counter_value(
            self.value,
            elapsed,
            Duration::from_secs_f32(COUNTER_DURATION_SEC),
            counter_delay(index),
        ))
    }
}

/// Start delay of the `index`th stat counter.
pub fn counter_delay(index: usize) -> Duration {
    Duration::from_secs_f32(COUNTER_DELAY_BASE_SEC + COUNTER_DELAY_STEP_SEC * index as f32)
}

/// Value shown by a counter easing from 0 up to `target`.
///
/// Holds 0 until `delay` has passed and `target` from `delay + duration` on.
pub fn counter_value(target: u32, elapsed: Duration, duration: Duration, delay: Duration) -> u32 {
    let Some(running) = elapsed.checked_sub(delay) else {
        return 0;
    };
    if running >= duration {
        return target;
    }
    let t = running.as_secs_f32() / duration.as_secs_f32();
    (target as f32 * ease_in_out(t)).round() as u32
}

/// True once every stat counter has reached its final value.
pub fn counters_done(elapsed: Duration) -> bool {
    elapsed >= counter_delay(STATS.len().saturating_sub(1))
        + Duration::from_secs_f32(COUNTER_DURATION_SEC)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Active Students",
        value: 500,
        suffix: "+",
    },
    Stat {
        label: "Skills Matched",
        value: 1200,
        suffix: "+",
    },
    Stat {
        label: "Sessions Completed",
        value: 850,
        suffix: "+",
    },
    Stat {
        label: "Match Accuracy",
        value: 94,
        suffix: "%",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        title: "Add Your Skills",
        description: "Tell us what you can teach and what you want to learn",
    },
    Step {
        title: "Get AI Matches",
        description: "Our GraphRAG finds your perfect peer mentors",
    },
    Step {
        title: "Connect & Learn",
        description: "Schedule sessions and start your learning journey",
    },
];

pub const FEATURES: [&str; 6] = [
    "AI-powered matching with GraphRAG",
    "Peer-to-peer learning network",
    "Campus-verified students only",
    "Real-time collaboration tools",
    "Progress tracking & badges",
    "Trust-based rating system",
];

/// Hero scroll progress for offsets ['start start', 'end start'].
///
/// 0 while the hero top is at or below the viewport top, 1 once its bottom
/// has scrolled past it.
#[inline]
pub fn scroll_progress(hero_top: f32, hero_height: f32) -> f32 {
    if hero_height.is_nan() || hero_height <= 0.0 || !hero_top.is_finite() {
        return 0.0;
    }
    (-hero_top / hero_height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f32,
    pub scale: f32,
    pub translate_y_px: f32,
}

impl HeroTransform {
    pub fn at(progress: f32) -> Self {
        let unit = [0.0, 1.0];
        Self {
            opacity: interpolate(progress, unit, HERO_OPACITY_RANGE),
            scale: interpolate(progress, unit, HERO_SCALE_RANGE),
            translate_y_px: interpolate(progress, unit, HERO_TRANSLATE_Y_RANGE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopProperty {
    Scale,
    Opacity,
    TranslateY,
}

/// One decorative element animated between keyframes forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLoop {
    pub element_id: &'static str,
    pub property: LoopProperty,
    pub keyframes: Keyframes<3>,
    pub period_ms: u64,
}

impl AmbientLoop {
    pub fn clock(&self) -> LoopClock {
        LoopClock::new(Duration::from_millis(self.period_ms), Duration::ZERO)
    }

    pub fn sample(&self, clock: &LoopClock) -> f32 {
        self.keyframes.sample(clock.progress())
    }
}

pub const AMBIENT_LOOPS: [AmbientLoop; 9] = [
    AmbientLoop {
        element_id: "orb-primary",
        property: LoopProperty::Scale,
        keyframes: Keyframes::new([1.0, 1.2, 1.0]),
        period_ms: 8000,
    },
    AmbientLoop {
        element_id: "orb-primary",
        property: LoopProperty::Opacity,
        keyframes: Keyframes::new([0.3, 0.5, 0.3]),
        period_ms: 8000,
    },
    AmbientLoop {
        element_id: "orb-success",
        property: LoopProperty::Scale,
        keyframes: Keyframes::new([1.2, 1.0, 1.2]),
        period_ms: 10000,
    },
    AmbientLoop {
        element_id: "orb-success",
        property: LoopProperty::Opacity,
        keyframes: Keyframes::new([0.3, 0.5, 0.3]),
        period_ms: 10000,
    },
    AmbientLoop {
        element_id: "float-primary",
        property: LoopProperty::TranslateY,
        keyframes: Keyframes::new([0.0, -20.0, 0.0]),
        period_ms: 4000,
    },
    AmbientLoop {
        element_id: "float-success",
        property: LoopProperty::TranslateY,
        keyframes: Keyframes::new([0.0, 15.0, 0.0]),
        period_ms: 5000,
    },
    AmbientLoop {
        element_id: "float-warning",
        property: LoopProperty::TranslateY,
        keyframes: Keyframes::new([0.0, -10.0, 0.0]),
        period_ms: 3000,
    },
    AmbientLoop {
        element_id: "scroll-indicator",
        property: LoopProperty::TranslateY,
        keyframes: Keyframes::new([0.0, 8.0, 0.0]),
        period_ms: 1500,
    },
    AmbientLoop {
        element_id: "match-badge",
        property: LoopProperty::TranslateY,
        keyframes: Keyframes::new([0.0, -5.0, 0.0]),
        period_ms: 2000,
    },
];

/// Combined style of one element driven by several loops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientStyle {
    pub scale: f32,
    pub opacity: Option<f32>,
    pub translate_y_px: f32,
}

impl Default for AmbientStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: None,
            translate_y_px: 0.0,
        }
    }
}

impl AmbientStyle {
    pub fn apply(&mut self, property: LoopProperty, value: f32) {
        match property {
            LoopProperty::Scale => self.scale = value,
            LoopProperty::Opacity => self.opacity = Some(value),
            LoopProperty::TranslateY => self.translate_y_px = value,
        }
    }
}

use crate::constants::*;
use rand::Rng;
use std::f32::consts::PI;
use std::time::Duration;

/// Sinusoidal ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (PI * t).cos()
}

/// Evenly spaced keyframe values, eased within each segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes<const N: usize> {
    pub values: [f32; N],
}

impl<const N: usize> Keyframes<N> {
    pub const fn new(values: [f32; N]) -> Self {
        Self { values }
    }

    /// Value at loop progress `t` in [0, 1].
    pub fn sample(&self, t: f32) -> f32 {
        if N == 0 {
            return 0.0;
        }
        if N == 1 {
            return self.values[0];
        }
        let segments = (N - 1) as f32;
        let pos = t.clamp(0.0, 1.0) * segments;
        let i = (pos.floor() as usize).min(N - 2);
        let local = ease_in_out(pos - i as f32);
        let a = self.values[i];
        let b = self.values[i + 1];
        a + (b - a) * local
    }
}

/// Restartable looping clock: waits `delay`, then cycles `period` forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopClock {
    pub period: Duration,
    pub delay: Duration,
    elapsed: Duration,
}

impl LoopClock {
    pub fn new(period: Duration, delay: Duration) -> Self {
        Self {
            period,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        // fold completed cycles back into the first one
        if let Some(running) = self.elapsed.checked_sub(self.delay) {
            if !self.period.is_zero() && running >= self.period {
                let wrapped = running.as_nanos() % self.period.as_nanos();
                self.elapsed = self.delay + Duration::from_nanos(wrapped as u64);
            }
        }
    }

    /// Time into the current cycle, in [0, period). `None` while delayed.
    pub fn phase(&self) -> Option<Duration> {
        let running = self.elapsed.checked_sub(self.delay)?;
        if self.period.is_zero() {
            return Some(Duration::ZERO);
        }
        let wrapped = running.as_nanos() % self.period.as_nanos();
        Some(Duration::from_nanos(wrapped as u64))
    }

    /// Cycle progress in [0, 1); 0 while delayed.
    pub fn progress(&self) -> f32 {
        match self.phase() {
            Some(p) if !self.period.is_zero() => p.as_secs_f32() / self.period.as_secs_f32(),
            _ => 0.0,
        }
    }
}

pub const PARTICLE_OPACITY: Keyframes<3> = Keyframes::new(PARTICLE_OPACITY_KEYS);
pub const PARTICLE_SCALE: Keyframes<3> = Keyframes::new(PARTICLE_SCALE_KEYS);

/// Perpetual opacity/scale pulse of one firefly, independent of the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleIdle {
    pub clock: LoopClock,
}

impl ParticleIdle {
    pub fn with_period(period: Duration, delay: Duration) -> Self {
        Self {
            clock: LoopClock::new(period, delay),
        }
    }

    /// Random phase delay in [0, max_delay).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, period: Duration, max_delay: Duration) -> Self {
        let max = max_delay.as_secs_f32();
        let delay = if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 };
        Self::with_period(period, Duration::from_secs_f32(delay))
    }

    pub fn advance(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    pub fn opacity(&self) -> f32 {
        PARTICLE_OPACITY.sample(self.clock.progress())
    }

    pub fn scale(&self) -> f32 {
        PARTICLE_SCALE.sample(self.clock.progress())
    }
}

use crate::constants::*;
use crate::core::pointer::clamp_offset;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

/// One damped spring axis chasing a target value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    /// Chase a new target. Velocity that does not point toward it is dropped,
    /// so the approach never starts by moving further out.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        if (target - self.position) * self.velocity <= 0.0 {
            self.velocity = 0.0;
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by `dt_sec`, split into fixed substeps.
    pub fn step(&mut self, cfg: &SpringConfig, dt_sec: f32) {
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            self.substep(cfg, h);
            remaining -= h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    fn substep(&mut self, cfg: &SpringConfig, h: f32) {
        let before = self.target - self.position;
        if before == 0.0 && self.velocity == 0.0 {
            return;
        }
        let accel = (cfg.stiffness * before - cfg.damping * self.velocity) / cfg.mass;
        self.velocity += accel * h;
        self.position += self.velocity * h;
        let after = self.target - self.position;
        // crossing the target ends the approach
        if before != 0.0 && before.signum() != after.signum() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Two-axis spring filter turning raw pointer offsets into smoothed ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringSmoother {
    pub config: SpringConfig,
    x: Spring,
    y: Spring,
}

impl SpringSmoother {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            x: Spring::default(),
            y: Spring::default(),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        let t = clamp_offset(target);
        self.x.retarget(t.x);
        self.y.retarget(t.y);
    }

    pub fn step(&mut self, dt: Duration) -> Vec2 {
        let dt_sec = dt.as_secs_f32();
        self.x.step(&self.config, dt_sec);
        self.y.step(&self.config, dt_sec);
        self.value()
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        clamp_offset(Vec2::new(self.x.position, self.y.position))
    }
}

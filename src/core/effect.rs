use crate::constants::*;
use crate::core::idle::ParticleIdle;
use crate::core::mapper::{map_visuals, VisualParams};
use crate::core::pointer::{LayoutRect, PointerTracker};
use crate::core::spring::{SpringConfig, SpringSmoother};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// Per-instance knobs for the spotlight text effect.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightConfig {
    pub spring: SpringConfig,
    pub max_tilt_deg: f32,
    pub particle_count: usize,
    pub idle_period: Duration,
    pub max_idle_delay: Duration,
    pub glow_radius_px: f32,
    pub spotlight_color: String,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            max_tilt_deg: MAX_TILT_DEG,
            particle_count: PARTICLE_COUNT,
            idle_period: Duration::from_secs_f32(PARTICLE_IDLE_PERIOD_SEC),
            max_idle_delay: Duration::from_secs_f32(PARTICLE_MAX_DELAY_SEC),
            glow_radius_px: GLOW_RADIUS_PX,
            spotlight_color: DEFAULT_SPOTLIGHT_COLOR.to_string(),
        }
    }
}

impl SpotlightConfig {
    /// Default tuning with a host-supplied colour; blank means default.
    pub fn with_color(color: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(c) = color.map(str::trim).filter(|c| !c.is_empty()) {
            cfg.spotlight_color = c.to_string();
        }
        cfg
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub offset: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub params: VisualParams,
    pub particles: SmallVec<[ParticleFrame; PARTICLE_COUNT]>,
}

pub struct SpotlightEffect {
    pub config: SpotlightConfig,
    tracker: PointerTracker,
    smoother: SpringSmoother,
    particles: SmallVec<[ParticleIdle; PARTICLE_COUNT]>,
    mounted: bool,
}

impl SpotlightEffect {
    /// Particle delays are drawn from `rng`; pass a seeded rng for
    /// reproducible runs.
    pub fn new<R: Rng + ?Sized>(config: SpotlightConfig, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| ParticleIdle::random(rng, config.idle_period, config.max_idle_delay))
            .collect();
        Self::with_particles(config, particles)
    }

    pub fn with_particles(
        config: SpotlightConfig,
        particles: SmallVec<[ParticleIdle; PARTICLE_COUNT]>,
    ) -> Self {
        let smoother = SpringSmoother::new(config.spring);
        Self {
            config,
            tracker: PointerTracker::default(),
            smoother,
            particles,
            mounted: true,
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn pointer_enter(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.enter();
    }

    /// Returns false when the sample was dropped (unmounted or no layout yet).
    pub fn pointer_move(&mut self, client: Vec2, rect: LayoutRect) -> bool {
        if !self.mounted {
            return false;
        }
        match self.tracker.move_to(client, rect) {
            Ok(()) => {
                self.smoother.set_target(self.tracker.target());
                true
            }
            Err(e) => {
                log::debug!("[spotlight] skipping pointer sample: {}", e);
                false
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.leave();
        self.smoother.set_target(self.tracker.target());
    }

    /// Advance one animation frame. `None` once unmounted.
    pub fn tick(&mut self, dt: Duration) -> Option<FrameOutput> {
        if !self.mounted {
            return None;
        }
        let offset = self.smoother.step(dt);
        for p in self.particles.iter_mut() {
            p.advance(dt);
        }
        Some(self.frame_for(offset))
    }

    fn frame_for(&self, offset: Vec2) -> FrameOutput {
        let params = map_visuals(
            offset,
            self.tracker.hover(),
            self.particles.len(),
            self.config.max_tilt_deg,
        );
        let particles = self
            .particles
            .iter()
            .zip(params.particle_offsets.iter())
            .map(|(p, &offset)| ParticleFrame {
                offset,
                opacity: p.opacity(),
                scale: p.scale(),
            })
            .collect();
        FrameOutput { params, particles }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[inline]
    pub fn hover(&self) -> f32 {
        self.tracker.hover()
    }

    #[inline]
    pub fn smoothed_offset(&self) -> Vec2 {
        self.smoother.value()
    }

    #[inline]
    pub fn target_offset(&self) -> Vec2 {
        self.tracker.target()
    }
}

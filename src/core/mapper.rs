use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Clamped linear map of `value` from `input` onto `output`.
#[inline]
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

/// Format a CSS number: three decimals at most, never "-0".
pub fn css_number(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{}", rounded)
}

/// Presentation parameters for one frame. Derived, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualParams {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Percent pair, (50, 50) is the element center.
    pub gradient_center: Vec2,
    /// Pixel offsets from the element center, one per particle.
    pub particle_offsets: SmallVec<[Vec2; PARTICLE_COUNT]>,
    /// Follows the hover signal.
    pub particle_layer_opacity: f32,
}

const OFFSET_RANGE: [f32; 2] = [-OFFSET_LIMIT, OFFSET_LIMIT];

pub fn map_visuals(
    offset: Vec2,
    hover: f32,
    particle_count: usize,
    max_tilt_deg: f32,
) -> VisualParams {
    // vertical offset tilts the opposite way, horizontal does not
    let rotate_x_deg = interpolate(offset.y, OFFSET_RANGE, [max_tilt_deg, -max_tilt_deg]);
    let rotate_y_deg = interpolate(offset.x, OFFSET_RANGE, [-max_tilt_deg, max_tilt_deg]);
    VisualParams {
        rotate_x_deg,
        rotate_y_deg,
        gradient_center: gradient_center(offset),
        particle_offsets: (0..particle_count)
            .map(|i| particle_offset(offset, i))
            .collect(),
        particle_layer_opacity: hover.clamp(0.0, 1.0),
    }
}

#[inline]
pub fn gradient_center(offset: Vec2) -> Vec2 {
    offset * 100.0 + Vec2::splat(50.0)
}

#[inline]
pub fn particle_offset(offset: Vec2, index: usize) -> Vec2 {
    let lane = index as f32 - 1.0;
    Vec2::new(
        offset.x * PARTICLE_TRAVEL[0] + lane * PARTICLE_STAGGER[0],
        offset.y * PARTICLE_TRAVEL[1] + lane * PARTICLE_STAGGER[1],
    )
}

impl VisualParams {
    pub fn rotate_x_css(&self) -> String {
        format!("{}deg", css_number(self.rotate_x_deg))
    }

    pub fn rotate_y_css(&self) -> String {
        format!("{}deg", css_number(self.rotate_y_deg))
    }

    pub fn transform_css(&self) -> String {
        format!(
            "rotateX({}) rotateY({})",
            self.rotate_x_css(),
            self.rotate_y_css()
        )
    }

    pub fn gradient_center_css(&self) -> String {
        format!(
            "{}% {}%",
            css_number(self.gradient_center.x),
            css_number(self.gradient_center.y)
        )
    }

    pub fn spotlight_gradient_css(&self, color: &str, radius_px: f32) -> String {
        format!(
            "radial-gradient(circle {}px at {}, {}, transparent {}%)",
            css_number(radius_px),
            self.gradient_center_css(),
            color,
            css_number(GLOW_FADE_PERCENT)
        )
    }
}

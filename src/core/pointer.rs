use crate::constants::OFFSET_LIMIT;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrackerError {
    /// The element has no measurable layout yet.
    #[error("division by zero: element rect is {width}x{height}")]
    DivisionByZero { width: f32, height: f32 },
}

/// Bounding rectangle of the tracked element in client (CSS pixel) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Map a client-space pointer position to an offset from the element center.
///
/// (0, 0) is the center and ±0.5 the edges. Positions outside the rect are
/// clamped onto the edge.
#[inline]
pub fn normalize_pointer(client: Vec2, rect: LayoutRect) -> Result<Vec2, TrackerError> {
    if !rect.is_measurable() {
        return Err(TrackerError::DivisionByZero {
            width: rect.width,
            height: rect.height,
        });
    }
    let x = (client.x - rect.left) / rect.width - 0.5;
    let y = (client.y - rect.top) / rect.height - 0.5;
    Ok(clamp_offset(Vec2::new(x, y)))
}

#[inline]
pub fn clamp_offset(v: Vec2) -> Vec2 {
    v.clamp(Vec2::splat(-OFFSET_LIMIT), Vec2::splat(OFFSET_LIMIT))
}

/// Latest raw pointer sample plus the hover flag for one element.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    target: Vec2,
    hovering: bool,
}

impl PointerTracker {
    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// Record a pointer move. On error the previous target is kept.
    pub fn move_to(&mut self, client: Vec2, rect: LayoutRect) -> Result<(), TrackerError> {
        self.target = normalize_pointer(client, rect)?;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.target = Vec2::ZERO;
        self.hovering = false;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Hover as a 0/1 signal for visual consumers.
    #[inline]
    pub fn hover(&self) -> f32 {
        if self.hovering {
            1.0
        } else {
            0.0
        }
    }
}

use crate::foundation::error::{AriseError, AriseResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Absolute 0-based frame index of a simulated run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AriseResult<Self> {
        if den == 0 {
            return Err(AriseError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AriseError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with positive, finite dimensions.
    pub fn new(width: f64, height: f64) -> AriseResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    /// Reject zero, negative or non-finite dimensions.
    pub fn validate(&self) -> AriseResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(AriseError::validation("viewport width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(AriseError::validation("viewport height must be > 0"));
        }
        Ok(())
    }

    /// Viewport rectangle anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

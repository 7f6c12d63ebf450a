//! Page choreography constants, loadable from JSON.
//!
//! Every field has a default; a JSON file only needs to list what it overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::{Ease, EaseDir};
use crate::foundation::core::Viewport;
use crate::foundation::error::{AriseError, AriseResult};
use crate::input::ToggleActions;

/// Full page configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub viewport: Viewport,
    pub intro: IntroConfig,
    pub entrance: EntranceConfig,
    pub pointer: PointerConfig,
    pub loops: LoopsConfig,
    pub scroll: ScrollConfig,
    pub cursor: CursorConfig,
}

/// Mask-reveal timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
    pub rotate_deg: f64,
    pub rotate_duration: f64,
    pub rotate_ease: Ease,
    pub zoom_scale: f64,
    pub zoom_duration: f64,
    /// How far the zoom stage reaches back into the rotate stage, in seconds.
    pub zoom_overlap: f64,
    pub zoom_ease: Ease,
    /// Zoom-stage progress at which the page reveals.
    pub reveal_threshold: f64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            rotate_deg: 10.0,
            rotate_duration: 2.0,
            rotate_ease: Ease::Power4(EaseDir::InOut),
            zoom_scale: 10.0,
            zoom_duration: 2.0,
            zoom_overlap: 1.8,
            zoom_ease: Ease::Expo(EaseDir::InOut),
            reveal_threshold: 0.9,
        }
    }
}

/// Hero entrance timeline. Offsets are relative to the end of the timeline so far.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntranceConfig {
    pub duration: f64,
    pub ease: Ease,
    pub sky_offset: f64,
    pub bg_offset: f64,
    pub text_offset: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration: 1.5,
            ease: Ease::Expo(EaseDir::InOut),
            sky_offset: -1.2,
            bg_offset: -1.3,
            text_offset: -1.2,
        }
    }
}

/// How one layer follows the pointer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerResponse {
    pub x_factor: f64,
    pub y_factor: f64,
    pub duration: f64,
    pub ease: Ease,
}

/// Pointer parallax gains and per-layer responses.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    pub x_gain: f64,
    pub y_gain: f64,
    /// Applied as a percentage of the text layer's own size.
    pub text: LayerResponse,
    pub sky: LayerResponse,
    pub bg: LayerResponse,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            x_gain: 40.0,
            y_gain: 20.0,
            text: LayerResponse {
                x_factor: 0.4,
                y_factor: 0.4,
                duration: 0.6,
                ease: Ease::Power2(EaseDir::Out),
            },
            sky: LayerResponse {
                x_factor: 1.0,
                y_factor: 0.5,
                duration: 0.8,
                ease: Ease::Power2(EaseDir::Out),
            },
            bg: LayerResponse {
                x_factor: 1.7,
                y_factor: 1.2,
                duration: 1.0,
                ease: Ease::Power3(EaseDir::Out),
            },
        }
    }
}

/// Endless decorative loops.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoopsConfig {
    pub bob_offset_y: f64,
    pub bob_duration: f64,
    pub bob_ease: Ease,
    pub glow_min_opacity: f64,
    pub glow_max_opacity: f64,
    pub glow_duration: f64,
    pub glow_ease: Ease,
}

impl Default for LoopsConfig {
    fn default() -> Self {
        Self {
            bob_offset_y: -15.0,
            bob_duration: 2.0,
            bob_ease: Ease::Sine(EaseDir::InOut),
            glow_min_opacity: 0.4,
            glow_max_opacity: 1.0,
            glow_duration: 1.5,
            glow_ease: Ease::Sine(EaseDir::InOut),
        }
    }
}

/// Scroll-triggered fade-in of the second section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Horizontal slide distance in pixels.
    pub distance: f64,
    pub duration: f64,
    /// Start of the second element relative to the first.
    pub stagger: f64,
    pub ease: Ease,
    /// What the `about` trigger does on `enter leave enterBack leaveBack`.
    pub toggle_actions: ToggleActions,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            distance: 100.0,
            duration: 1.0,
            stagger: 0.3,
            ease: Ease::Power2(EaseDir::Out),
            toggle_actions: ToggleActions::default(),
        }
    }
}

/// Cursor follower smoothing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub duration: f64,
    pub ease: Ease,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            duration: 0.1,
            ease: Ease::Power2(EaseDir::Out),
        }
    }
}

fn positive(name: &str, v: f64) -> AriseResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(AriseError::validation(format!("{name} must be > 0, got {v}")))
    }
}

fn finite(name: &str, v: f64) -> AriseResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(AriseError::validation(format!("{name} must be finite")))
    }
}

impl PageConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AriseResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AriseError::validation(format!("parse page config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AriseResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AriseError::validation(format!("open page config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> AriseResult<()> {
        self.viewport.validate()?;

        let i = &self.intro;
        finite("intro.rotate_deg", i.rotate_deg)?;
        positive("intro.rotate_duration", i.rotate_duration)?;
        positive("intro.zoom_scale", i.zoom_scale)?;
        positive("intro.zoom_duration", i.zoom_duration)?;
        finite("intro.zoom_overlap", i.zoom_overlap)?;
        if !(i.reveal_threshold > 0.0 && i.reveal_threshold <= 1.0) {
            return Err(AriseError::validation(
                "intro.reveal_threshold must be in (0, 1]",
            ));
        }

        let e = &self.entrance;
        positive("entrance.duration", e.duration)?;
        finite("entrance.sky_offset", e.sky_offset)?;
        finite("entrance.bg_offset", e.bg_offset)?;
        finite("entrance.text_offset", e.text_offset)?;

        let p = &self.pointer;
        finite("pointer.x_gain", p.x_gain)?;
        finite("pointer.y_gain", p.y_gain)?;
        for (name, layer) in [("text", &p.text), ("sky", &p.sky), ("bg", &p.bg)] {
            finite(&format!("pointer.{name}.x_factor"), layer.x_factor)?;
            finite(&format!("pointer.{name}.y_factor"), layer.y_factor)?;
            positive(&format!("pointer.{name}.duration"), layer.duration)?;
        }

        let l = &self.loops;
        finite("loops.bob_offset_y", l.bob_offset_y)?;
        positive("loops.bob_duration", l.bob_duration)?;
        positive("loops.glow_duration", l.glow_duration)?;
        for (name, v) in [
            ("loops.glow_min_opacity", l.glow_min_opacity),
            ("loops.glow_max_opacity", l.glow_max_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(AriseError::validation(format!("{name} must be in [0, 1]")));
            }
        }

        let s = &self.scroll;
        finite("scroll.distance", s.distance)?;
        positive("scroll.duration", s.duration)?;
        if !(s.stagger.is_finite() && s.stagger >= 0.0) {
            return Err(AriseError::validation("scroll.stagger must be >= 0"));
        }

        positive("cursor.duration", self.cursor.duration)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

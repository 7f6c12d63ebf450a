//! Scripted host input and the frame-stepped simulation that replays it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{FrameIndex, Fps, Point};
use crate::foundation::error::{AriseError, AriseResult};
use crate::page::{LandingPage, PageSnapshot};

/// One host input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Input {
    Pointer { x: f64, y: f64 },
    Scroll { y: f64 },
}

/// Input delivered at `at` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    pub at: f64,
    #[serde(flatten)]
    pub input: Input,
}

/// Time-ordered list of host inputs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_reader<R: std::io::Read>(r: R) -> AriseResult<Self> {
        let script: Self = serde_json::from_reader(r)
            .map_err(|e| AriseError::script(format!("parse script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AriseResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AriseError::script(format!("open script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Times must be finite, non-negative and non-decreasing; coordinates finite.
    pub fn validate(&self) -> AriseResult<()> {
        let mut prev = 0.0;
        for (i, ev) in self.events.iter().enumerate() {
            if !(ev.at.is_finite() && ev.at >= 0.0) {
                return Err(AriseError::script(format!(
                    "event {i}: time must be finite and >= 0"
                )));
            }
            if ev.at < prev {
                return Err(AriseError::script(format!(
                    "event {i}: time {} is before the previous event ({prev})",
                    ev.at
                )));
            }
            let finite = match ev.input {
                Input::Pointer { x, y } => x.is_finite() && y.is_finite(),
                Input::Scroll { y } => y.is_finite(),
            };
            if !finite {
                return Err(AriseError::script(format!(
                    "event {i}: coordinates must be finite"
                )));
            }
            prev = ev.at;
        }
        Ok(())
    }
}

/// Page state captured after one simulated frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub frame: FrameIndex,
    #[serde(flatten)]
    pub page: PageSnapshot,
}

/// Steps a mounted page at a fixed frame rate, feeding scripted input as its time comes due.
pub struct Simulation<'a> {
    page: LandingPage,
    script: &'a Script,
    fps: Fps,
    next_event: usize,
    frame: u64,
}

impl<'a> Simulation<'a> {
    /// Mount `page` and render frame zero.
    pub fn new(mut page: LandingPage, script: &'a Script, fps: Fps) -> AriseResult<Self> {
        script.validate()?;
        page.mount()?;
        page.tick(0.0)?;
        Ok(Self {
            page,
            script,
            fps,
            next_event: 0,
            frame: 0,
        })
    }

    pub fn page(&self) -> &LandingPage {
        &self.page
    }

    pub fn into_page(self) -> LandingPage {
        self.page
    }

    pub fn frame(&self) -> FrameIndex {
        FrameIndex(self.frame)
    }

    /// Deliver every event due at or before the current frame time.
    fn deliver(&mut self) -> AriseResult<()> {
        let now = self.fps.frames_to_secs(self.frame);
        while let Some(ev) = self.script.events.get(self.next_event) {
            if ev.at > now {
                break;
            }
            match ev.input {
                Input::Pointer { x, y } => {
                    let fired = self.page.pointer_move(Point::new(x, y))?;
                    tracing::debug!(at = ev.at, x, y, fired, "pointer event");
                }
                Input::Scroll { y } => {
                    let crossed = self.page.scroll_to(y)?;
                    tracing::debug!(at = ev.at, y, ?crossed, "scroll event");
                }
            }
            self.next_event += 1;
        }
        Ok(())
    }

    /// Current frame's snapshot, after delivering its input.
    pub fn capture(&mut self) -> AriseResult<Frame> {
        self.deliver()?;
        Ok(Frame {
            frame: self.frame(),
            page: self.page.snapshot(),
        })
    }

    /// Advance one frame.
    pub fn step(&mut self) -> AriseResult<()> {
        self.deliver()?;
        self.page.tick(self.fps.frame_duration_secs())?;
        self.frame += 1;
        Ok(())
    }

    /// Advance to `frame`, delivering input along the way.
    pub fn seek(&mut self, frame: FrameIndex) -> AriseResult<()> {
        while self.frame < frame.0 {
            self.step()?;
        }
        self.deliver()
    }
}

/// Longest run [`simulate`] accepts: about 4.6 hours at 60 fps.
pub const MAX_FRAMES: u64 = 1_000_000;

/// Run `frames` frames and collect one snapshot per frame, starting with frame zero.
///
/// Fails when `frames` exceeds [`MAX_FRAMES`].
#[tracing::instrument(level = "debug", skip(page, script))]
pub fn simulate(
    page: LandingPage,
    script: &Script,
    fps: Fps,
    frames: u64,
) -> AriseResult<Vec<Frame>> {
    if frames > MAX_FRAMES {
        return Err(AriseError::validation(format!(
            "cannot simulate {frames} frames, the limit is {MAX_FRAMES}"
        )));
    }
    let mut sim = Simulation::new(page, script, fps)?;
    let mut out = Vec::new();
    for i in 0..frames {
        if i > 0 {
            sim.step()?;
        }
        out.push(sim.capture()?);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;

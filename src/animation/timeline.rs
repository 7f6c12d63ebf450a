use crate::animation::tween::{Tween, TweenId, TweenUpdate};
use crate::foundation::error::{AriseError, AriseResult};
use crate::scene::Scene;

/// Placement of a child relative to what the timeline already holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    AtEnd,
    /// Offset from the current end; negative values overlap the tail (`"-=1.2"`).
    Relative(f64),
    /// Absolute local time.
    At(f64),
}

#[derive(Clone, Debug)]
struct Child {
    start: f64,
    tween: Tween,
}

/// Ordered, possibly overlapping sequence of tweens.
///
/// A child's start time is fixed when it is added: `position` resolved against the current end,
/// plus the tween's own delay, which is folded into the start.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    children: Vec<Child>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the latest-ending child; `0` when empty.
    pub fn end(&self) -> f64 {
        self.children
            .iter()
            .map(|c| c.start + c.tween.total_duration())
            .fold(0.0, f64::max)
    }

    /// Append `tween` and return its resolved start time.
    pub fn add(&mut self, mut tween: Tween, position: Position) -> AriseResult<f64> {
        let base = match position {
            Position::AtEnd => self.end(),
            Position::Relative(offset) => self.end() + offset,
            Position::At(t) => t,
        };
        let delay = std::mem::take(&mut tween.vars_mut().delay);
        let start = base + delay;
        if !start.is_finite() {
            return Err(AriseError::animation(
                "cannot place a tween after an infinite timeline child",
            ));
        }
        // Children may overlap earlier ones but never start before the timeline itself.
        let start = start.max(0.0);
        self.children.push(Child { start, tween });
        Ok(start)
    }

    /// Resolved `(tween, start)` pairs in insertion order.
    pub fn starts(&self) -> impl Iterator<Item = (TweenId, f64)> + '_ {
        self.children.iter().map(|c| (c.tween.id(), c.start))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render every child at timeline-local `time`, in insertion order.
    pub fn render(&mut self, time: f64, scene: &mut Scene, out: &mut Vec<TweenUpdate>) {
        for child in &mut self.children {
            if let Some(update) = child.tween.render(time - child.start, scene) {
                out.push(update);
            }
        }
    }

    /// Write the explicit start values of every child that asks for it.
    pub(crate) fn render_from(&self, scene: &mut Scene) {
        for child in &self.children {
            if child.tween.vars().immediate_render {
                child.tween.render_from(scene);
            }
        }
    }

    pub fn is_complete(&self, time: f64) -> bool {
        time >= self.end()
    }

    pub(crate) fn tweens(&self) -> impl Iterator<Item = &Tween> {
        self.children.iter().map(|c| &c.tween)
    }

    pub(crate) fn tweens_mut(&mut self) -> impl Iterator<Item = &mut Tween> {
        self.children.iter_mut().map(|c| &mut c.tween)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;

use crate::animation::ease::Ease;
use crate::animation::props::{Lerp, Prop, PropSet};
use crate::foundation::error::{AriseError, AriseResult};
use crate::scene::{Element, ElementId, Scene};

/// Identifier of a single tween, standalone or inside a timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TweenId(pub u64);

/// Resolves the target values of one element of a batched tween.
pub type Resolver = fn(&Element) -> PropSet;

/// Where a tween is heading.
#[derive(Clone, Debug)]
pub enum TargetValues {
    /// Same values for every target.
    Fixed(PropSet),
    /// Values resolved per element when the tween first renders.
    PerElement(Resolver),
}

/// How often a tween plays after its first run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// A single cycle.
    #[default]
    Once,
    /// One cycle plus `n` repeats.
    Count(u32),
    /// Never completes.
    Infinite,
}

impl Repeat {
    fn cycles(self) -> f64 {
        match self {
            Self::Once => 1.0,
            Self::Count(n) => f64::from(n) + 1.0,
            Self::Infinite => f64::INFINITY,
        }
    }
}

/// Tween definition.
#[derive(Clone, Debug)]
pub struct TweenVars {
    pub to: TargetValues,
    /// Explicit start values; properties not listed start from their current value.
    pub from: Option<PropSet>,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    /// Reverse direction on every other cycle.
    pub yoyo: bool,
    /// Write `from` values as soon as the tween is created.
    pub immediate_render: bool,
}

impl TweenVars {
    /// Animate from current values to `to`.
    pub fn to(to: PropSet) -> Self {
        Self {
            to: TargetValues::Fixed(to),
            from: None,
            duration: 0.5,
            delay: 0.0,
            ease: Ease::default(),
            repeat: Repeat::Once,
            yoyo: false,
            immediate_render: false,
        }
    }

    /// Animate from explicit `from` values to `to`, writing `from` immediately.
    pub fn from_to(from: PropSet, to: PropSet) -> Self {
        Self {
            from: Some(from),
            immediate_render: true,
            ..Self::to(to)
        }
    }

    /// Animate each element toward the values `resolver` returns for it.
    pub fn per_element(resolver: Resolver) -> Self {
        Self {
            to: TargetValues::PerElement(resolver),
            ..Self::to(PropSet::new())
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn validate(&self) -> AriseResult<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(AriseError::animation("tween duration must be finite and >= 0"));
        }
        if !self.delay.is_finite() {
            return Err(AriseError::animation("tween delay must be finite"));
        }
        if let TargetValues::Fixed(to) = &self.to
            && !to.is_finite()
        {
            return Err(AriseError::animation("tween targets must be finite"));
        }
        if let Some(from) = &self.from
            && !from.is_finite()
        {
            return Err(AriseError::animation("tween start values must be finite"));
        }
        Ok(())
    }

    /// Local time at which the tween completes; infinite for endless repeats.
    pub fn total_duration(&self) -> f64 {
        self.delay + self.duration * self.repeat.cycles()
    }
}

/// Progress report emitted each time a tween renders.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TweenUpdate {
    pub tween: TweenId,
    /// Progress of the current cycle in `[0, 1]`, before easing.
    pub progress: f64,
    pub iteration: u64,
    pub complete: bool,
}

#[derive(Clone, Debug)]
struct Track {
    element: ElementId,
    from: PropSet,
    to: PropSet,
}

/// A running tween bound to resolved target elements.
#[derive(Clone, Debug)]
pub struct Tween {
    id: TweenId,
    targets: Vec<ElementId>,
    vars: TweenVars,
    tracks: Vec<Track>,
    started: bool,
    finished: bool,
}

impl Tween {
    /// Bind `vars` to `targets`. Targets are fixed at creation; later scene changes do not add
    /// elements.
    pub fn new(id: TweenId, targets: Vec<ElementId>, vars: TweenVars) -> AriseResult<Self> {
        vars.validate()?;
        Ok(Self {
            id,
            targets,
            vars,
            tracks: Vec::new(),
            started: false,
            finished: false,
        })
    }

    pub fn id(&self) -> TweenId {
        self.id
    }

    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    pub fn vars(&self) -> &TweenVars {
        &self.vars
    }

    pub(crate) fn vars_mut(&mut self) -> &mut TweenVars {
        &mut self.vars
    }

    pub fn total_duration(&self) -> f64 {
        self.vars.total_duration()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Started and not yet finished.
    pub fn is_live(&self) -> bool {
        self.started && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Write explicit `from` values without starting the tween.
    pub(crate) fn render_from(&self, scene: &mut Scene) {
        let Some(from) = &self.vars.from else {
            return;
        };
        for &id in &self.targets {
            if let Some(el) = scene.get_mut(id).filter(|e| !e.removed) {
                el.props.apply(from);
            }
        }
    }

    fn start(&mut self, scene: &Scene) {
        self.started = true;
        self.tracks = self
            .targets
            .iter()
            .filter_map(|&id| scene.get(id).filter(|e| !e.removed))
            .map(|el| {
                let to = match &self.vars.to {
                    TargetValues::Fixed(set) => set.clone(),
                    TargetValues::PerElement(resolve) => resolve(el),
                };
                let mut from = el.props.capture(&to);
                if let Some(explicit) = &self.vars.from {
                    for (prop, value) in explicit.iter() {
                        if from.contains(prop) {
                            from.set(prop, value);
                        }
                    }
                }
                Track {
                    element: el.id,
                    from,
                    to,
                }
            })
            .collect();
    }

    /// Render at local `time` (seconds since the tween was placed, delay included).
    ///
    /// Returns `None` before the tween starts and after its final frame has been written.
    pub fn render(&mut self, time: f64, scene: &mut Scene) -> Option<TweenUpdate> {
        if self.finished {
            return None;
        }
        let active = time - self.vars.delay;
        if active < 0.0 {
            return None;
        }
        if !self.started {
            self.start(scene);
        }

        let duration = self.vars.duration;
        let cycles = self.vars.repeat.cycles();
        let (iteration, progress, complete) = if duration == 0.0 {
            (0, 1.0, true)
        } else if active >= duration * cycles {
            (cycles as u64 - 1, 1.0, true)
        } else {
            let cycle = active / duration;
            let iteration = cycle.floor();
            (iteration as u64, cycle - iteration, false)
        };

        let reversed = self.vars.yoyo && iteration % 2 == 1;
        let eased = if reversed {
            self.vars.ease.apply(1.0 - progress)
        } else {
            self.vars.ease.apply(progress)
        };

        for track in &self.tracks {
            if let Some(el) = scene.get_mut(track.element).filter(|e| !e.removed) {
                el.props.apply(&PropSet::lerp(&track.from, &track.to, eased));
            }
        }

        self.finished = complete;
        Some(TweenUpdate {
            tween: self.id,
            progress,
            iteration,
            complete,
        })
    }

    /// Give up ownership of `prop` on `element` (overwritten by a newer tween).
    pub(crate) fn strip(&mut self, element: ElementId, prop: Prop) {
        for track in self.tracks.iter_mut().filter(|t| t.element == element) {
            track.to.remove(prop);
            track.from.remove(prop);
        }
    }

    /// `(element, prop)` pairs this tween currently drives.
    pub(crate) fn owned(&self) -> Vec<(ElementId, Prop)> {
        self.tracks
            .iter()
            .flat_map(|t| t.to.props().map(move |p| (t.element, p)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

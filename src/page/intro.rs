use crate::animation::{AnimId, Engine, Position, Prop, PropSet, TickReport, TweenId, TweenVars};
use crate::config::IntroConfig;
use crate::foundation::error::AriseResult;
use crate::scene::Selector;
use crate::scene::landing::layer;

/// Emitted once, when the zoom stage crosses the reveal threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// The intro timeline, to be killed by the owner.
    pub timeline: AnimId,
}

/// Plays the mask-reveal intro and watches its zoom stage.
#[derive(Clone, Debug)]
pub struct IntroController {
    threshold: f64,
    timeline: Option<AnimId>,
    zoom: Option<TweenId>,
    fired: bool,
}

impl IntroController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            timeline: None,
            zoom: None,
            fired: false,
        }
    }

    /// Register the two-stage intro timeline: rotate the mask group, then zoom it out while
    /// fading, reaching back into the rotate stage by `zoom_overlap`.
    ///
    /// Calling it again returns the timeline already registered.
    pub fn start(&mut self, engine: &mut Engine, cfg: &IntroConfig) -> AriseResult<AnimId> {
        if let Some(id) = self.timeline {
            return Ok(id);
        }
        let mask = Selector::class(layer::MASK_GROUP);
        let mut tl = engine.timeline();
        tl.to(
            &mask,
            TweenVars::to(PropSet::new().with(Prop::Rotate, cfg.rotate_deg))
                .duration(cfg.rotate_duration)
                .ease(cfg.rotate_ease),
            Position::AtEnd,
        )?;
        let zoom = tl.to(
            &mask,
            TweenVars::to(
                PropSet::new()
                    .with(Prop::Scale, cfg.zoom_scale)
                    .with(Prop::Opacity, 0.0),
            )
            .duration(cfg.zoom_duration)
            .ease(cfg.zoom_ease),
            Position::Relative(-cfg.zoom_overlap),
        )?;
        let id = tl.build();
        tracing::debug!(anim = id.0, "intro timeline started");
        self.timeline = Some(id);
        self.zoom = Some(zoom);
        Ok(id)
    }

    pub fn timeline(&self) -> Option<AnimId> {
        self.timeline
    }

    /// The zoom-stage tween whose progress gates the reveal.
    pub fn zoom_stage(&self) -> Option<TweenId> {
        self.zoom
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed one zoom-stage progress value. `true` exactly once, on the first value at or past
    /// the threshold.
    pub fn on_progress(&mut self, progress: f64) -> bool {
        if self.fired || progress < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    /// Inspect a tick's progress reports for the zoom stage.
    pub fn observe(&mut self, report: &TickReport) -> Option<Reveal> {
        let (timeline, zoom) = (self.timeline?, self.zoom?);
        let update = report.update_of(zoom)?;
        self.on_progress(update.progress)
            .then_some(Reveal { timeline })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/intro.rs"]
mod tests;

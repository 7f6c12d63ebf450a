use crate::animation::props::{Prop, PropSet};
use crate::animation::timeline::{Position, Timeline};
use crate::animation::tween::{Tween, TweenId, TweenUpdate, TweenVars};
use crate::foundation::error::{AriseError, AriseResult};
use crate::scene::{ElementId, Scene, Selector};

/// Handle of a top-level animation (standalone tween or timeline).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AnimId(pub u64);

#[derive(Clone, Debug)]
enum Body {
    Tween(Tween),
    Timeline(Timeline),
}

impl Body {
    fn render(&mut self, time: f64, scene: &mut Scene, out: &mut Vec<TweenUpdate>) {
        match self {
            Self::Tween(t) => out.extend(t.render(time, scene)),
            Self::Timeline(tl) => tl.render(time, scene, out),
        }
    }

    fn is_complete(&self, time: f64) -> bool {
        match self {
            Self::Tween(t) => t.is_finished(),
            Self::Timeline(tl) => tl.is_complete(time),
        }
    }

    fn tweens(&self) -> Box<dyn Iterator<Item = &Tween> + '_> {
        match self {
            Self::Tween(t) => Box::new(std::iter::once(t)),
            Self::Timeline(tl) => Box::new(tl.tweens()),
        }
    }

    fn tweens_mut(&mut self) -> Box<dyn Iterator<Item = &mut Tween> + '_> {
        match self {
            Self::Tween(t) => Box::new(std::iter::once(t)),
            Self::Timeline(tl) => Box::new(tl.tweens_mut()),
        }
    }
}

#[derive(Clone, Debug)]
struct Active {
    id: AnimId,
    body: Body,
    time: f64,
    paused: bool,
}

/// Everything that happened during one [`Engine::tick`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TickReport {
    /// Engine clock after the tick.
    pub time: f64,
    /// One entry per tween that rendered, in render order.
    pub updates: Vec<TweenUpdate>,
    /// Animations that finished and were released.
    pub completed: Vec<AnimId>,
}

impl TickReport {
    /// The update `tween` reported this tick, if it rendered.
    pub fn update_of(&self, tween: TweenId) -> Option<&TweenUpdate> {
        self.updates.iter().find(|u| u.tween == tween)
    }
}

/// Owns the scene and every running animation.
///
/// Animations advance only through [`Engine::tick`]. Within a tick they render in creation
/// order, so when two tweens drive the same property the newer one wins; in addition, a tween
/// rendering for the first time takes its properties away from every older live tween.
#[derive(Clone, Debug)]
pub struct Engine {
    scene: Scene,
    anims: Vec<Active>,
    next_id: u64,
    time: f64,
}

impl Engine {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            anims: Vec::new(),
            next_id: 1,
            time: 0.0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Seconds elapsed across all ticks.
    pub fn time(&self) -> f64 {
        self.time
    }

    fn alloc(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, body: Body, paused: bool) -> AnimId {
        let id = AnimId(self.alloc());
        self.anims.push(Active {
            id,
            body,
            time: 0.0,
            paused,
        });
        id
    }

    fn bind(&mut self, selector: &Selector, vars: TweenVars) -> AriseResult<Tween> {
        let targets = self.scene.select(selector);
        if targets.is_empty() {
            tracing::debug!(%selector, "tween targets matched nothing");
        }
        let id = TweenId(self.alloc());
        Tween::new(id, targets, vars)
    }

    /// Start a standalone tween on every element matching `selector`.
    pub fn tween(&mut self, selector: &Selector, vars: TweenVars) -> AriseResult<AnimId> {
        let tween = self.bind(selector, vars)?;
        if tween.vars().immediate_render {
            tween.render_from(&mut self.scene);
        }
        Ok(self.push(Body::Tween(tween), false))
    }

    /// Write `values` immediately to every element matching `selector`.
    pub fn set(&mut self, selector: &Selector, values: &PropSet) -> usize {
        let targets = self.scene.select(selector);
        for &id in &targets {
            if let Some(el) = self.scene.get_mut(id) {
                el.props.apply(values);
            }
        }
        targets.len()
    }

    /// Begin composing a timeline.
    pub fn timeline(&mut self) -> TimelineBuilder<'_> {
        TimelineBuilder {
            engine: self,
            timeline: Timeline::new(),
            paused: false,
        }
    }

    /// Resume a paused animation. Completed or killed animations are gone, so this is a no-op
    /// for them.
    pub fn play(&mut self, id: AnimId) -> bool {
        match self.anims.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                a.paused = false;
                true
            }
            None => false,
        }
    }

    pub fn pause(&mut self, id: AnimId) -> bool {
        match self.anims.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                a.paused = true;
                true
            }
            None => false,
        }
    }

    /// Stop an animation where it is. Returns `false` when it was not running.
    pub fn kill(&mut self, id: AnimId) -> bool {
        let before = self.anims.len();
        self.anims.retain(|a| a.id != id);
        let killed = self.anims.len() != before;
        if killed {
            tracing::debug!(anim = id.0, "animation killed");
        }
        killed
    }

    /// Still registered (running or paused).
    pub fn is_active(&self, id: AnimId) -> bool {
        self.anims.iter().any(|a| a.id == id)
    }

    pub fn is_paused(&self, id: AnimId) -> bool {
        self.anims.iter().any(|a| a.id == id && a.paused)
    }

    pub fn active_count(&self) -> usize {
        self.anims.len()
    }

    /// Local playhead of a registered animation.
    pub fn local_time(&self, id: AnimId) -> Option<f64> {
        self.anims.iter().find(|a| a.id == id).map(|a| a.time)
    }

    /// Advance every unpaused animation by `dt` seconds and render it.
    pub fn tick(&mut self, dt: f64) -> AriseResult<TickReport> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(AriseError::animation("tick delta must be finite and >= 0"));
        }
        self.time += dt;
        let mut report = TickReport {
            time: self.time,
            ..TickReport::default()
        };

        for i in 0..self.anims.len() {
            let active = &mut self.anims[i];
            if active.paused {
                continue;
            }
            active.time += dt;

            let pending: Vec<TweenId> = active
                .body
                .tweens()
                .filter(|t| !t.is_started())
                .map(Tween::id)
                .collect();
            active.body.render(active.time, &mut self.scene, &mut report.updates);

            let fresh: Vec<(TweenId, Vec<(ElementId, Prop)>)> = active
                .body
                .tweens()
                .filter(|t| t.is_started() && pending.contains(&t.id()))
                .map(|t| (t.id(), t.owned()))
                .collect();
            if active.body.is_complete(active.time) {
                report.completed.push(active.id);
            }
            if !fresh.is_empty() {
                self.overwrite(&fresh);
            }
        }

        if !report.completed.is_empty() {
            let done = &report.completed;
            self.anims.retain(|a| !done.contains(&a.id));
            for id in done {
                tracing::trace!(anim = id.0, "animation complete");
            }
        }
        Ok(report)
    }

    fn overwrite(&mut self, fresh: &[(TweenId, Vec<(ElementId, Prop)>)]) {
        for active in &mut self.anims {
            for tween in active.body.tweens_mut() {
                if !tween.is_live() || fresh.iter().any(|(id, _)| *id == tween.id()) {
                    continue;
                }
                for (_, owned) in fresh {
                    for &(element, prop) in owned {
                        tween.strip(element, prop);
                    }
                }
            }
        }
    }
}

/// Collects tweens for a timeline; [`TimelineBuilder::build`] registers it with the engine.
pub struct TimelineBuilder<'a> {
    engine: &'a mut Engine,
    timeline: Timeline,
    paused: bool,
}

impl TimelineBuilder<'_> {
    /// Append a tween at `position`.
    pub fn to(
        &mut self,
        selector: &Selector,
        vars: TweenVars,
        position: Position,
    ) -> AriseResult<TweenId> {
        let tween = self.engine.bind(selector, vars)?;
        let id = tween.id();
        self.timeline.add(tween, position)?;
        Ok(id)
    }

    /// Register the timeline paused; it holds at time zero until [`Engine::play`].
    pub fn paused(&mut self) -> &mut Self {
        self.paused = true;
        self
    }

    /// Resolved start time of a child added earlier.
    pub fn start_of(&self, tween: TweenId) -> Option<f64> {
        self.timeline
            .starts()
            .find(|(id, _)| *id == tween)
            .map(|(_, s)| s)
    }

    pub fn build(self) -> AnimId {
        self.timeline.render_from(&mut self.engine.scene);
        self.engine.push(Body::Timeline(self.timeline), self.paused)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;

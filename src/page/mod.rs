//! The landing page: intro reveal, then the parallax hero.
//!
//! [`LandingPage`] is driven entirely by its host: [`LandingPage::tick`] advances animations,
//! [`LandingPage::pointer_move`] and [`LandingPage::scroll_to`] feed input between ticks.
//! Everything registered while mounted is owned by a [`Mount`] and released on unmount.

pub mod cursor;
pub mod intro;
pub mod mount;
pub mod parallax;
pub mod state;

pub use intro::{IntroController, Reveal};
pub use mount::{Mount, Registration, TriggerId};
pub use parallax::{Activation, ParallaxController};
pub use state::PageState;

use crate::animation::{AnimId, Engine, TickReport};
use crate::config::PageConfig;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{AriseError, AriseResult};
use crate::input::{ListenTarget, Listeners, ScrollEvent, ScrollTrigger, ToggleAction};
use crate::scene::landing::{self, layer};
use crate::scene::{ElementId, ElementSnapshot, Scene, Selector};

/// What a pointer listener does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    /// Window-wide: move the custom cursor.
    CursorFollower,
    /// On `main`: shift the hero layers.
    HeroParallax,
}

#[derive(Clone, Debug)]
struct ScrollBinding {
    id: TriggerId,
    element: ElementId,
    trigger: ScrollTrigger,
    anim: AnimId,
}

/// Serializable state of the page at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    pub time: f64,
    pub state: PageState,
    pub content_visible: bool,
    pub is_loading: bool,
    pub mounted: bool,
    pub scroll_y: f64,
    pub elements: Vec<ElementSnapshot>,
}

/// Headless landing page.
#[derive(Clone, Debug)]
pub struct LandingPage {
    config: PageConfig,
    engine: Engine,
    state: PageState,
    intro: IntroController,
    parallax: ParallaxController,
    listeners: Listeners<Handler>,
    triggers: Vec<ScrollBinding>,
    next_trigger: u64,
    mount: Option<Mount>,
    mounted_before: bool,
}

impl LandingPage {
    /// Validate `config` and lay out the page. Nothing runs until [`LandingPage::mount`].
    pub fn new(config: PageConfig) -> AriseResult<Self> {
        config.validate()?;
        let scene = landing::build(config.viewport)?;
        Ok(Self {
            intro: IntroController::new(config.intro.reveal_threshold),
            engine: Engine::new(scene),
            config,
            state: PageState::default(),
            parallax: ParallaxController::new(),
            listeners: Listeners::new(),
            triggers: Vec::new(),
            next_trigger: 1,
            mount: None,
            mounted_before: false,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn scene(&self) -> &Scene {
        self.engine.scene()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn content_visible(&self) -> bool {
        self.state.content_visible()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn mount_scope(&self) -> Option<&Mount> {
        self.mount.as_ref()
    }

    pub fn listeners(&self) -> &Listeners<Handler> {
        &self.listeners
    }

    pub fn intro(&self) -> &IntroController {
        &self.intro
    }

    pub fn parallax(&self) -> &ParallaxController {
        &self.parallax
    }

    /// Number of live scroll triggers.
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Start the intro and the cursor follower. A no-op while already mounted; mounting again
    /// after [`LandingPage::unmount`] starts over from a freshly laid-out page.
    pub fn mount(&mut self) -> AriseResult<()> {
        if self.mount.is_some() {
            return Ok(());
        }
        if self.mounted_before {
            self.engine = Engine::new(landing::build(self.config.viewport)?);
            self.state = PageState::default();
            self.intro = IntroController::new(self.config.intro.reveal_threshold);
            self.parallax = ParallaxController::new();
        }

        let mut scope = Mount::new();
        let intro = self.intro.start(&mut self.engine, &self.config.intro)?;
        scope.hold(Registration::Animation(intro));
        let cursor = self
            .listeners
            .add(ListenTarget::Window, Handler::CursorFollower);
        scope.hold(Registration::Listener(cursor));

        self.mount = Some(scope);
        self.mounted_before = true;
        tracing::info!("page mounted");
        Ok(())
    }

    /// Release every listener, animation and scroll trigger registered while mounted.
    /// Returns `false` when not mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(mut scope) = self.mount.take() else {
            return false;
        };
        for registration in scope.drain() {
            match registration {
                Registration::Listener(id) => {
                    self.listeners.remove(id);
                }
                Registration::Animation(id) => {
                    self.engine.kill(id);
                }
                Registration::Trigger(id) => self.triggers.retain(|b| b.id != id),
            }
        }
        tracing::info!("page unmounted");
        true
    }

    /// Advance all animations by `dt` seconds and react to what happened.
    #[tracing::instrument(level = "trace", skip(self), fields(state = ?self.state))]
    pub fn tick(&mut self, dt: f64) -> AriseResult<TickReport> {
        let report = self.engine.tick(dt)?;
        if let Some(reveal) = self.intro.observe(&report) {
            self.reveal(reveal);
        }
        self.sync()?;
        Ok(report)
    }

    fn reveal(&mut self, reveal: Reveal) {
        let overlay = self.engine.scene().select(&Selector::class(layer::OVERLAY));
        for id in overlay {
            self.engine.scene_mut().remove(id);
        }
        self.engine.kill(reveal.timeline);
        if self.state.reveal() {
            tracing::info!(time = self.engine.time(), "intro revealed page");
        }
    }

    /// Apply state-dependent registrations. Safe to call any number of times.
    pub fn sync(&mut self) -> AriseResult<()> {
        if self.mount.is_none() || !self.state.content_visible() {
            return Ok(());
        }
        let Some(activation) = self.parallax.activate(&mut self.engine, &self.config)? else {
            return Ok(());
        };

        let mut held = vec![
            Registration::Animation(activation.entrance),
            Registration::Animation(activation.bob),
            Registration::Animation(activation.glow),
            Registration::Animation(activation.scroll_fade),
        ];
        if let Some(main) = self.engine.scene().by_name(layer::MAIN).map(|e| e.id) {
            let id = self
                .listeners
                .add(ListenTarget::Element(main), Handler::HeroParallax);
            held.push(Registration::Listener(id));
        }
        if let Some(about) = self.engine.scene().by_name(layer::ABOUT).map(|e| e.id) {
            let id = TriggerId(self.next_trigger);
            self.next_trigger += 1;
            self.triggers.push(ScrollBinding {
                id,
                element: about,
                trigger: ScrollTrigger::new(self.config.scroll.toggle_actions),
                anim: activation.scroll_fade,
            });
            held.push(Registration::Trigger(id));
        }
        if let Some(scope) = self.mount.as_mut() {
            for registration in held {
                scope.hold(registration);
            }
        }
        self.refresh_triggers();
        Ok(())
    }

    /// Dispatch a pointer move at viewport position `client`. Returns how many listeners fired.
    pub fn pointer_move(&mut self, client: Point) -> AriseResult<usize> {
        let mut fired = 0;
        for (_, target, handler) in self.listeners.snapshot() {
            let hit = match target {
                ListenTarget::Window => true,
                ListenTarget::Element(id) => self
                    .engine
                    .scene()
                    .client_rect(id)
                    .is_some_and(|r| hit_test(r, client)),
            };
            if !hit {
                continue;
            }
            match handler {
                Handler::CursorFollower => {
                    cursor::follow(&mut self.engine, client, &self.config.cursor)?;
                }
                Handler::HeroParallax => {
                    ParallaxController::on_pointer(&mut self.engine, client, &self.config)?;
                }
            }
            fired += 1;
        }
        Ok(fired)
    }

    /// Scroll the document to `y` and fire any trigger crossings.
    pub fn scroll_to(&mut self, y: f64) -> AriseResult<Vec<ScrollEvent>> {
        if !y.is_finite() {
            return Err(AriseError::validation("scroll offset must be finite"));
        }
        self.engine.scene_mut().set_scroll(y);
        Ok(self.refresh_triggers())
    }

    fn refresh_triggers(&mut self) -> Vec<ScrollEvent> {
        let scene = self.engine.scene();
        let (vh, scroll_y) = (scene.viewport().height, scene.scroll_y());
        let mut fired = Vec::new();
        for binding in &mut self.triggers {
            let Some(rect) = self.engine.scene().layout_rect(binding.element) else {
                continue;
            };
            for event in binding.trigger.update(rect, vh, scroll_y) {
                match binding.trigger.actions.action_for(event) {
                    ToggleAction::Play => {
                        self.engine.play(binding.anim);
                    }
                    ToggleAction::Pause => {
                        self.engine.pause(binding.anim);
                    }
                    ToggleAction::None => {}
                }
                tracing::debug!(trigger = binding.id.0, ?event, scroll_y, "scroll trigger");
                fired.push(event);
            }
        }
        fired
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let scene = self.engine.scene();
        PageSnapshot {
            time: self.engine.time(),
            state: self.state,
            content_visible: self.content_visible(),
            is_loading: self.is_loading(),
            mounted: self.is_mounted(),
            scroll_y: scene.scroll_y(),
            elements: scene.snapshot(),
        }
    }
}

/// Edges count as inside, so a pointer on the last pixel row or column still hits.
fn hit_test(r: Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/page/landing_page.rs"]
mod tests;

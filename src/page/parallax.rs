use crate::animation::{AnimId, Engine, Position, Prop, PropSet, Repeat, Resolver, TweenVars};
use crate::config::PageConfig;
use crate::foundation::core::Point;
use crate::foundation::error::AriseResult;
use crate::input::{PointerOffset, parallax_moves};
use crate::scene::landing::layer;
use crate::scene::{Element, Selector};

/// Animations registered by one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub entrance: AnimId,
    pub bob: AnimId,
    pub glow: AnimId,
    /// Paused until its scroll trigger fires.
    pub scroll_fade: AnimId,
}

/// Entrance, loops, scroll fade-in and pointer parallax of the revealed hero.
#[derive(Clone, Debug, Default)]
pub struct ParallaxController {
    active: Option<Activation>,
}

fn settle(_: &Element) -> PropSet {
    PropSet::new().with(Prop::Scale, 1.0).with(Prop::Rotate, 0.0)
}

/// Batched background/character entrance: the character lands smaller and anchored to the
/// bottom center.
fn settle_layer(el: &Element) -> PropSet {
    if el.has_class(layer::CHARACTER) {
        PropSet::new()
            .with(Prop::Scale, 0.6)
            .with(Prop::XPercent, -50.0)
            .with(Prop::BottomPercent, -30.0)
            .with(Prop::Rotate, 0.0)
    } else {
        settle(el)
    }
}

impl ParallaxController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn activation(&self) -> Option<Activation> {
        self.active
    }

    /// Register everything the revealed page runs. Returns `None` when already active.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn activate(
        &mut self,
        engine: &mut Engine,
        cfg: &PageConfig,
    ) -> AriseResult<Option<Activation>> {
        if self.active.is_some() {
            return Ok(None);
        }
        let activation = Activation {
            entrance: entrance(engine, cfg)?,
            bob: bob(engine, cfg)?,
            glow: glow(engine, cfg)?,
            scroll_fade: scroll_fade(engine, cfg)?,
        };
        tracing::info!(?activation, "parallax active");
        self.active = Some(activation);
        Ok(Some(activation))
    }

    /// Retarget the hero layers toward the pointer. `false` when `main` has no box to measure.
    pub fn on_pointer(engine: &mut Engine, client: Point, cfg: &PageConfig) -> AriseResult<bool> {
        let Some(bounds) = engine
            .scene()
            .by_name(layer::MAIN)
            .and_then(|el| engine.scene().client_rect(el.id))
        else {
            return Ok(false);
        };
        let p = &cfg.pointer;
        let Some(offset) = PointerOffset::compute(client, bounds, p.x_gain, p.y_gain) else {
            return Ok(false);
        };
        for mv in parallax_moves(&offset, p) {
            engine.tween(
                &mv.selector,
                TweenVars::to(mv.values).duration(mv.duration).ease(mv.ease),
            )?;
        }
        Ok(true)
    }
}

fn entrance(engine: &mut Engine, cfg: &PageConfig) -> AriseResult<AnimId> {
    let e = &cfg.entrance;
    let vars = |resolver: Resolver| {
        TweenVars::per_element(resolver)
            .duration(e.duration)
            .ease(e.ease)
    };
    let mut tl = engine.timeline();
    tl.to(&Selector::class(layer::MAIN), vars(settle), Position::AtEnd)?;
    tl.to(
        &Selector::class(layer::SKY),
        vars(settle),
        Position::Relative(e.sky_offset),
    )?;
    tl.to(
        &Selector::class(layer::BG).or(Selector::class(layer::CHARACTER)),
        vars(settle_layer),
        Position::Relative(e.bg_offset),
    )?;
    tl.to(
        &Selector::class(layer::TEXT),
        vars(settle),
        Position::Relative(e.text_offset),
    )?;
    Ok(tl.build())
}

fn bob(engine: &mut Engine, cfg: &PageConfig) -> AriseResult<AnimId> {
    let l = &cfg.loops;
    engine.tween(
        &Selector::class(layer::CHARACTER),
        TweenVars::to(PropSet::new().with(Prop::Y, l.bob_offset_y))
            .duration(l.bob_duration)
            .ease(l.bob_ease)
            .repeat(Repeat::Infinite)
            .yoyo(true),
    )
}

fn glow(engine: &mut Engine, cfg: &PageConfig) -> AriseResult<AnimId> {
    let l = &cfg.loops;
    engine.tween(
        &Selector::class(layer::GLOW),
        TweenVars::from_to(
            PropSet::new().with(Prop::Opacity, l.glow_min_opacity),
            PropSet::new().with(Prop::Opacity, l.glow_max_opacity),
        )
        .duration(l.glow_duration)
        .ease(l.glow_ease)
        .repeat(Repeat::Infinite)
        .yoyo(true),
    )
}

fn scroll_fade(engine: &mut Engine, cfg: &PageConfig) -> AriseResult<AnimId> {
    let s = &cfg.scroll;
    let slide = |x: f64| {
        TweenVars::from_to(
            PropSet::new().with(Prop::X, x).with(Prop::Opacity, 0.0),
            PropSet::new().with(Prop::X, 0.0).with(Prop::Opacity, 1.0),
        )
        .duration(s.duration)
        .ease(s.ease)
    };
    let mut tl = engine.timeline();
    tl.paused();
    tl.to(
        &Selector::class(layer::ABOUT_IMAGE),
        slide(-s.distance),
        Position::At(0.0),
    )?;
    tl.to(
        &Selector::class(layer::ABOUT_COPY),
        slide(s.distance),
        Position::At(s.stagger),
    )?;
    Ok(tl.build())
}

#[cfg(test)]
#[path = "../../tests/unit/page/parallax.rs"]
mod tests;

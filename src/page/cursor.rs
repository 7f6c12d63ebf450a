use crate::animation::{AnimId, Engine, Prop, PropSet, TweenVars};
use crate::config::CursorConfig;
use crate::foundation::core::Point;
use crate::foundation::error::AriseResult;
use crate::scene::Selector;
use crate::scene::landing::layer;

/// Ease the cursor element so its center sits on `client`. `None` when the page has no cursor.
pub fn follow(engine: &mut Engine, client: Point, cfg: &CursorConfig) -> AriseResult<Option<AnimId>> {
    let Some(cursor) = engine.scene().by_name(layer::CURSOR) else {
        return Ok(None);
    };
    let (w, h) = (cursor.layout.width(), cursor.layout.height());
    let target = PropSet::new()
        .with(Prop::X, client.x - w / 2.0)
        .with(Prop::Y, client.y - h / 2.0);
    engine
        .tween(
            &Selector::class(layer::CURSOR),
            TweenVars::to(target).duration(cfg.duration).ease(cfg.ease),
        )
        .map(Some)
}

//! Layer tree of the landing page, with the pre-animation transforms its stylesheet applies.

use crate::animation::props::{Prop, PropSet};
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::AriseResult;
use crate::scene::{Element, Scene};

/// Class names used by the page controllers.
pub mod layer {
    pub const OVERLAY: &str = "svg";
    pub const MASK_GROUP: &str = "vi-mask-group";
    pub const CURSOR: &str = "cursor";
    pub const MAIN: &str = "main";
    pub const LANDING: &str = "landing";
    pub const SKY: &str = "sky";
    pub const BG: &str = "bg";
    pub const TEXT: &str = "text";
    pub const CHARACTER: &str = "character";
    pub const GLOW: &str = "glow";
    pub const ABOUT: &str = "about";
    pub const ABOUT_IMAGE: &str = "limg";
    pub const ABOUT_COPY: &str = "rg";
}

const CURSOR_SIZE: f64 = 20.0;
const TEXT_SIZE: (f64, f64) = (320.0, 200.0);

/// Build the full page for `viewport`.
///
/// The hero (`main`) starts tilted and zoomed in; its layers carry their own oversized, rotated
/// starting transforms which the entrance timeline later settles.
pub fn build(viewport: Viewport) -> AriseResult<Scene> {
    let (w, h) = (viewport.width, viewport.height);
    let mut scene = Scene::new(viewport);

    let overlay = scene.add(
        Element::new(layer::OVERLAY, viewport.rect())
            .class(layer::OVERLAY)
            .fixed(),
    )?;
    scene.add(
        Element::new(
            layer::MASK_GROUP,
            Rect::new(w * 0.25, h * 0.375, w * 0.75, h * 0.625),
        )
        .class(layer::MASK_GROUP)
        .child_of(overlay),
    )?;

    let main = scene.add(
        Element::new(layer::MAIN, Rect::new(0.0, 0.0, w, 2.0 * h))
            .class(layer::MAIN)
            .styled(
                PropSet::new()
                    .with(Prop::Rotate, -10.0)
                    .with(Prop::Scale, 1.7),
            ),
    )?;

    let landing = scene.add(
        Element::new(layer::LANDING, Rect::new(0.0, 0.0, w, h))
            .class(layer::LANDING)
            .child_of(main),
    )?;
    scene.add(
        Element::new(layer::SKY, Rect::new(0.0, 0.0, w, h))
            .class(layer::SKY)
            .child_of(landing)
            .styled(
                PropSet::new()
                    .with(Prop::Scale, 1.5)
                    .with(Prop::Rotate, -20.0),
            ),
    )?;
    scene.add(
        Element::new(layer::BG, Rect::new(0.0, 0.0, w, h))
            .class(layer::BG)
            .child_of(landing)
            .styled(
                PropSet::new()
                    .with(Prop::Scale, 1.8)
                    .with(Prop::Rotate, -5.0),
            ),
    )?;

    let (tw, th) = TEXT_SIZE;
    let text_right = w * 0.88;
    scene.add(
        Element::new(
            layer::TEXT,
            Rect::new(text_right - tw, h / 3.0, text_right, h / 3.0 + th),
        )
        .class(layer::TEXT)
        .child_of(landing)
        .styled(
            PropSet::new()
                .with(Prop::Scale, 1.4)
                .with(Prop::Rotate, -10.0),
        ),
    )?;

    let character_box = Rect::new(w * 0.5, 0.0, w * 0.85, h * 1.1);
    scene.add(
        Element::new(layer::GLOW, character_box)
            .class(layer::GLOW)
            .child_of(landing)
            .bottom_anchored()
            .styled(
                PropSet::new()
                    .with(Prop::XPercent, -50.0)
                    .with(Prop::BottomPercent, -30.0)
                    .with(Prop::Scale, 0.7)
                    .with(Prop::Opacity, 0.4),
            ),
    )?;
    scene.add(
        Element::new(layer::CHARACTER, character_box)
            .class(layer::CHARACTER)
            .child_of(landing)
            .bottom_anchored()
            .styled(
                PropSet::new()
                    .with(Prop::XPercent, -50.0)
                    .with(Prop::BottomPercent, -250.0)
                    .with(Prop::Scale, 1.2),
            ),
    )?;

    let about = scene.add(
        Element::new(layer::ABOUT, Rect::new(0.0, h, w, 2.0 * h))
            .class(layer::ABOUT)
            .child_of(main),
    )?;
    scene.add(
        Element::new(layer::ABOUT_IMAGE, Rect::new(0.0, h * 0.1, w * 0.5, h * 0.9))
            .class(layer::ABOUT_IMAGE)
            .child_of(about),
    )?;
    scene.add(
        Element::new(layer::ABOUT_COPY, Rect::new(w * 0.44, h * 0.1, w, h * 0.9))
            .class(layer::ABOUT_COPY)
            .child_of(about),
    )?;

    scene.add(
        Element::new(layer::CURSOR, Rect::new(0.0, 0.0, CURSOR_SIZE, CURSOR_SIZE))
            .class(layer::CURSOR)
            .fixed(),
    )?;

    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/landing.rs"]
mod tests;

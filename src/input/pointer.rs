use crate::animation::ease::Ease;
use crate::animation::props::{Prop, PropSet};
use crate::config::{LayerResponse, PointerConfig};
use crate::foundation::core::{Point, Rect};
use crate::scene::Selector;
use crate::scene::landing::layer;

/// Pointer position normalized against a container's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PointerOffset {
    /// `(clientX - left) / width - 0.5`, so `-0.5..=0.5` inside the box.
    pub x: f64,
    pub y: f64,
    /// `x * x_gain`.
    pub x_move: f64,
    /// `y * y_gain`.
    pub y_move: f64,
}

impl PointerOffset {
    /// Linear offset of `client` within `bounds`. `None` for a degenerate box.
    pub fn compute(client: Point, bounds: Rect, x_gain: f64, y_gain: f64) -> Option<Self> {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }
        let x = (client.x - bounds.x0) / bounds.width() - 0.5;
        let y = (client.y - bounds.y0) / bounds.height() - 0.5;
        Some(Self {
            x,
            y,
            x_move: x * x_gain,
            y_move: y * y_gain,
        })
    }
}

/// One layer's retarget in response to a pointer move.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerMove {
    pub selector: Selector,
    pub values: PropSet,
    pub duration: f64,
    pub ease: Ease,
}

fn layer_move(
    selector: Selector,
    (x_prop, y_prop): (Prop, Prop),
    response: &LayerResponse,
    offset: &PointerOffset,
) -> LayerMove {
    LayerMove {
        selector,
        values: PropSet::new()
            .with(x_prop, offset.x_move * response.x_factor)
            .with(y_prop, offset.y_move * response.y_factor),
        duration: response.duration,
        ease: response.ease,
    }
}

/// Per-layer targets for the hero parallax: text moves by percent of its own size, sky and
/// background by pixels.
pub fn parallax_moves(offset: &PointerOffset, cfg: &PointerConfig) -> [LayerMove; 3] {
    [
        layer_move(
            Selector::path(&[layer::MAIN, layer::TEXT]),
            (Prop::XPercent, Prop::YPercent),
            &cfg.text,
            offset,
        ),
        layer_move(Selector::class(layer::SKY), (Prop::X, Prop::Y), &cfg.sky, offset),
        layer_move(Selector::class(layer::BG), (Prop::X, Prop::Y), &cfg.bg, offset),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;

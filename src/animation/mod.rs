//! Tween/timeline engine.

pub mod ease;
pub mod engine;
pub mod props;
pub mod timeline;
pub mod tween;

pub use ease::{Ease, EaseDir};
pub use engine::{AnimId, Engine, TickReport, TimelineBuilder};
pub use props::{Lerp, Prop, PropSet, Props};
pub use timeline::{Position, Timeline};
pub use tween::{Repeat, Resolver, TargetValues, Tween, TweenId, TweenUpdate, TweenVars};

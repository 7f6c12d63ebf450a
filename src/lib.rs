#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod foundation;
pub mod input;
pub mod page;
pub mod render;
pub mod scene;
pub mod script;

pub use animation::{AnimId, Ease, EaseDir, Engine, Prop, PropSet, Repeat, TweenVars};
pub use config::PageConfig;
pub use foundation::core::{Fps, FrameIndex, Point, Rect, Viewport};
pub use foundation::error::{AriseError, AriseResult};
pub use page::{LandingPage, PageSnapshot, PageState};
pub use scene::{Scene, Selector};
pub use script::{Frame, Input, MAX_FRAMES, Script, ScriptEvent, Simulation, simulate};

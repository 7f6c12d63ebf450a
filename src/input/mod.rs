//! Host input: pointer moves, scroll position and listener bookkeeping.

pub mod listeners;
pub mod pointer;
pub mod scroll;

pub use listeners::{ListenTarget, ListenerId, Listeners};
pub use pointer::{LayerMove, PointerOffset, parallax_moves};
pub use scroll::{ScrollEvent, ScrollTrigger, ToggleAction, ToggleActions};

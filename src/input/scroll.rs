use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Rect;
use crate::foundation::error::AriseError;

/// Boundary crossing reported by a [`ScrollTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ScrollEvent {
    /// Scrolling forward past the start.
    Enter,
    /// Scrolling forward past the end.
    Leave,
    /// Scrolling backward past the end.
    EnterBack,
    /// Scrolling backward past the start.
    LeaveBack,
}

/// What to do with the linked animation on a crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Pause,
}

/// Actions for `enter leave enterBack leaveBack`, in that order.
///
/// Serialized as the four-word string, e.g. `"play pause play pause"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    /// `"play none none none"`: play on first entry, ignore every other crossing.
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl ToggleActions {
    pub fn action_for(&self, event: ScrollEvent) -> ToggleAction {
        match event {
            ScrollEvent::Enter => self.on_enter,
            ScrollEvent::Leave => self.on_leave,
            ScrollEvent::EnterBack => self.on_enter_back,
            ScrollEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = AriseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split_whitespace()
            .map(|word| match word {
                "none" => Ok(ToggleAction::None),
                "play" => Ok(ToggleAction::Play),
                "pause" => Ok(ToggleAction::Pause),
                other => Err(AriseError::validation(format!(
                    "unsupported toggle action '{other}'"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let [on_enter, on_leave, on_enter_back, on_leave_back] = parsed[..] else {
            return Err(AriseError::validation(format!(
                "toggle actions need exactly four words, got '{s}'"
            )));
        };
        Ok(Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        })
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Play => "play",
            Self::Pause => "pause",
        })
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = AriseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(value: ToggleActions) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Watches a trigger element against the viewport.
///
/// The active zone runs from the trigger's top meeting the viewport bottom (`top bottom`) to the
/// trigger's bottom meeting the viewport top (`bottom top`).
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    pub actions: ToggleActions,
    zone: Option<Zone>,
}

impl ScrollTrigger {
    pub fn new(actions: ToggleActions) -> Self {
        Self {
            actions,
            zone: None,
        }
    }

    /// Scroll offsets `(start, end)` bounding the active zone for a trigger at `trigger` in
    /// document space.
    pub fn range(trigger: Rect, viewport_height: f64) -> (f64, f64) {
        (trigger.y0 - viewport_height, trigger.y1)
    }

    /// Re-evaluate at `scroll_y` and report every boundary crossed since the last call.
    ///
    /// The first call only establishes the starting zone, except that starting inside or past
    /// the zone counts as having entered (and left) it.
    pub fn update(
        &mut self,
        trigger: Rect,
        viewport_height: f64,
        scroll_y: f64,
    ) -> Vec<ScrollEvent> {
        let (start, end) = Self::range(trigger, viewport_height);
        // Both boundaries are exclusive: sitting exactly on `start` is still before the zone.
        let zone = if scroll_y <= start {
            Zone::Before
        } else if scroll_y < end {
            Zone::Active
        } else {
            Zone::After
        };
        let prev = self.zone.replace(zone).unwrap_or(Zone::Before);

        use ScrollEvent::*;
        match (prev, zone) {
            (Zone::Before, Zone::Active) => vec![Enter],
            (Zone::Before, Zone::After) => vec![Enter, Leave],
            (Zone::Active, Zone::After) => vec![Leave],
            (Zone::After, Zone::Active) => vec![EnterBack],
            (Zone::After, Zone::Before) => vec![EnterBack, LeaveBack],
            (Zone::Active, Zone::Before) => vec![LeaveBack],
            _ => Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.zone == Some(Zone::Active)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/scroll.rs"]
mod tests;

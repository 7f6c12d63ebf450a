use crate::animation::AnimId;
use crate::input::ListenerId;

/// Handle of a scroll trigger owned by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerId(pub u64);

/// One effect registered while mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Listener(ListenerId),
    Animation(AnimId),
    Trigger(TriggerId),
}

/// Everything a mounted page has registered, torn down together on unmount.
#[derive(Clone, Debug, Default)]
pub struct Mount {
    registrations: Vec<Registration>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Hand over every registration, newest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Registration> + '_ {
        self.registrations.drain(..).rev()
    }
}

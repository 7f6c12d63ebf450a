use crate::scene::ElementId;

/// Handle returned by [`Listeners::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Where a pointer listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenTarget {
    /// Every pointer move on the page.
    Window,
    /// Pointer moves whose position falls inside the element's bounding box.
    Element(ElementId),
}

/// Registry of pointer-move handlers.
///
/// Handlers are plain values (`H`) the owner dispatches on; the registry only tracks who is
/// listening where, so tearing a listener down is removing its entry.
#[derive(Clone, Debug)]
pub struct Listeners<H> {
    entries: Vec<(ListenerId, ListenTarget, H)>,
    next_id: u64,
}

impl<H> Default for Listeners<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<H: Copy> Listeners<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: ListenTarget, handler: H) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, target, handler));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(lid, _, _)| *lid != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of registrations in the order they were added.
    pub fn snapshot(&self) -> Vec<(ListenerId, ListenTarget, H)> {
        self.entries.clone()
    }

    /// Number of listeners using `handler`.
    pub fn count(&self, handler: H) -> usize
    where
        H: PartialEq,
    {
        self.entries.iter().filter(|(_, _, h)| *h == handler).count()
    }
}

//! Element tree the animation engine writes into.

pub mod element;
pub mod landing;
pub mod selector;

pub use element::{Element, ElementId};
pub use selector::{Selector, Step};

use crate::animation::props::Props;
use crate::foundation::core::{Affine, Rect, Vec2, Viewport};
use crate::foundation::error::{AriseError, AriseResult};

/// Flat, parent-before-child list of elements plus the host viewport and scroll position.
#[derive(Clone, Debug)]
pub struct Scene {
    viewport: Viewport,
    elements: Vec<Element>,
    scroll_y: f64,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            scroll_y: 0.0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll the document. Negative values clamp to the top.
    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Insert an element. Names must be unique and parents must already exist.
    pub fn add(&mut self, mut element: Element) -> AriseResult<ElementId> {
        if self.by_name(&element.name).is_some() {
            return Err(AriseError::scene(format!(
                "duplicate element name '{}'",
                element.name
            )));
        }
        if let Some(parent) = element.parent
            && self.get(parent).is_none()
        {
            return Err(AriseError::scene(format!(
                "element '{}' references unknown parent {:?}",
                element.name, parent
            )));
        }
        let id = ElementId(
            u32::try_from(self.elements.len())
                .map_err(|_| AriseError::scene("too many elements"))?,
        );
        element.id = id;
        self.elements.push(element);
        Ok(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Current props of a live element.
    pub fn props(&self, id: ElementId) -> Option<&Props> {
        self.get(id).filter(|e| !e.removed).map(|e| &e.props)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Live elements matching `selector`, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| {
                !e.removed && selector.paths().iter().any(|path| self.matches(e, path))
            })
            .map(|e| e.id)
            .collect()
    }

    fn matches(&self, element: &Element, steps: &[Step]) -> bool {
        let Some((last, ancestors)) = steps.split_last() else {
            return false;
        };
        if !step_matches(element, last) {
            return false;
        }

        // Greedy walk up the parent chain, innermost ancestor step first.
        let mut remaining = ancestors;
        let mut cursor = element.parent;
        while let Some((step, rest)) = remaining.split_last() {
            let Some(parent) = cursor.and_then(|id| self.get(id)) else {
                return false;
            };
            if step_matches(parent, step) {
                remaining = rest;
            }
            cursor = parent.parent;
        }
        true
    }

    /// Detach an element and its descendants from the rendered tree.
    ///
    /// Returns `false` when the element was already removed.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let Some(el) = self.get(id) else {
            return false;
        };
        if el.removed {
            return false;
        }
        let mut doomed = vec![id];
        // Parents precede children, so one forward pass collects every descendant.
        for e in &self.elements {
            if let Some(p) = e.parent
                && doomed.contains(&p)
            {
                doomed.push(e.id);
            }
        }
        for d in doomed {
            if let Some(e) = self.get_mut(d) {
                e.removed = true;
            }
        }
        true
    }

    /// Transform from an element's untransformed box to document space.
    pub fn world_transform(&self, id: ElementId) -> Option<Affine> {
        let el = self.get(id)?;
        match el.parent.and_then(|p| self.get(p)) {
            Some(parent) => {
                let parent_world = self.world_transform(parent.id)?;
                let parent_box = parent.layout.with_origin((0.0, 0.0));
                Some(
                    parent_world
                        * Affine::translate(parent.layout.origin().to_vec2())
                        * el.local_transform(parent_box),
                )
            }
            None => Some(el.local_transform(self.viewport.rect())),
        }
    }

    /// Axis-aligned bounds in document space, ignoring scroll.
    pub fn document_rect(&self, id: ElementId) -> Option<Rect> {
        let el = self.get(id).filter(|e| !e.removed)?;
        let world = self.world_transform(id)?;
        Some(world.transform_rect_bbox(el.layout))
    }

    /// Layout box in document space with every transform ignored, like an offset position.
    pub fn layout_rect(&self, id: ElementId) -> Option<Rect> {
        let el = self.get(id).filter(|e| !e.removed)?;
        let mut offset = Vec2::ZERO;
        let mut cursor = el.parent.and_then(|p| self.get(p));
        while let Some(parent) = cursor {
            offset += parent.layout.origin().to_vec2();
            cursor = parent.parent.and_then(|p| self.get(p));
        }
        Some(el.layout + offset)
    }

    /// Axis-aligned bounds in viewport (client) space, like `getBoundingClientRect`.
    pub fn client_rect(&self, id: ElementId) -> Option<Rect> {
        let rect = self.document_rect(id)?;
        if self.is_fixed(id) {
            Some(rect)
        } else {
            Some(rect - Vec2::new(0.0, self.scroll_y))
        }
    }

    /// Whether the element or one of its ancestors ignores page scroll.
    pub fn is_fixed(&self, id: ElementId) -> bool {
        let mut cursor = self.get(id);
        while let Some(el) = cursor {
            if el.fixed {
                return true;
            }
            cursor = el.parent.and_then(|p| self.get(p));
        }
        false
    }

    /// Opacity multiplied through the ancestor chain.
    pub fn effective_opacity(&self, id: ElementId) -> f64 {
        let mut opacity = 1.0;
        let mut cursor = self.get(id);
        while let Some(el) = cursor {
            opacity *= el.props.opacity;
            cursor = el.parent.and_then(|p| self.get(p));
        }
        opacity
    }

    /// Serializable view of every element.
    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        self.elements
            .iter()
            .map(|e| ElementSnapshot {
                name: e.name.clone(),
                removed: e.removed,
                props: e.props,
                client_rect: self
                    .client_rect(e.id)
                    .map(|r| [r.x0, r.y0, r.x1, r.y1]),
            })
            .collect()
    }
}

fn step_matches(element: &Element, step: &Step) -> bool {
    match step {
        Step::Class(c) => element.has_class(c),
        Step::Name(n) => element.name == *n,
    }
}

/// Evaluated state of one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSnapshot {
    pub name: String,
    pub removed: bool,
    pub props: Props,
    /// `[x0, y0, x1, y1]` in viewport space; `None` once removed.
    pub client_rect: Option<[f64; 4]>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;

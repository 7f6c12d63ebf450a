use crate::animation::props::{PropSet, Props};
use crate::foundation::core::{Affine, Point, Rect, Vec2};

/// Index of an element inside its [`Scene`](crate::scene::Scene).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// One visual layer: a named box with classes and animatable properties.
#[derive(Clone, Debug)]
pub struct Element {
    pub id: ElementId,
    /// Unique name, addressable with `#name` selectors.
    pub name: String,
    pub classes: Vec<String>,
    pub parent: Option<ElementId>,
    /// Untransformed box in the parent's coordinate space.
    pub layout: Rect,
    /// Transform origin as a fraction of the box (`0.5, 0.5` is the center).
    pub origin: Vec2,
    /// Position from the parent's bottom edge using [`Props::bottom_percent`].
    pub bottom_anchored: bool,
    /// Fixed elements ignore page scroll.
    pub fixed: bool,
    pub props: Props,
    pub removed: bool,
}

impl Element {
    /// New element with identity props, centered origin and no classes.
    pub fn new(name: impl Into<String>, layout: Rect) -> Self {
        Self {
            id: ElementId(0),
            name: name.into(),
            classes: Vec::new(),
            parent: None,
            layout,
            origin: Vec2::new(0.5, 0.5),
            bottom_anchored: false,
            fixed: false,
            props: Props::default(),
            removed: false,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child_of(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn bottom_anchored(mut self) -> Self {
        self.bottom_anchored = true;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Initial property values, as a stylesheet would set them.
    pub fn styled(mut self, set: PropSet) -> Self {
        self.props.apply(&set);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Transform from this element's untransformed box into parent space.
    ///
    /// `parent_box` is the parent's untransformed layout box, used for bottom anchoring.
    pub fn local_transform(&self, parent_box: Rect) -> Affine {
        let p = &self.props;
        let w = self.layout.width();
        let h = self.layout.height();

        let mut offset = Vec2::new(p.x + p.x_percent / 100.0 * w, p.y + p.y_percent / 100.0 * h);
        if self.bottom_anchored {
            let top = parent_box.height() - h - p.bottom_percent / 100.0 * parent_box.height();
            offset.y += top - self.layout.y0;
        }

        let pivot = Point::new(
            self.layout.x0 + self.origin.x * w,
            self.layout.y0 + self.origin.y * h,
        )
        .to_vec2();

        Affine::translate(offset)
            * Affine::translate(pivot)
            * Affine::rotate(p.rotate.to_radians())
            * Affine::scale(p.scale)
            * Affine::translate(-pivot)
    }
}

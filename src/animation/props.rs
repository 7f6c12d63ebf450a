use std::collections::BTreeMap;

/// Animatable element property.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    /// Horizontal translation in pixels.
    X,
    /// Horizontal translation in percent of the element's own width.
    XPercent,
    /// Vertical translation in pixels.
    Y,
    /// Vertical translation in percent of the element's own height.
    YPercent,
    /// Distance of the element's bottom edge from its parent's bottom, in percent of the parent
    /// height. Only meaningful for bottom-anchored elements.
    BottomPercent,
    /// Rotation in degrees, clockwise.
    Rotate,
    /// Uniform scale factor.
    Scale,
    /// Opacity in `[0, 1]`.
    Opacity,
}

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Sparse set of property values. Properties not present are left untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropSet(BTreeMap<Prop, f64>);

impl PropSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.0.insert(prop, value);
        self
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        self.0.insert(prop, value);
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.0.get(&prop).copied()
    }

    pub fn remove(&mut self, prop: Prop) -> Option<f64> {
        self.0.remove(&prop)
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.0.contains_key(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in property order.
    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.0.keys().copied()
    }

    /// Return `true` when every value is finite.
    pub fn is_finite(&self) -> bool {
        self.0.values().all(|v| v.is_finite())
    }
}

impl FromIterator<(Prop, f64)> for PropSet {
    fn from_iter<I: IntoIterator<Item = (Prop, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Lerp for PropSet {
    /// Interpolates keys present in both sets; keys only in `b` jump to their target.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        b.iter()
            .map(|(prop, to)| match a.get(prop) {
                Some(from) => (prop, f64::lerp(&from, &to, t)),
                None => (prop, to),
            })
            .collect()
    }
}

/// Full property state of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Props {
    pub x: f64,
    pub x_percent: f64,
    pub y: f64,
    pub y_percent: f64,
    pub bottom_percent: f64,
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            x: 0.0,
            x_percent: 0.0,
            y: 0.0,
            y_percent: 0.0,
            bottom_percent: 0.0,
            rotate: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl Props {
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::X => self.x,
            Prop::XPercent => self.x_percent,
            Prop::Y => self.y,
            Prop::YPercent => self.y_percent,
            Prop::BottomPercent => self.bottom_percent,
            Prop::Rotate => self.rotate,
            Prop::Scale => self.scale,
            Prop::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        let slot = match prop {
            Prop::X => &mut self.x,
            Prop::XPercent => &mut self.x_percent,
            Prop::Y => &mut self.y,
            Prop::YPercent => &mut self.y_percent,
            Prop::BottomPercent => &mut self.bottom_percent,
            Prop::Rotate => &mut self.rotate,
            Prop::Scale => &mut self.scale,
            Prop::Opacity => &mut self.opacity,
        };
        *slot = if prop == Prop::Opacity {
            value.clamp(0.0, 1.0)
        } else {
            value
        };
    }

    /// Apply every value of `set`.
    pub fn apply(&mut self, set: &PropSet) {
        for (prop, value) in set.iter() {
            self.set(prop, value);
        }
    }

    /// Snapshot the current values of the properties named by `keys`.
    pub fn capture(&self, keys: &PropSet) -> PropSet {
        keys.props().map(|p| (p, self.get(p))).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/props.rs"]
mod tests;

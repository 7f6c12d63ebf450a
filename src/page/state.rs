/// Page lifecycle. `Loading → Revealed` is the only transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    #[default]
    Loading,
    Revealed,
}

impl PageState {
    /// Whether the hero content is shown.
    pub fn content_visible(self) -> bool {
        self == Self::Revealed
    }

    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Move to `Revealed`. Returns `false` if already there.
    pub fn reveal(&mut self) -> bool {
        if *self == Self::Revealed {
            return false;
        }
        *self = Self::Revealed;
        true
    }
}

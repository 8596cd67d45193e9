/// Load progress of a tile's media element. `Loaded` and `Failed` are terminal
/// for a mount; a remount starts again from `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// `load` / `loadeddata` fired. Returns true if the state changed.
    pub fn on_loaded(&mut self) -> bool {
        self.settle(LoadState::Loaded)
    }

    /// `error` fired. Returns true if the state changed.
    pub fn on_failed(&mut self) -> bool {
        self.settle(LoadState::Failed)
    }

    fn settle(&mut self, next: LoadState) -> bool {
        if *self != LoadState::Loading {
            return false;
        }
        *self = next;
        true
    }

    /// State read back from an element that may have finished before its
    /// listeners were attached, e.g. media rendered on the server. `complete`
    /// means the element stopped fetching, `has_data` that it has a frame.
    pub fn from_element(complete: bool, has_data: bool, errored: bool) -> LoadState {
        if errored {
            LoadState::Failed
        } else if has_data {
            LoadState::Loaded
        } else if complete {
            LoadState::Failed
        } else {
            LoadState::Loading
        }
    }

    /// Catch up with `observed`. Returns true if the state changed.
    pub fn sync(&mut self, observed: LoadState) -> bool {
        match observed {
            LoadState::Loading => false,
            next => self.settle(next),
        }
    }

    pub fn shows_placeholder(self) -> bool {
        self == LoadState::Loading
    }

    pub fn shows_fallback(self) -> bool {
        self == LoadState::Failed
    }

    pub fn media_class(self) -> &'static str {
        match self {
            LoadState::Loading => "blur-lg scale-[1.02]",
            LoadState::Loaded => "blur-0 scale-100",
            LoadState::Failed => "opacity-0",
        }
    }
}

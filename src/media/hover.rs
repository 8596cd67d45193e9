#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Play,
    Pause,
}

/// Poster/video cross-fade driven by pointer enter and leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverPreview {
    enabled: bool,
    hovering: bool,
    /// Bumped on every enter edge, so late play() results can be matched.
    session: u32,
    rejected: bool,
}

impl HoverPreview {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Only the first enter of a hover session asks for playback.
    pub fn enter(&mut self) -> Option<Playback> {
        if !self.enabled || self.hovering {
            return None;
        }
        self.hovering = true;
        self.rejected = false;
        self.session = self.session.wrapping_add(1);
        Some(Playback::Play)
    }

    /// Leaving always pauses, however many enters came before.
    pub fn leave(&mut self) -> Option<Playback> {
        if !self.enabled {
            return None;
        }
        self.hovering = false;
        self.rejected = false;
        Some(Playback::Pause)
    }

    /// Current hover session, to hand to [`HoverPreview::play_rejected`].
    pub fn session(&self) -> u32 {
        self.session
    }

    /// The browser refused to play during `session`: show the poster again
    /// until the pointer leaves. Results from older sessions are ignored.
    pub fn play_rejected(&mut self, session: u32) -> bool {
        if !self.hovering || session != self.session || self.rejected {
            return false;
        }
        self.rejected = true;
        true
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    fn shows_video(&self) -> bool {
        self.enabled && self.hovering && !self.rejected
    }

    pub fn video_class(&self) -> &'static str {
        if self.shows_video() {
            "opacity-100"
        } else {
            "opacity-0"
        }
    }

    pub fn poster_class(&self) -> &'static str {
        if self.shows_video() {
            "opacity-0"
        } else {
            "opacity-100"
        }
    }
}

/// One-shot "scrolled into view" detector.
///
/// Fires at most once per mount. After firing, or after [`dispose`](Self::dispose)
/// on unmount, further intersection entries are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityGate {
    visible: bool,
    disposed: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection entry. Returns true only for the entry that
    /// makes the tile visible; the gate disposes itself at that point.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.disposed || self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        self.disposed = true;
        true
    }

    /// No observer available: treat the tile as visible so media still loads.
    pub fn fail_open(&mut self) -> bool {
        self.observe(true)
    }

    /// Stop observing. Returns true if the observer was still live.
    pub fn dispose(&mut self) -> bool {
        let was_live = !self.disposed;
        self.disposed = true;
        was_live
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Holds back a media URL until its tile is visible.
///
/// `reveal` hands the URL out exactly once; priority sources are handed out
/// without waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazySource {
    url: String,
    eager: bool,
    assignments: u32,
}

impl LazySource {
    pub fn new(url: impl Into<String>, eager: bool) -> Self {
        Self {
            url: url.into(),
            eager,
            assignments: 0,
        }
    }

    /// Source to render before any visibility signal (server render, first paint).
    pub fn initial(&mut self) -> Option<String> {
        if self.eager {
            self.reveal(true)
        } else {
            None
        }
    }

    /// Returns the URL the first time `visible` is true, `None` otherwise.
    pub fn reveal(&mut self, visible: bool) -> Option<String> {
        if !visible || self.assignments > 0 {
            return None;
        }
        self.assignments += 1;
        Some(self.url.clone())
    }

    pub fn assignments(&self) -> u32 {
        self.assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_fires_once() {
        let mut gate = VisibilityGate::new();
        assert!(!gate.observe(false));
        assert!(!gate.is_visible());
        assert!(gate.observe(true));
        assert!(gate.is_visible());
        assert!(gate.is_disposed());

        // later entries, intersecting or not, change nothing
        for intersecting in [true, false, true, true] {
            assert!(!gate.observe(intersecting));
        }
        assert!(gate.is_visible());
    }

    #[test]
    fn test_dispose_before_visible_never_fires() {
        let mut gate = VisibilityGate::new();
        assert!(gate.dispose());
        assert!(!gate.dispose());
        assert!(!gate.observe(true));
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_dispose_after_fire_is_noop() {
        let mut gate = VisibilityGate::new();
        gate.observe(true);
        assert!(!gate.dispose());
        assert!(gate.is_visible());
    }

    #[test]
    fn test_fail_open() {
        let mut gate = VisibilityGate::new();
        assert!(gate.fail_open());
        assert!(gate.is_visible());
        assert!(!gate.fail_open());
    }

    #[test]
    fn test_lazy_source_waits_for_visibility() {
        let mut source = LazySource::new("/assets/videos/siteselect/siteselect_demo.webm", false);
        assert_eq!(source.initial(), None);
        assert_eq!(source.reveal(false), None);
        assert_eq!(source.reveal(false), None);
        assert_eq!(source.assignments(), 0);

        assert_eq!(
            source.reveal(true).as_deref(),
            Some("/assets/videos/siteselect/siteselect_demo.webm")
        );
        assert_eq!(source.reveal(true), None);
        assert_eq!(source.assignments(), 1);
    }

    #[test]
    fn test_eager_source_is_assigned_up_front() {
        let mut source = LazySource::new("/hero.webp", true);
        assert_eq!(source.initial().as_deref(), Some("/hero.webp"));
        assert_eq!(source.reveal(true), None);
        assert_eq!(source.assignments(), 1);
    }

    #[test]
    fn test_gate_drives_single_assignment() {
        let mut gate = VisibilityGate::new();
        let mut source = LazySource::new("/a.webm", false);
        let mut requests = 0;
        for intersecting in [false, false, true, true, false, true] {
            let fired = gate.observe(intersecting);
            if source.reveal(fired).is_some() {
                requests += 1;
            }
        }
        assert_eq!(requests, 1);
    }
}

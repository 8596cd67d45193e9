//! Zoom overlay lifecycle for video tiles.
//!
//! ```text
//! Closed --Trigger--> Opening --elapsed--> Open --Dismiss--> Closing --elapsed--> Closed
//! ```
//!
//! The controller owns no DOM. Each event returns the side effects the caller
//! must perform, in order.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoomPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl ZoomPhase {
    pub fn is_overlay_mounted(self) -> bool {
        self != ZoomPhase::Closed
    }

    pub fn overlay_class(self) -> &'static str {
        match self {
            ZoomPhase::Closed => "",
            ZoomPhase::Opening => "zoom-enter",
            ZoomPhase::Open => "zoom-open",
            ZoomPhase::Closing => "zoom-exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomEvent {
    /// Click or tap on the tile.
    Trigger,
    /// Backdrop click or touch, close button, or Escape.
    Dismiss,
    /// The pending transition timer ran out.
    TransitionElapsed,
    /// The tile is unmounting.
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomEffect {
    LockScroll,
    UnlockScroll,
    StartTimer(u32),
    CancelTimer,
    BindEscape,
    UnbindEscape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomController {
    phase: ZoomPhase,
    enabled: bool,
    transition_ms: u32,
    timer_armed: bool,
    scroll_locked: bool,
    escape_bound: bool,
}

impl ZoomController {
    pub fn new(enabled: bool, transition_ms: u32) -> Self {
        Self {
            phase: ZoomPhase::Closed,
            enabled,
            transition_ms,
            timer_armed: false,
            scroll_locked: false,
            escape_bound: false,
        }
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_escape_bound(&self) -> bool {
        self.escape_bound
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// Apply one event. Events with no transition from the current phase
    /// return no effects and leave the controller untouched.
    pub fn handle(&mut self, event: ZoomEvent) -> Vec<ZoomEffect> {
        use ZoomEffect::*;
        use ZoomPhase::*;

        match (self.phase, event) {
            (Closed, ZoomEvent::Trigger) if self.enabled => {
                self.phase = Opening;
                self.scroll_locked = true;
                self.timer_armed = true;
                vec![LockScroll, StartTimer(self.transition_ms)]
            }
            (Opening, ZoomEvent::TransitionElapsed) if self.timer_armed => {
                self.phase = Open;
                self.timer_armed = false;
                self.escape_bound = true;
                vec![BindEscape]
            }
            (Open, ZoomEvent::Dismiss) => {
                self.phase = Closing;
                self.timer_armed = true;
                vec![StartTimer(self.transition_ms)]
            }
            (Closing, ZoomEvent::TransitionElapsed) if self.timer_armed => {
                self.phase = Closed;
                self.timer_armed = false;
                self.escape_bound = false;
                self.scroll_locked = false;
                vec![UnbindEscape, UnlockScroll]
            }
            (_, ZoomEvent::Teardown) => self.teardown(),
            _ => Vec::new(),
        }
    }

    fn teardown(&mut self) -> Vec<ZoomEffect> {
        let mut effects = Vec::new();
        if std::mem::take(&mut self.timer_armed) {
            effects.push(ZoomEffect::CancelTimer);
        }
        if std::mem::take(&mut self.escape_bound) {
            effects.push(ZoomEffect::UnbindEscape);
        }
        if std::mem::take(&mut self.scroll_locked) {
            effects.push(ZoomEffect::UnlockScroll);
        }
        self.phase = ZoomPhase::Closed;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: u32 = 400;

    /// Runs a controller against a fake clock and a fake document.
    struct Harness {
        ctl: ZoomController,
        now: u32,
        deadline: Option<u32>,
        body_locked: bool,
        escape_listener: bool,
        timers_started: usize,
        phases: Vec<ZoomPhase>,
    }

    impl Harness {
        fn new(enabled: bool) -> Self {
            Self {
                ctl: ZoomController::new(enabled, DURATION),
                now: 0,
                deadline: None,
                body_locked: false,
                escape_listener: false,
                timers_started: 0,
                phases: vec![ZoomPhase::Closed],
            }
        }

        fn send(&mut self, event: ZoomEvent) {
            for effect in self.ctl.handle(event) {
                match effect {
                    ZoomEffect::LockScroll => {
                        assert!(!self.body_locked, "scroll locked twice");
                        self.body_locked = true;
                    }
                    ZoomEffect::UnlockScroll => {
                        assert!(self.body_locked, "unlocked without lock");
                        self.body_locked = false;
                    }
                    ZoomEffect::StartTimer(ms) => {
                        assert!(self.deadline.is_none(), "overlapping timers");
                        self.timers_started += 1;
                        self.deadline = Some(self.now + ms);
                    }
                    ZoomEffect::CancelTimer => {
                        assert!(self.deadline.take().is_some(), "cancelled idle timer");
                    }
                    ZoomEffect::BindEscape => {
                        assert!(!self.escape_listener);
                        self.escape_listener = true;
                    }
                    ZoomEffect::UnbindEscape => {
                        assert!(self.escape_listener);
                        self.escape_listener = false;
                    }
                }
            }
            let phase = self.ctl.phase();
            if self.phases.last() != Some(&phase) {
                self.phases.push(phase);
            }
            self.check_invariants();
        }

        fn advance(&mut self, ms: u32) {
            self.now += ms;
            if matches!(self.deadline, Some(d) if d <= self.now) {
                self.deadline = None;
                self.send(ZoomEvent::TransitionElapsed);
            }
        }

        fn check_invariants(&self) {
            let phase = self.ctl.phase();
            assert_eq!(
                self.body_locked,
                matches!(phase, ZoomPhase::Opening | ZoomPhase::Open | ZoomPhase::Closing),
                "scroll lock out of step in {phase:?}"
            );
            assert_eq!(
                self.escape_listener,
                matches!(phase, ZoomPhase::Open | ZoomPhase::Closing)
            );
            assert_eq!(
                self.deadline.is_some(),
                matches!(phase, ZoomPhase::Opening | ZoomPhase::Closing)
            );
            // the controller's own bookkeeping agrees with the document
            assert_eq!(self.ctl.is_scroll_locked(), self.body_locked);
            assert_eq!(self.ctl.is_escape_bound(), self.escape_listener);
            assert_eq!(self.ctl.is_timer_armed(), self.deadline.is_some());
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        assert_eq!(h.ctl.phase(), ZoomPhase::Opening);
        h.advance(DURATION);
        assert_eq!(h.ctl.phase(), ZoomPhase::Open);
        h.send(ZoomEvent::Dismiss);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closing);
        assert!(h.body_locked);
        h.advance(DURATION);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
        assert!(!h.body_locked);
        assert!(!h.escape_listener);
        assert_eq!(
            h.phases,
            vec![
                ZoomPhase::Closed,
                ZoomPhase::Opening,
                ZoomPhase::Open,
                ZoomPhase::Closing,
                ZoomPhase::Closed
            ]
        );
    }

    #[test]
    fn test_open_waits_for_full_duration() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        h.advance(0);
        assert_eq!(h.ctl.phase(), ZoomPhase::Opening);
        h.advance(DURATION - 1);
        assert_eq!(h.ctl.phase(), ZoomPhase::Opening);
        h.advance(1);
        assert_eq!(h.ctl.phase(), ZoomPhase::Open);
    }

    #[test]
    fn test_rapid_triggers_open_once() {
        let mut h = Harness::new(true);
        for _ in 0..10 {
            h.send(ZoomEvent::Trigger);
            h.advance(10);
        }
        assert_eq!(h.timers_started, 1);
        h.advance(DURATION);
        assert_eq!(h.ctl.phase(), ZoomPhase::Open);
        // clicking the enlarged tile again does nothing
        h.send(ZoomEvent::Trigger);
        assert_eq!(h.ctl.phase(), ZoomPhase::Open);
        assert_eq!(h.timers_started, 1);
    }

    #[test]
    fn test_clicks_while_closing_are_ignored() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        h.advance(DURATION);
        h.send(ZoomEvent::Dismiss);
        h.advance(100);
        h.send(ZoomEvent::Trigger);
        h.send(ZoomEvent::Dismiss);
        h.send(ZoomEvent::Dismiss);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closing);
        assert_eq!(h.timers_started, 2);
        // the original exit timer still finishes on schedule
        h.advance(DURATION - 100);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
    }

    #[test]
    fn test_dismiss_while_opening_is_ignored() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        h.send(ZoomEvent::Dismiss);
        assert_eq!(h.ctl.phase(), ZoomPhase::Opening);
        h.advance(DURATION);
        assert_eq!(h.ctl.phase(), ZoomPhase::Open);
    }

    #[test]
    fn test_dismiss_while_closed_is_noop() {
        let mut ctl = ZoomController::new(true, DURATION);
        assert!(ctl.handle(ZoomEvent::Dismiss).is_empty());
        assert!(ctl.handle(ZoomEvent::TransitionElapsed).is_empty());
        assert_eq!(ctl.phase(), ZoomPhase::Closed);
    }

    #[test]
    fn test_disabled_zoom_never_opens() {
        let mut h = Harness::new(false);
        h.send(ZoomEvent::Trigger);
        h.advance(DURATION);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
        assert!(!h.body_locked);
    }

    #[test]
    fn test_teardown_mid_opening() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        h.advance(200);
        h.send(ZoomEvent::Teardown);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
        assert!(!h.body_locked);
        assert!(h.deadline.is_none());
    }

    #[test]
    fn test_teardown_mid_closing() {
        let mut h = Harness::new(true);
        h.send(ZoomEvent::Trigger);
        h.advance(DURATION);
        h.send(ZoomEvent::Dismiss);
        h.advance(50);
        h.send(ZoomEvent::Teardown);
        assert!(!h.body_locked);
        assert!(!h.escape_listener);
        assert!(h.deadline.is_none());
        // a stray elapsed signal after teardown is harmless
        h.send(ZoomEvent::TransitionElapsed);
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
    }

    #[test]
    fn test_teardown_when_open() {
        let mut ctl = ZoomController::new(true, DURATION);
        ctl.handle(ZoomEvent::Trigger);
        ctl.handle(ZoomEvent::TransitionElapsed);
        assert_eq!(
            ctl.handle(ZoomEvent::Teardown),
            vec![ZoomEffect::UnbindEscape, ZoomEffect::UnlockScroll]
        );
        assert!(ctl.handle(ZoomEvent::Teardown).is_empty());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut h = Harness::new(true);
        for _ in 0..3 {
            h.send(ZoomEvent::Trigger);
            h.advance(DURATION);
            h.send(ZoomEvent::Dismiss);
            h.advance(DURATION);
        }
        assert_eq!(h.ctl.phase(), ZoomPhase::Closed);
        assert_eq!(h.timers_started, 6);
        assert!(!h.body_locked);
    }

    #[test]
    fn test_overlay_class() {
        assert!(!ZoomPhase::Closed.is_overlay_mounted());
        assert!(ZoomPhase::Closing.is_overlay_mounted());
        assert_eq!(ZoomPhase::Opening.overlay_class(), "zoom-enter");
        assert_eq!(ZoomPhase::Closing.overlay_class(), "zoom-exit");
    }
}

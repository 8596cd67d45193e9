use std::sync::{LazyLock, Mutex, PoisonError};

/// Class put on `<body>` while any zoom overlay is up.
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Shared by every tile on the page.
pub static SCROLL_LOCK: LazyLock<Mutex<ScrollLock>> = LazyLock::new(|| Mutex::new(ScrollLock::new()));

/// Reference count of open modal sessions.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    depth: usize,
}

impl ScrollLock {
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Returns true when this is the first holder and the class must be added.
    pub fn acquire(&mut self) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    /// Returns true when the last holder left and the class must be removed.
    pub fn release(&mut self) -> bool {
        match self.depth {
            0 => false,
            1 => {
                self.depth = 0;
                true
            }
            _ => {
                self.depth -= 1;
                false
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.depth > 0
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Holds one count on a [`ScrollLock`] for as long as it lives.
///
/// `apply(true)` runs when the page becomes locked and `apply(false)` when the
/// last session is dropped.
pub struct ModalSession {
    lock: &'static Mutex<ScrollLock>,
    apply: fn(bool),
}

impl ModalSession {
    pub fn begin(lock: &'static Mutex<ScrollLock>, apply: fn(bool)) -> Self {
        let first = lock.lock().unwrap_or_else(PoisonError::into_inner).acquire();
        if first {
            apply(true);
        }
        Self { lock, apply }
    }
}

impl Drop for ModalSession {
    fn drop(&mut self) {
        let last = self
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .release();
        if last {
            (self.apply)(false);
        }
    }
}

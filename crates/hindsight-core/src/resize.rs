// File: crates/hindsight-core/src/resize.rs
// Summary: Debounce for viewport-resize bursts.

use std::time::{Duration, Instant};

/// Quiet period after the last resize notification before a rebuild runs.
pub const RESIZE_QUIET: Duration = Duration::from_millis(100);

/// Deadline-based debouncer. Every notification re-arms the deadline; the
/// owner polls `due` from its event loop and rebuilds when it fires.
#[derive(Clone, Copy, Debug)]
pub struct ResizeDebouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self { quiet: RESIZE_QUIET, deadline: None }
    }

    pub fn with_quiet(quiet: Duration) -> Self {
        Self { quiet, deadline: None }
    }

    /// Record a resize at `now`, coalescing with any pending one.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// True once the quiet period has elapsed; clears the pending deadline.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

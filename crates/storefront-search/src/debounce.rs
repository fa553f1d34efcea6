//! Quiet-period policy for typed input. Time is supplied by the caller so
//! the policy stays deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// No quiet period: every submission is released at once.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_immediate(&self) -> bool {
        self.window.is_zero()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records `value`; returns it straight back when the window is zero.
    /// A newer submission replaces the pending one and restarts the window.
    pub fn submit(&mut self, value: String, now: Instant) -> Option<String> {
        if self.is_immediate() {
            self.pending = None;
            return Some(value);
        }
        self.pending = Some((value, now));
        None
    }

    /// Releases the pending value once the window has elapsed since its submit.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.window => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

//! Single/double click disambiguation.
//!
//! ```text
//! Idle --press--> PendingSingle --press same target within window--> PromotedToDouble --> Idle
//!                      |--poll after window / press other target--> Committed --> Idle
//! ```
//!
//! Time is supplied by the caller, so the machine never reads a clock.

use std::time::{Duration, Instant};

/// Outcome of the debouncer for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEvent<T> {
    /// The pending single click was committed.
    Single(T),
    /// A second press on the same target arrived within the window.
    Double(T),
}

impl<T> ClickEvent<T> {
    pub const fn target(&self) -> &T {
        match self {
            Self::Single(t) | Self::Double(t) => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    PendingSingle,
}

#[derive(Debug, Clone)]
pub struct ClickDebouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T: PartialEq> ClickDebouncer<T> {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    #[must_use]
    pub const fn state(&self) -> DebounceState {
        if self.pending.is_some() { DebounceState::PendingSingle } else { DebounceState::Idle }
    }

    /// When the pending single click becomes due.
    ///
    /// `None` without a pending click, or when the deadline is not representable;
    /// such a click only commits through the next press or [`ClickDebouncer::cancel`].
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and_then(|(_, at)| at.checked_add(self.window))
    }

    /// Feeds a press.
    ///
    /// A press on a different target, or on the same target after the window,
    /// commits the pending single before the new press starts its own timer.
    pub fn press(&mut self, target: T, now: Instant) -> Vec<ClickEvent<T>> {
        match self.pending.take() {
            Some((pending, at)) if pending == target && now.saturating_duration_since(at) < self.window => {
                vec![ClickEvent::Double(target)]
            },
            Some((pending, _)) => {
                self.pending = Some((target, now));
                vec![ClickEvent::Single(pending)]
            },
            None => {
                self.pending = Some((target, now));
                Vec::new()
            },
        }
    }

    /// Commits the pending single once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ClickEvent<T>> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due { self.pending.take().map(|(target, _)| ClickEvent::Single(target)) } else { None }
    }

    /// Drops the pending click without committing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(target, _)| target)
    }
}

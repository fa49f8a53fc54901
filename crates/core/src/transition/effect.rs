//! Effects produced by state transitions

use super::Event;

/// Named pacing delays; the driver maps them to concrete durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delay {
    /// Between an accepted answer and its feedback message.
    Feedback,
    /// Between feedback and the next question or the final score.
    NextQuestion,
    /// Between a chat message and its reply.
    Reply,
}

/// Work for the driver after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `event` back to the reducer once `delay` has elapsed.
    Schedule { delay: Delay, event: Event },

    /// Drop every pending timed event.
    CancelPending,
}

impl Effect {
    #[must_use]
    pub fn schedule(delay: Delay, event: Event) -> Self {
        Effect::Schedule { delay, event }
    }
}

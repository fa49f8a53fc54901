use std::time::Duration;

use atlas_core::transition::Delay;

/// Concrete durations behind the reducer's named delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub feedback: Duration,
    pub next_question: Duration,
    pub reply: Duration,
}

impl Pacing {
    /// Conversational pacing: 1s to feedback, 2s to the next question, 1s to a
    /// chat reply.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            feedback: Duration::from_secs(1),
            next_question: Duration::from_secs(2),
            reply: Duration::from_secs(1),
        }
    }

    /// Every delay is zero; timed events still go through the scheduler.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            feedback: Duration::ZERO,
            next_question: Duration::ZERO,
            reply: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn delay_for(&self, delay: Delay) -> Duration {
        match delay {
            Delay::Feedback => self.feedback,
            Delay::NextQuestion => self.next_question,
            Delay::Reply => self.reply,
        }
    }

    #[must_use]
    pub fn is_instant(&self) -> bool {
        *self == Self::instant()
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::standard()
    }
}

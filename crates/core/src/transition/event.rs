//! Events that drive the session

use crate::model::QuestionRecord;

/// Inputs to the reducer.
///
/// The first four come from the user; the rest are delivered by the pacing
/// scheduler and carry the epoch they were scheduled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin (or replay) a quiz over the given, already shuffled, questions.
    StartQuiz { questions: Vec<QuestionRecord> },
    StartChat,
    SubmitAnswer { selected: usize },
    SubmitChat { text: String },

    // Timed events
    ShowFeedback { epoch: u64 },
    AdvanceQuestion { epoch: u64 },
    ShowFinalScore { epoch: u64 },
    DeliverReply { epoch: u64, input: String },
}

impl Event {
    /// Epoch of a timed event, `None` for user events.
    #[must_use]
    pub fn epoch(&self) -> Option<u64> {
        match self {
            Event::ShowFeedback { epoch }
            | Event::AdvanceQuestion { epoch }
            | Event::ShowFinalScore { epoch }
            | Event::DeliverReply { epoch, .. } => Some(*epoch),
            Event::StartQuiz { .. }
            | Event::StartChat
            | Event::SubmitAnswer { .. }
            | Event::SubmitChat { .. } => None,
        }
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.epoch().is_some()
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::StartQuiz { .. } => "start_quiz",
            Event::StartChat => "start_chat",
            Event::SubmitAnswer { .. } => "submit_answer",
            Event::SubmitChat { .. } => "submit_chat",
            Event::ShowFeedback { .. } => "show_feedback",
            Event::AdvanceQuestion { .. } => "advance_question",
            Event::ShowFinalScore { .. } => "show_final_score",
            Event::DeliverReply { .. } => "deliver_reply",
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::MessageId;
use crate::model::message::Message;
use crate::model::question::QuestionRecord;

pub const WELCOME_TEXT: &str =
    "Welcome to ChatPT Atlas! I'm your geography AI assistant. Choose a mode to get started:";

/// Interaction mode shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Quiz,
    Chat,
}

/// Where the session sits in its lifecycle.
///
/// `Idle → Quiz → QuizComplete → Quiz` (replay) and `Idle → Chat`; either mode
/// can be entered from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    Quiz,
    QuizComplete,
    Chat,
}

/// Quiz progress as shown in the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question currently on screen.
    pub question_number: usize,
    pub total: usize,
    pub score: u32,
    pub complete: bool,
}

/// The whole in-memory state of one session.
///
/// Only the reducer mutates it; everything here is readable by surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    stage: Stage,
    messages: Vec<Message>,
    questions: Vec<QuestionRecord>,
    question_index: usize,
    score: u32,
    answered: bool,
    last_answer_correct: Option<bool>,
    awaiting_reply: bool,
    epoch: u64,
    next_message_id: MessageId,
}

impl SessionState {
    /// A fresh idle session holding only the welcome message.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut state = Self {
            stage: Stage::Idle,
            messages: Vec::new(),
            questions: Vec::new(),
            question_index: 0,
            score: 0,
            answered: false,
            last_answer_correct: None,
            awaiting_reply: false,
            epoch: 0,
            next_message_id: MessageId::new(1),
        };
        state.push_assistant(WELCOME_TEXT, now);
        state
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Idle sessions default to quiz mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.stage {
            Stage::Chat => Mode::Chat,
            Stage::Idle | Stage::Quiz | Stage::QuizComplete => Mode::Quiz,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stage == Stage::Idle
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The shuffled question order of the running (or last) quiz.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.stage {
            Stage::Quiz | Stage::QuizComplete => self.questions.get(self.question_index),
            Stage::Idle | Stage::Chat => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    /// Result of the most recent accepted answer, if any in this quiz.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    /// A chat reply is on its way.
    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Generation counter bumped on every reset; timed events from older
    /// generations are stale.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        match self.stage {
            Stage::Quiz | Stage::QuizComplete => Some(QuizProgress {
                question_number: self.question_index + 1,
                total: self.questions.len(),
                score: self.score,
                complete: self.stage == Stage::QuizComplete,
            }),
            Stage::Idle | Stage::Chat => None,
        }
    }

    //
    // ─── REDUCER MUTATORS ──────────────────────────────────────────────────────────
    //

    pub(crate) fn reset(&mut self, stage: Stage) {
        self.stage = stage;
        self.messages.clear();
        self.questions.clear();
        self.question_index = 0;
        self.score = 0;
        self.answered = false;
        self.last_answer_correct = None;
        self.awaiting_reply = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    pub(crate) fn set_questions(&mut self, questions: Vec<QuestionRecord>) {
        self.questions = questions;
    }

    pub(crate) fn set_question_index(&mut self, index: usize) {
        self.question_index = index;
        self.answered = false;
    }

    pub(crate) fn record_answer(&mut self, correct: bool) {
        self.answered = true;
        self.last_answer_correct = Some(correct);
        if correct {
            self.score = self.score.saturating_add(1);
        }
    }

    pub(crate) fn set_awaiting_reply(&mut self, awaiting: bool) {
        self.awaiting_reply = awaiting;
    }

    pub(crate) fn last_message_mut(&mut self) -> Option<&mut Message> {
        self.messages.last_mut()
    }

    fn take_message_id(&mut self) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id = id.next();
        id
    }

    pub(crate) fn push_user(&mut self, text: impl Into<String>, at: DateTime<Utc>) {
        let id = self.take_message_id();
        self.messages.push(Message::user(id, text, at));
    }

    pub(crate) fn push_assistant(&mut self, text: impl Into<String>, at: DateTime<Utc>) {
        let id = self.take_message_id();
        self.messages.push(Message::assistant(id, text, at));
    }

    pub(crate) fn push_question(&mut self, index: usize, at: DateTime<Utc>) -> bool {
        let id = self.take_message_id();
        let Some(question) = self.questions.get(index) else {
            return false;
        };
        let message = Message::question(id, question, at);
        self.messages.push(message);
        true
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::MessageId;
use crate::model::question::QuestionRecord;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
        }
    }
}

/// Display status of a single option once its question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    /// Answer not disclosed yet.
    Pending,
    Correct,
    Incorrect,
}

/// One entry in the session transcript.
///
/// Question messages carry their options and the correct index; every other
/// message is plain text. `revealed` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    speaker: Speaker,
    text: String,
    options: Option<Vec<String>>,
    correct_index: Option<usize>,
    revealed: bool,
    created_at: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub fn user(id: MessageId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::plain(id, Speaker::User, text.into(), created_at)
    }

    #[must_use]
    pub fn assistant(id: MessageId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::plain(id, Speaker::Assistant, text.into(), created_at)
    }

    /// An assistant message asking `question`, with its options attached.
    #[must_use]
    pub fn question(id: MessageId, question: &QuestionRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            speaker: Speaker::Assistant,
            text: question.prompt().to_string(),
            options: Some(question.options().to_vec()),
            correct_index: Some(question.correct_index()),
            revealed: false,
            created_at,
        }
    }

    fn plain(id: MessageId, speaker: Speaker, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            speaker,
            text,
            options: None,
            correct_index: None,
            revealed: false,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.correct_index
    }

    #[must_use]
    pub fn is_question(&self) -> bool {
        self.options.is_some()
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Disclose the answer of a question message.
    ///
    /// Returns `true` only on the first call for a question message.
    pub fn reveal(&mut self) -> bool {
        if !self.is_question() || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// How option `index` should be shown.
    #[must_use]
    pub fn option_status(&self, index: usize) -> OptionStatus {
        match (self.revealed, self.correct_index) {
            (true, Some(correct)) if correct == index => OptionStatus::Correct,
            (true, Some(_)) => OptionStatus::Incorrect,
            _ => OptionStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionBank;
    use crate::time::fixed_now;

    #[test]
    fn question_message_reveals_once() {
        let bank = QuestionBank::geography();
        let mut msg = Message::question(MessageId::new(1), &bank.records()[0], fixed_now());

        assert!(!msg.revealed());
        assert_eq!(msg.option_status(2), OptionStatus::Pending);

        assert!(msg.reveal());
        assert!(!msg.reveal());
        assert!(msg.revealed());
        assert_eq!(msg.option_status(2), OptionStatus::Correct);
        assert_eq!(msg.option_status(0), OptionStatus::Incorrect);
    }

    #[test]
    fn plain_messages_never_reveal() {
        let mut msg = Message::user(MessageId::new(1), "hello", fixed_now());
        assert!(!msg.reveal());
        assert!(!msg.revealed());
        assert_eq!(msg.speaker(), Speaker::User);
        assert!(msg.options().is_none());
    }
}

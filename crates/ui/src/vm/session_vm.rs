use atlas_core::model::{Message, OptionStatus, SessionState, Speaker, Stage};
use atlas_core::transition::Outcome;
use services::SessionController;

use super::time_fmt::format_message_time;

pub const APP_TITLE: &str = "🌍 ChatPT Atlas";
pub const APP_SUBTITLE: &str = "Your AI Geography Companion";

/// User actions the session screen can issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    StartQuiz,
    StartChat,
    Answer(usize),
    SendChat(String),
}

/// Route an intent to the controller.
pub fn apply_intent(controller: &mut SessionController, intent: SessionIntent) -> Outcome {
    match intent {
        SessionIntent::StartQuiz => controller.start_quiz(),
        SessionIntent::StartChat => controller.start_chat(),
        SessionIntent::Answer(selected) => controller.submit_answer(selected),
        SessionIntent::SendChat(text) => controller.submit_chat_message(text),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub status: OptionStatus,
    pub enabled: bool,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            OptionStatus::Pending => "option-button",
            OptionStatus::Correct => "option-button correct",
            OptionStatus::Incorrect => "option-button incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVm {
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
    pub time_label: String,
    pub options: Vec<OptionVm>,
}

impl MessageVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.speaker {
            Speaker::User => "message user",
            Speaker::Assistant => "message assistant",
        }
    }
}

/// What the bottom of the screen offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputVm {
    ModePicker,
    ChatInput { disabled: bool },
    PlayAgain,
    /// Mid-quiz: answers go through the option buttons.
    Hidden,
}

/// Render-ready snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionVm {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub scoreboard: Option<String>,
    pub messages: Vec<MessageVm>,
    pub typing: bool,
    pub input: InputVm,
}

#[must_use]
pub fn map_session(state: &SessionState) -> SessionVm {
    let last = state.messages().len().saturating_sub(1);
    let live_question = state.stage() == Stage::Quiz && !state.answered();

    let messages = state
        .messages()
        .iter()
        .enumerate()
        .map(|(pos, message)| map_message(message, live_question && pos == last))
        .collect();

    let scoreboard = state.progress().map(|progress| {
        if progress.complete {
            format!("Final score: {}/{}", progress.score, progress.total)
        } else {
            format!(
                "Question {}/{} | Score: {}",
                progress.question_number, progress.total, progress.score
            )
        }
    });

    let input = match state.stage() {
        Stage::Idle => InputVm::ModePicker,
        Stage::Chat => InputVm::ChatInput {
            disabled: state.awaiting_reply(),
        },
        Stage::QuizComplete => InputVm::PlayAgain,
        Stage::Quiz => InputVm::Hidden,
    };

    SessionVm {
        title: APP_TITLE,
        subtitle: APP_SUBTITLE,
        scoreboard,
        messages,
        typing: state.awaiting_reply(),
        input,
    }
}

// Only the newest, still-unanswered question accepts clicks.
fn map_message(message: &Message, clickable: bool) -> MessageVm {
    let options = message
        .options()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, label)| OptionVm {
            index,
            label: label.clone(),
            status: message.option_status(index),
            enabled: clickable && message.is_question(),
        })
        .collect();

    MessageVm {
        id: message.id().value(),
        speaker: message.speaker(),
        text: message.text().to_string(),
        time_label: format_message_time(message.created_at()),
        options,
    }
}

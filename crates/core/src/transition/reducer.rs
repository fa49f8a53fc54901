//! Pure state transition function

use chrono::{DateTime, Utc};

use super::{Delay, Effect, Event};
use crate::model::{QuestionRecord, ResponseTable, SessionState, Stage};

pub const CHAT_GREETING: &str = "I'm now in chat mode! Ask me anything about geography - countries, capitals, rivers, mountains, or any other geographical topics you're curious about!";

/// Read-only data the reducer consults.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub responses: &'a ResponseTable,
}

/// Why an event left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The current question already has an accepted answer.
    AlreadyAnswered,
    NotInQuiz,
    NotInChat,
    /// Chat text was empty or whitespace.
    EmptyMessage,
    /// A chat reply is still on its way.
    ReplyPending,
    OptionOutOfRange,
    /// A timed event from an earlier epoch or for a step already taken.
    StaleTimer,
    EmptyQuiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub state: SessionState,
    pub effects: Vec<Effect>,
    pub outcome: Outcome,
}

impl TransitionResult {
    fn applied(state: SessionState) -> Self {
        Self {
            state,
            effects: vec![],
            outcome: Outcome::Applied,
        }
    }

    fn ignored(state: SessionState, reason: IgnoreReason) -> Self {
        Self {
            state,
            effects: vec![],
            outcome: Outcome::Ignored(reason),
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Fold one event into the session.
///
/// Pure: the result depends only on the arguments. `now` stamps any message
/// appended by this step.
#[must_use]
pub fn transition(
    mut state: SessionState,
    ctx: TransitionContext<'_>,
    event: Event,
    now: DateTime<Utc>,
) -> TransitionResult {
    if let Some(epoch) = event.epoch()
        && epoch != state.epoch()
    {
        return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
    }

    match event {
        Event::StartQuiz { questions } => start_quiz(state, questions, now),

        Event::StartChat => {
            state.reset(Stage::Chat);
            state.push_assistant(CHAT_GREETING, now);
            TransitionResult::applied(state).with_effect(Effect::CancelPending)
        }

        Event::SubmitAnswer { selected } => submit_answer(state, selected),

        Event::SubmitChat { text } => submit_chat(state, text, now),

        Event::ShowFeedback { epoch } => {
            if state.stage() != Stage::Quiz || !state.answered() {
                return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
            }
            let (Some(question), Some(correct)) =
                (state.current_question(), state.last_answer_correct())
            else {
                return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
            };
            let text = feedback_text(question, correct);
            let next = if state.is_last_question() {
                Event::ShowFinalScore { epoch }
            } else {
                Event::AdvanceQuestion { epoch }
            };
            state.push_assistant(text, now);
            TransitionResult::applied(state)
                .with_effect(Effect::schedule(Delay::NextQuestion, next))
        }

        Event::AdvanceQuestion { .. } => {
            if state.stage() != Stage::Quiz || !state.answered() || state.is_last_question() {
                return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
            }
            let next = state.question_index() + 1;
            state.set_question_index(next);
            state.push_question(next, now);
            TransitionResult::applied(state)
        }

        Event::ShowFinalScore { .. } => {
            if state.stage() != Stage::Quiz || !state.answered() || !state.is_last_question() {
                return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
            }
            let text = final_score_text(state.score(), state.questions().len());
            state.push_assistant(text, now);
            state.set_stage(Stage::QuizComplete);
            TransitionResult::applied(state)
        }

        Event::DeliverReply { input, .. } => {
            if state.stage() != Stage::Chat || !state.awaiting_reply() {
                return TransitionResult::ignored(state, IgnoreReason::StaleTimer);
            }
            let reply = ctx.responses.respond(&input);
            state.push_assistant(reply, now);
            state.set_awaiting_reply(false);
            TransitionResult::applied(state)
        }
    }
}

fn start_quiz(
    mut state: SessionState,
    questions: Vec<QuestionRecord>,
    now: DateTime<Utc>,
) -> TransitionResult {
    if questions.is_empty() {
        return TransitionResult::ignored(state, IgnoreReason::EmptyQuiz);
    }
    state.reset(Stage::Quiz);
    state.set_questions(questions);
    state.set_question_index(0);
    state.push_question(0, now);
    TransitionResult::applied(state).with_effect(Effect::CancelPending)
}

fn submit_answer(mut state: SessionState, selected: usize) -> TransitionResult {
    if state.stage() != Stage::Quiz {
        return TransitionResult::ignored(state, IgnoreReason::NotInQuiz);
    }
    if state.answered() {
        return TransitionResult::ignored(state, IgnoreReason::AlreadyAnswered);
    }
    let Some(question) = state.current_question() else {
        return TransitionResult::ignored(state, IgnoreReason::NotInQuiz);
    };
    if selected >= question.options().len() {
        return TransitionResult::ignored(state, IgnoreReason::OptionOutOfRange);
    }

    let correct = question.is_correct(selected);
    state.record_answer(correct);
    if let Some(message) = state.last_message_mut() {
        message.reveal();
    }

    let epoch = state.epoch();
    TransitionResult::applied(state)
        .with_effect(Effect::schedule(Delay::Feedback, Event::ShowFeedback { epoch }))
}

fn submit_chat(mut state: SessionState, text: String, now: DateTime<Utc>) -> TransitionResult {
    if state.stage() != Stage::Chat {
        return TransitionResult::ignored(state, IgnoreReason::NotInChat);
    }
    if text.trim().is_empty() {
        return TransitionResult::ignored(state, IgnoreReason::EmptyMessage);
    }
    if state.awaiting_reply() {
        return TransitionResult::ignored(state, IgnoreReason::ReplyPending);
    }

    state.push_user(text.clone(), now);
    state.set_awaiting_reply(true);

    let epoch = state.epoch();
    TransitionResult::applied(state).with_effect(Effect::schedule(
        Delay::Reply,
        Event::DeliverReply { epoch, input: text },
    ))
}

/// Feedback shown after an answer is accepted.
#[must_use]
pub fn feedback_text(question: &QuestionRecord, correct: bool) -> String {
    if correct {
        format!("✅ Correct! {}", question.explanation())
    } else {
        format!(
            "❌ Not quite. The correct answer is \"{}\". {}",
            question.correct_option(),
            question.explanation()
        )
    }
}

/// Closing summary; tiers sit at 70% and 50% of the question count.
#[must_use]
pub fn final_score_text(score: u32, total: usize) -> String {
    let scaled = u64::from(score) * 10;
    let total_u64 = u64::try_from(total).unwrap_or(u64::MAX);
    let verdict = if scaled >= total_u64.saturating_mul(7) {
        "Excellent work!"
    } else if scaled >= total_u64.saturating_mul(5) {
        "Good job!"
    } else {
        "Keep learning!"
    };
    format!("🎉 Quiz complete! Your final score: {score}/{total}. {verdict}")
}

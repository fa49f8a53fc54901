use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace};

use atlas_core::Clock;
use atlas_core::model::{QuestionBank, QuestionRecord, ResponseTable, SessionState, Stage};
use atlas_core::transition::{Effect, Event, Outcome, TransitionContext, transition};

use crate::error::ControllerError;
use crate::pacing::Pacing;
use crate::scheduler::PacingScheduler;

/// Upper bound on timed events fired by one `run_until_idle` call.
const MAX_SETTLE_EVENTS: usize = 1_024;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns one session and everything needed to move it forward.
///
/// User actions go through the four `start_*`/`submit_*` methods; paced
/// follow-ups sit in a virtual-time scheduler until `advance` is called.
pub struct SessionController {
    state: SessionState,
    bank: QuestionBank,
    responses: ResponseTable,
    pacing: Pacing,
    scheduler: PacingScheduler,
    clock: Clock,
    clock_synced_at: Duration,
    rng: StdRng,
    shuffle: bool,
    revision: u64,
}

impl SessionController {
    /// A controller over the built-in geography bank and response table.
    #[must_use]
    pub fn new(pacing: Pacing, clock: Clock) -> Self {
        Self {
            state: SessionState::new(clock.now()),
            bank: QuestionBank::geography(),
            responses: ResponseTable::geography(),
            pacing,
            scheduler: PacingScheduler::new(),
            clock,
            clock_synced_at: Duration::ZERO,
            rng: StdRng::from_rng(&mut rand::rng()),
            shuffle: true,
            revision: 0,
        }
    }

    #[must_use]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = bank;
        self
    }

    /// Swap in a custom question set.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Bank` when the records do not form a valid bank.
    pub fn with_questions(self, records: Vec<QuestionRecord>) -> Result<Self, ControllerError> {
        let bank = QuestionBank::new(records)?;
        Ok(self.with_bank(bank))
    }

    #[must_use]
    pub fn with_responses(mut self, responses: ResponseTable) -> Self {
        self.responses = responses;
        self
    }

    /// Make quiz shuffles reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Enable or disable shuffling questions at quiz start.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Bumped on every applied event; surfaces compare it to skip re-renders.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Virtual time elapsed in this session.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_idle()
    }

    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    //
    // ─── USER ACTIONS ──────────────────────────────────────────────────────────
    //

    /// Start or replay the quiz with a freshly shuffled question order.
    pub fn start_quiz(&mut self) -> Outcome {
        let mut questions = self.bank.records().to_vec();
        if self.shuffle {
            questions.as_mut_slice().shuffle(&mut self.rng);
        }
        let total = questions.len();
        let outcome = self.dispatch(Event::StartQuiz { questions });
        if outcome.is_applied() {
            info!(total, "quiz started");
        }
        outcome
    }

    pub fn start_chat(&mut self) -> Outcome {
        let outcome = self.dispatch(Event::StartChat);
        if outcome.is_applied() {
            info!("chat started");
        }
        outcome
    }

    /// Answer the question on screen; repeated answers are ignored.
    pub fn submit_answer(&mut self, selected: usize) -> Outcome {
        self.dispatch(Event::SubmitAnswer { selected })
    }

    pub fn submit_chat_message(&mut self, text: impl Into<String>) -> Outcome {
        self.dispatch(Event::SubmitChat { text: text.into() })
    }

    //
    // ─── TIME ──────────────────────────────────────────────────────────────────
    //

    /// Move virtual time forward, firing every event that falls due.
    ///
    /// Events scheduled by a firing event count from its due instant, so one
    /// large step can run a whole chain. Returns how many events fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let deadline = self.scheduler.now().saturating_add(by);
        let mut fired = 0;
        while let Some(event) = self.scheduler.pop_due(deadline) {
            self.sync_clock();
            trace!(event = event.name(), at = ?self.scheduler.now(), "timed event due");
            self.dispatch(event);
            fired += 1;
        }
        self.scheduler.finish_at(deadline);
        self.sync_clock();
        fired
    }

    /// Fire pending events until none are left.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.scheduler.next_due_in() {
            if fired >= MAX_SETTLE_EVENTS {
                debug!(fired, "stopped settling; event chain did not end");
                break;
            }
            fired += self.advance(wait);
        }
        fired
    }

    fn sync_clock(&mut self) {
        let now = self.scheduler.now();
        self.clock.advance(now.saturating_sub(self.clock_synced_at));
        self.clock_synced_at = now;
    }

    fn dispatch(&mut self, event: Event) -> Outcome {
        let name = event.name();
        let now = self.clock.now();
        let was_complete = self.state.stage() == Stage::QuizComplete;

        let state = std::mem::replace(&mut self.state, SessionState::new(now));
        let ctx = TransitionContext {
            responses: &self.responses,
        };
        let result = transition(state, ctx, event, now);
        self.state = result.state;

        match result.outcome {
            Outcome::Applied => {
                self.revision = self.revision.wrapping_add(1);
                trace!(event = name, revision = self.revision, "event applied");
            }
            Outcome::Ignored(reason) => {
                debug!(event = name, ?reason, "event ignored");
            }
        }

        for effect in result.effects {
            match effect {
                Effect::CancelPending => {
                    let dropped = self.scheduler.cancel_all();
                    if dropped > 0 {
                        debug!(dropped, "cancelled pending timed events");
                    }
                }
                Effect::Schedule { delay, event } => {
                    self.scheduler.schedule(self.pacing.delay_for(delay), event);
                }
            }
        }

        if !was_complete && self.state.stage() == Stage::QuizComplete {
            info!(
                score = self.state.score(),
                total = self.state.questions().len(),
                "quiz complete"
            );
        }

        result.outcome
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("stage", &self.state.stage())
            .field("messages_len", &self.state.messages().len())
            .field("question_index", &self.state.question_index())
            .field("score", &self.state.score())
            .field("pending", &self.scheduler.pending())
            .field("elapsed", &self.scheduler.now())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

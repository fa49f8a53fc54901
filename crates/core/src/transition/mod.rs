//! Pure session state machine.
//!
//! User actions and timer firings are `Event`s; `transition` folds one event
//! into the state and returns the `Effect`s the driver must carry out.

mod effect;
mod event;
mod reducer;

pub use effect::{Delay, Effect};
pub use event::Event;
pub use reducer::{
    CHAT_GREETING, IgnoreReason, Outcome, TransitionContext, TransitionResult, feedback_text,
    final_score_text, transition,
};

mod bank;
mod ids;
mod message;
mod question;
mod responses;
mod session;

pub use ids::{MessageId, ParseIdError, QuestionId};

pub use bank::{BankError, QuestionBank};
pub use message::{Message, OptionStatus, Speaker};
pub use question::{OPTION_COUNT, QuestionError, QuestionRecord};
pub use responses::{FALLBACK_REPLY, ResponseEntry, ResponseTable};
pub use session::{Mode, QuizProgress, SessionState, Stage, WELCOME_TEXT};

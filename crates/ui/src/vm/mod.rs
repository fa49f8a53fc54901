mod session_vm;
mod time_fmt;

pub use session_vm::{
    APP_SUBTITLE, APP_TITLE, InputVm, MessageVm, OptionVm, SessionIntent, SessionVm,
    apply_intent, map_session,
};
pub use time_fmt::format_message_time;

mod input;
mod messages;
mod session;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use input::InputArea;
pub use messages::{MessageBubble, MessageList, OptionButtons};
pub use session::SessionView;

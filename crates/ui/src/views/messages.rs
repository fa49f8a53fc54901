use dioxus::prelude::*;

use atlas_core::model::Speaker;

use crate::vm::{MessageVm, OptionVm, SessionIntent};

#[component]
pub fn MessageList(
    messages: Vec<MessageVm>,
    typing: bool,
    on_intent: Callback<SessionIntent>,
) -> Element {
    rsx! {
        div { class: "messages",
            for message in messages {
                MessageBubble { key: "{message.id}", message, on_intent }
            }
            if typing {
                div { class: "message assistant typing", "AI is typing..." }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: MessageVm, on_intent: Callback<SessionIntent>) -> Element {
    let author = match message.speaker {
        Speaker::User => "You",
        Speaker::Assistant => "Atlas",
    };

    rsx! {
        div { class: "{message.class()}",
            div { class: "message-meta",
                span { class: "message-author", "{author}" }
                span { class: "message-time", "{message.time_label}" }
            }
            p { class: "message-text", "{message.text}" }
            if !message.options.is_empty() {
                OptionButtons { options: message.options.clone(), on_intent }
            }
        }
    }
}

#[component]
pub fn OptionButtons(options: Vec<OptionVm>, on_intent: Callback<SessionIntent>) -> Element {
    let locked = options.iter().all(|option| !option.enabled);
    let class = if locked { "options locked" } else { "options" };

    rsx! {
        div { class: "{class}",
            for option in options {
                button {
                    key: "{option.index}",
                    class: "{option.class()}",
                    r#type: "button",
                    disabled: !option.enabled,
                    onclick: move |_| on_intent.call(SessionIntent::Answer(option.index)),
                    "{option.label}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::vm::{InputVm, SessionIntent};

#[component]
pub fn InputArea(input: InputVm, on_intent: Callback<SessionIntent>) -> Element {
    match input {
        InputVm::ModePicker => rsx! {
            div { class: "mode-picker",
                button {
                    class: "mode-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SessionIntent::StartQuiz),
                    "Start Quiz"
                }
                button {
                    class: "mode-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SessionIntent::StartChat),
                    "Chat Mode"
                }
            }
        },
        InputVm::ChatInput { disabled } => rsx! {
            ChatInput { disabled, on_intent }
        },
        InputVm::PlayAgain => rsx! {
            div { class: "mode-picker",
                button {
                    class: "mode-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SessionIntent::StartQuiz),
                    "Play Again"
                }
                button {
                    class: "mode-button secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SessionIntent::StartChat),
                    "Chat Mode"
                }
            }
        },
        InputVm::Hidden => rsx! {},
    }
}

#[component]
fn ChatInput(disabled: bool, on_intent: Callback<SessionIntent>) -> Element {
    let mut draft = use_signal(String::new);
    let class = if disabled { "chat-form waiting" } else { "chat-form" };

    rsx! {
        form {
            class: "{class}",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let text = draft.peek().trim().to_string();
                if text.is_empty() || disabled {
                    return;
                }
                on_intent.call(SessionIntent::SendChat(text));
                draft.set(String::new());
            },
            input {
                class: "chat-input",
                r#type: "text",
                placeholder: "Ask me anything about geography...",
                value: "{draft}",
                disabled,
                oninput: move |evt| draft.set(evt.value()),
            }
            button { class: "send-button", r#type: "submit", disabled, "Send" }
        }
    }
}

use dioxus::prelude::*;
use tracing::debug;

use atlas_core::transition::Outcome;
use services::SessionController;

use super::input::InputArea;
use super::messages::MessageList;
use crate::vm::{SessionIntent, SessionVm, apply_intent, map_session};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The chat screen: header, transcript and whatever input the stage allows.
///
/// Expects a `Signal<SessionController>` in context.
#[component]
pub fn SessionView() -> Element {
    let controller = use_context::<Signal<SessionController>>();

    let dispatch = use_callback(move |intent: SessionIntent| {
        let mut controller = controller;
        let outcome = apply_intent(&mut *controller.write(), intent);
        if let Outcome::Ignored(reason) = outcome {
            debug!(?reason, "session intent had no effect");
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<SessionTestHandles>() {
            handles.register(dispatch, controller);
        }
    }

    let SessionVm {
        title,
        subtitle,
        scoreboard,
        messages,
        typing,
        input,
    } = map_session(controller.read().state());

    rsx! {
        div { class: "session",
            header { class: "session-header",
                h1 { class: "session-title", "{title}" }
                p { class: "session-subtitle", "{subtitle}" }
                if let Some(label) = scoreboard {
                    div { class: "scoreboard", "{label}" }
                }
            }
            MessageList { messages, typing, on_intent: dispatch }
            InputArea { input, on_intent: dispatch }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SessionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    controller: Rc<RefCell<Option<Signal<SessionController>>>>,
}

#[cfg(test)]
impl SessionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        controller: Signal<SessionController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("session dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<SessionController> {
        (*self.controller.borrow()).expect("session controller registered")
    }
}

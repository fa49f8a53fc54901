use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Pacing, SessionController};

use crate::app::App;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::SessionView;
use crate::views::session::SessionTestHandles;
use crate::vm::SessionIntent;

pub const TEST_SEED: u64 = 7;

#[derive(Clone)]
pub struct TestApp {
    pub pacing: Pacing,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "ChatPT Atlas (test)"
    }

    fn pacing(&self) -> Pacing {
        self.pacing
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }
}

pub fn test_context(pacing: Pacing) -> AppContext {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { pacing });
    build_app_context(&app)
}

#[derive(Props, Clone)]
struct SessionHarnessProps {
    context: AppContext,
    handles: SessionTestHandles,
}

impl PartialEq for SessionHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionHarness(props: SessionHarnessProps) -> Element {
    let context = props.context.clone();
    let controller = use_signal(move || context.build_controller());
    use_context_provider(|| controller);
    use_context_provider(|| props.handles.clone());
    rsx! { SessionView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: SessionTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Issue an intent the way a click would, then re-render.
    pub fn dispatch(&mut self, intent: SessionIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive();
    }

    /// Touch the controller directly (moving time, reading state), then re-render.
    pub fn with_controller<R>(&mut self, f: impl FnOnce(&mut SessionController) -> R) -> R {
        let mut controller = self.handles.controller();
        let out = self.dom.in_runtime(|| f(&mut *controller.write()));
        self.drive();
        out
    }

    pub fn correct_answer(&mut self) -> usize {
        self.with_controller(|ctl| {
            ctl.state()
                .current_question()
                .expect("question on screen")
                .correct_index()
        })
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Session screen without the pacing driver; tests move time by hand.
pub fn setup_session_harness(pacing: Pacing) -> ViewHarness {
    let handles = SessionTestHandles::default();
    let dom = VirtualDom::new_with_props(
        SessionHarness,
        SessionHarnessProps {
            context: test_context(pacing),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}

/// Full app shell, pacing driver included.
pub fn setup_app_harness(pacing: Pacing) -> ViewHarness {
    let handles = SessionTestHandles::default();
    let dom = VirtualDom::new(App)
        .with_root_context(test_context(pacing))
        .with_root_context(handles.clone());
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::driver::use_pacing_driver;
use crate::views::SessionView;

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();
    let controller = use_signal(|| context.build_controller());
    use_context_provider(|| controller);
    use_pacing_driver(controller);

    rsx! {
        style { {STYLE} }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            SessionView {}
        }
    }
}

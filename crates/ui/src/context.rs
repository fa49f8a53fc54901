use std::sync::Arc;

use services::{Clock, Pacing, SessionController};

/// Launch-time settings the desktop shell hands to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn pacing(&self) -> Pacing;

    /// Fixed shuffle seed; `None` draws from the thread RNG.
    fn shuffle_seed(&self) -> Option<u64>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    app_name: String,
    pacing: Pacing,
    shuffle_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            pacing: app.pacing(),
            shuffle_seed: app.shuffle_seed(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    #[must_use]
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }

    /// A fresh idle session wired with the configured pacing and seed.
    #[must_use]
    pub fn build_controller(&self) -> SessionController {
        let controller = SessionController::new(self.pacing, Clock::system());
        match self.shuffle_seed {
            Some(seed) => controller.with_seed(seed),
            None => controller,
        }
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

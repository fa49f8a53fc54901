use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::Instant;
use tracing::trace;

use services::SessionController;

/// How often the driver checks for due pacing events.
pub const DRIVER_TICK: Duration = Duration::from_millis(50);

/// Map real elapsed time onto the controller's virtual clock.
///
/// Only writes to the signal while something is pending, so an idle session
/// never re-renders from the driver.
pub fn use_pacing_driver(controller: Signal<SessionController>) {
    use_future(move || async move {
        let mut controller = controller;
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(DRIVER_TICK).await;
            let now = Instant::now();
            let elapsed = now.duration_since(last);
            last = now;

            if !controller.peek().has_pending() {
                continue;
            }
            let fired = controller.write().advance(elapsed);
            if fired > 0 {
                trace!(fired, "pacing driver fired events");
            }
        }
    });
}

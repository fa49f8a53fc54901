#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod pacing;
pub mod scheduler;

pub use atlas_core::Clock;

pub use controller::SessionController;
pub use error::ControllerError;
pub use pacing::Pacing;
pub use scheduler::PacingScheduler;

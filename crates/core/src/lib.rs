#![forbid(unsafe_code)]

pub mod model;
pub mod time;
pub mod transition;

pub use time::Clock;

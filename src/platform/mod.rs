//! Platform layer: terminal keyboard input and frame pacing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{KeyTracker, poll_events};

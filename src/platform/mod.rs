//! Platform abstraction layer
//!
//! Handles the outside world for the loop controller:
//! - Frame signals (scheduling the next tick)
//! - Input events (mapping to flap / restart)
//! - Display scaling (cosmetic only)

pub mod input;
pub mod layout;
pub mod time;

pub use input::{InputEvent, InputSignal, KeyCode};
pub use layout::{DisplayScale, display_scale};
pub use time::{FixedRateScheduler, FrameScheduler, ManualScheduler};

//! Foundation utilities shared by the UI layer
//!
//! Math aliases, frame timing, and logging setup. Nothing in here knows
//! about scenes or sprite batches.

pub mod logging;
pub mod math;
pub mod time;

pub use math::{Color, Rect, Vec2, Vec4};
pub use time::{FrameTime, Timer};

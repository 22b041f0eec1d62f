//! Frame timing
//!
//! The host loop calls update then draw once per frame and supplies the
//! elapsed-time context. `FrameTime` is that context; `Timer` produces it.

use std::time::Instant;

/// Per-frame timing context supplied by the host loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame
    pub delta_seconds: f32,

    /// Seconds since the loop started
    pub total_seconds: f32,

    /// Frames rendered so far
    pub frame_count: u64,
}

impl FrameTime {
    /// Timing context for a frame before the clock has advanced
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            delta_seconds: 0.0,
            total_seconds: 0.0,
            frame_count: 0,
        }
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::zero()
    }
}

/// High-precision frame clock
pub struct Timer {
    last_frame: Instant,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer starting now
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one frame and return the new timing context
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.total_time += delta;
        self.frame_count += 1;

        FrameTime {
            delta_seconds: delta,
            total_seconds: self.total_time,
            frame_count: self.frame_count,
        }
    }
}

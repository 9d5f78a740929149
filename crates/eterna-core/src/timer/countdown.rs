//! Per-phase countdown driven by external ticks.
//!
//! The countdown owns no thread and reads no clock. Whoever hosts an engine
//! delivers one `tick()` per elapsed second (a UI timer, a wall-clock pump in
//! the CLI, or a test loop).
//!
//! ## Expiry
//!
//! ```text
//! remaining: 3 -> 2 -> 1 -> 0 -> Expired
//! ```
//!
//! A tick that finds zero seconds left expires the countdown. Expiry stops
//! it, so later ticks are reported as `Tick::Stopped`.

use serde::{Deserialize, Serialize};

/// Outcome of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Tick {
    /// The countdown is not running; the tick was ignored.
    Stopped,
    /// One second was consumed.
    Running { remaining_secs: u32 },
    /// The countdown ran out on this tick.
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown holding its full duration.
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Refill to the full duration and start running.
    pub fn restart(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.running = true;
    }

    /// Stop without touching the remaining time. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Stopped;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            Tick::Running {
                remaining_secs: self.remaining_secs,
            }
        } else {
            self.running = false;
            Tick::Expired
        }
    }
}

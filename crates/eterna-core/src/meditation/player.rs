//! Meditation player.
//!
//! Counts up one second per `tick()` while playing. Reaching the
//! meditation's duration (by ticking or skipping) completes the session and
//! hands a [`MeditationSession`] to the sink exactly once.
//!
//! ```text
//! Idle -> Playing <-> Paused -> Completed
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{MeditationSession, MeditationType, SessionSink};
use crate::events::Event;

pub const DEFAULT_SKIP_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Idle,
    Playing,
    Paused,
    Completed,
}

#[derive(Debug)]
pub struct MeditationPlayer<S> {
    sink: S,
    meditation: MeditationType,
    elapsed_secs: u32,
    skip_secs: u32,
    state: PlayerState,
}

impl<S: SessionSink> MeditationPlayer<S> {
    pub fn new(sink: S, meditation: MeditationType) -> Self {
        Self {
            sink,
            meditation,
            elapsed_secs: 0,
            skip_secs: DEFAULT_SKIP_SECS,
            state: PlayerState::Idle,
        }
    }

    pub fn with_skip_secs(mut self, skip_secs: u32) -> Self {
        self.skip_secs = skip_secs;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn meditation(&self) -> MeditationType {
        self.meditation
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.meditation.duration_secs().saturating_sub(self.elapsed_secs)
    }

    /// 0.0 .. 1.0 through the meditation.
    pub fn progress(&self) -> f64 {
        let total = self.meditation.duration_secs();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_secs) / f64::from(total)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn play(&mut self) -> Option<Event> {
        match self.state {
            PlayerState::Idle | PlayerState::Paused => {
                self.state = PlayerState::Playing;
                debug!(meditation = ?self.meditation, elapsed = self.elapsed_secs, "meditation playing");
                Some(Event::MeditationStarted {
                    meditation: self.meditation,
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            PlayerState::Playing | PlayerState::Completed => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != PlayerState::Playing {
            return None;
        }
        self.state = PlayerState::Paused;
        Some(Event::MeditationPaused {
            meditation: self.meditation,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Leave the session without recording it.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            PlayerState::Playing | PlayerState::Paused => {
                self.state = PlayerState::Idle;
                Some(Event::MeditationStopped {
                    meditation: self.meditation,
                    at: Utc::now(),
                })
            }
            PlayerState::Idle | PlayerState::Completed => None,
        }
    }

    /// Rewind to the start. A playing session keeps playing; a completed one
    /// becomes Idle so it can be played (and recorded) again.
    pub fn restart(&mut self) -> Option<Event> {
        self.elapsed_secs = 0;
        match self.state {
            PlayerState::Playing => Some(Event::MeditationStarted {
                meditation: self.meditation,
                elapsed_secs: 0,
                at: Utc::now(),
            }),
            PlayerState::Completed => {
                self.state = PlayerState::Idle;
                None
            }
            PlayerState::Idle | PlayerState::Paused => None,
        }
    }

    pub fn skip_forward(&mut self) -> Option<Event> {
        if self.state == PlayerState::Completed {
            return None;
        }
        let total = self.meditation.duration_secs();
        self.elapsed_secs = self.elapsed_secs.saturating_add(self.skip_secs).min(total);
        if self.elapsed_secs >= total {
            return Some(self.complete());
        }
        None
    }

    /// One elapsed second.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != PlayerState::Playing {
            return None;
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.meditation.duration_secs() {
            return Some(self.complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Event {
        self.state = PlayerState::Completed;
        let session = MeditationSession::completed(self.meditation, Utc::now());
        let event = Event::MeditationCompleted {
            session_id: session.id.clone(),
            meditation: session.meditation,
            duration_secs: session.duration_secs,
            at: session.date,
        };
        info!(meditation = ?self.meditation, "meditation completed");
        self.sink.record_meditation(session);
        event
    }
}

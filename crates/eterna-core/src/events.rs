use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::games::{BlockId, GameType};
use crate::meditation::MeditationType;

/// Every state change in an engine produces an Event.
/// Front ends render from events and engine queries; a command or tick that
/// returns `None` changed nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A quiz put a new puzzle or question on screen with a fresh countdown.
    QuestionPresented {
        game: GameType,
        index: usize,
        total: usize,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// A quiz answer was judged. `timed_out` marks a countdown expiry.
    AnswerChecked {
        game: GameType,
        index: usize,
        correct: bool,
        timed_out: bool,
        points: u32,
        score: u32,
        at: DateTime<Utc>,
    },
    LevelStarted {
        level: usize,
        blocks_required: usize,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    BlockSelected {
        block_id: BlockId,
        at: DateTime<Utc>,
    },
    BlockPlaced {
        block_id: BlockId,
        level: usize,
        slot: usize,
        at: DateTime<Utc>,
    },
    LevelCompleted {
        level: usize,
        points: u32,
        score: u32,
        at: DateTime<Utc>,
    },
    /// The game ran to its natural end. `recorded` is the value offered to
    /// the high-score table (the pyramid records levels, not points).
    GameCompleted {
        game: GameType,
        score: u32,
        recorded: u32,
        at: DateTime<Utc>,
    },
    /// The game ended early (lives exhausted or level countdown expired).
    GameOver {
        game: GameType,
        score: u32,
        recorded: u32,
        at: DateTime<Utc>,
    },
    MeditationStarted {
        meditation: MeditationType,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    MeditationPaused {
        meditation: MeditationType,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
    MeditationStopped {
        meditation: MeditationType,
        at: DateTime<Utc>,
    },
    MeditationCompleted {
        session_id: String,
        meditation: MeditationType,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether this event ends a play-through.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::GameCompleted { .. } | Event::GameOver { .. })
    }
}

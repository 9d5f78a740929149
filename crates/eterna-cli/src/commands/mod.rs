pub mod config;
pub mod journal;
pub mod meditation;
pub mod mind;
pub mod onboarding;
pub mod play;
pub mod scores;

use std::io::BufRead;
use std::time::{Duration, Instant};

use eterna_core::storage::Database;
use eterna_core::{AppState, Event};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the app state backed by `<data_dir>/eterna.db`.
pub fn open_state() -> Result<AppState<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    tracing::debug!(?db, "store opened");
    Ok(AppState::load(db))
}

/// Turns wall-clock time into whole-second engine ticks.
pub struct TickClock {
    last: Instant,
}

impl TickClock {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous call. The sub-second remainder
    /// carries over.
    pub fn take_ticks(&mut self) -> u32 {
        let secs = self.last.elapsed().as_secs();
        self.last += Duration::from_secs(secs);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

/// Next trimmed input line, or `None` at end of input.
pub fn read_command(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// One-line human description of an engine event. Presentation events the
/// callers render themselves return `None`.
pub fn describe(event: &Event) -> Option<String> {
    let line = match event {
        Event::QuestionPresented { .. } => return None,
        Event::AnswerChecked { timed_out: true, .. } => "Time's up!".to_string(),
        Event::AnswerChecked {
            correct: true,
            points,
            score,
            ..
        } => format!("Correct! +{points} (score {score})"),
        Event::AnswerChecked { .. } => "Not quite.".to_string(),
        Event::LevelStarted {
            level,
            blocks_required,
            duration_secs,
            ..
        } => format!(
            "Level {}: place {blocks_required} blocks within {duration_secs}s",
            level + 1
        ),
        Event::BlockSelected { block_id, .. } => format!("Picked up block #{block_id}"),
        Event::BlockPlaced { block_id, slot, .. } => {
            format!("Block #{block_id} set in slot {}", slot + 1)
        }
        Event::LevelCompleted {
            level,
            points,
            score,
            ..
        } => format!("Level {} complete! +{points} (score {score})", level + 1),
        Event::GameCompleted { game, score, .. } => {
            format!("{} complete! Final score {score}", game.title())
        }
        Event::GameOver { game, score, .. } => {
            format!("{}: game over. Final score {score}", game.title())
        }
        Event::MeditationStarted {
            meditation,
            elapsed_secs,
            ..
        } => format!("{} playing from {}", meditation.title(), clock_label(*elapsed_secs)),
        Event::MeditationPaused { elapsed_secs, .. } => {
            format!("Paused at {}", clock_label(*elapsed_secs))
        }
        Event::MeditationStopped { meditation, .. } => format!("{} stopped", meditation.title()),
        Event::MeditationCompleted { meditation, .. } => {
            format!("{} complete. Session saved.", meditation.title())
        }
    };
    Some(line)
}

/// `m:ss`
pub fn clock_label(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

//! Hieroglyph quiz: match a symbol to its meaning against a per-puzzle
//! countdown, with three lives.
//!
//! A correct answer scores `max(5, seconds_remaining)`. A wrong answer or an
//! expired countdown costs a life; the third miss ends the game. Ten puzzles
//! are drawn per play-through from the shuffled catalog.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::{GamePhase, GameRng, GameType, ScoreSink};
use crate::catalog::{HieroglyphPuzzle, HIEROGLYPH_PUZZLES};
use crate::events::Event;
use crate::timer::{Countdown, Tick};

/// Puzzles per play-through.
pub const HIEROGLYPH_ROUND_LEN: usize = 10;
pub const HIEROGLYPH_LIVES: u8 = 3;
pub const PUZZLE_SECONDS: u32 = 30;

const MIN_PUZZLE_POINTS: u32 = 5;

/// Serializable view of the quiz for front ends.
#[derive(Debug, Clone, Serialize)]
pub struct HieroglyphSnapshot {
    pub phase: GamePhase,
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub lives: u8,
    pub remaining_secs: u32,
    pub puzzle: Option<HieroglyphPuzzle>,
    pub selected: Option<&'static str>,
    pub last_correct: Option<bool>,
}

#[derive(Debug)]
pub struct HieroglyphQuiz<S> {
    sink: S,
    rng: GameRng,
    catalog: &'static [HieroglyphPuzzle],
    queue: Vec<HieroglyphPuzzle>,
    index: usize,
    score: u32,
    lives: u8,
    countdown: Countdown,
    selected: Option<&'static str>,
    last_correct: Option<bool>,
    phase: GamePhase,
}

impl<S: ScoreSink> HieroglyphQuiz<S> {
    pub fn new(sink: S, rng: GameRng) -> Self {
        Self::with_catalog(sink, rng, HIEROGLYPH_PUZZLES)
    }

    pub fn with_catalog(sink: S, rng: GameRng, catalog: &'static [HieroglyphPuzzle]) -> Self {
        Self {
            sink,
            rng,
            catalog,
            queue: Vec::new(),
            index: 0,
            score: 0,
            lives: HIEROGLYPH_LIVES,
            countdown: Countdown::new(PUZZLE_SECONDS),
            selected: None,
            last_correct: None,
            phase: GamePhase::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of puzzles this play-through will present.
    pub fn round_len(&self) -> usize {
        HIEROGLYPH_ROUND_LEN.min(self.queue.len())
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn current_puzzle(&self) -> Option<&HieroglyphPuzzle> {
        if self.index < self.round_len() {
            self.queue.get(self.index)
        } else {
            None
        }
    }

    pub fn queue(&self) -> &[HieroglyphPuzzle] {
        &self.queue
    }

    pub fn selected_answer(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_correct
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> HieroglyphSnapshot {
        HieroglyphSnapshot {
            phase: self.phase,
            index: self.index,
            total: self.round_len(),
            score: self.score,
            lives: self.lives,
            remaining_secs: self.countdown.remaining_secs(),
            puzzle: self.current_puzzle().copied(),
            selected: self.selected,
            last_correct: self.last_correct,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Shuffle the catalog and present the first puzzle. Only valid from Idle.
    pub fn start(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Idle {
            return None;
        }
        self.queue = self.rng.shuffled(self.catalog);
        self.index = 0;
        self.score = 0;
        self.lives = HIEROGLYPH_LIVES;
        self.selected = None;
        self.last_correct = None;
        debug!(puzzles = self.round_len(), "hieroglyph quiz started");
        Some(self.load(0))
    }

    /// Abandon the current play-through and start over with a fresh shuffle.
    pub fn restart(&mut self) -> Option<Event> {
        self.countdown.stop();
        self.phase = GamePhase::Idle;
        self.start()
    }

    /// Answer the current puzzle. Choices that are not among the puzzle's
    /// options are ignored.
    pub fn select_answer(&mut self, choice: &str) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let option = self
            .current_puzzle()?
            .options
            .iter()
            .copied()
            .find(|option| *option == choice)?;
        Some(self.resolve(Some(option)))
    }

    /// Move past a shown result to the next puzzle, or to Complete.
    pub fn next(&mut self) -> Option<Event> {
        if self.phase != GamePhase::ShowingResult {
            return None;
        }
        self.index += 1;
        Some(self.load(self.index))
    }

    /// One elapsed second. Expiry counts as a wrong answer.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        match self.countdown.tick() {
            Tick::Expired => Some(self.resolve(None)),
            Tick::Running { .. } | Tick::Stopped => None,
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn load(&mut self, index: usize) -> Event {
        if index >= self.round_len() {
            return self.finish(GamePhase::Complete);
        }
        self.selected = None;
        self.last_correct = None;
        self.phase = GamePhase::Playing;
        self.countdown.restart();
        Event::QuestionPresented {
            game: GameType::HieroglyphPuzzle,
            index,
            total: self.round_len(),
            duration_secs: PUZZLE_SECONDS,
            at: Utc::now(),
        }
    }

    fn resolve(&mut self, choice: Option<&'static str>) -> Event {
        self.countdown.stop();
        let remaining = self.countdown.remaining_secs();
        let correct = match (choice, self.current_puzzle()) {
            (Some(choice), Some(puzzle)) => choice == puzzle.correct_answer,
            _ => false,
        };
        self.selected = choice;
        self.last_correct = Some(correct);

        let points = if correct {
            MIN_PUZZLE_POINTS.max(remaining)
        } else {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                return self.finish(GamePhase::GameOver);
            }
            0
        };
        self.score += points;
        self.phase = GamePhase::ShowingResult;
        debug!(
            index = self.index,
            correct,
            points,
            lives = self.lives,
            "hieroglyph answer checked"
        );
        Event::AnswerChecked {
            game: GameType::HieroglyphPuzzle,
            index: self.index,
            correct,
            timed_out: choice.is_none(),
            points,
            score: self.score,
            at: Utc::now(),
        }
    }

    fn finish(&mut self, phase: GamePhase) -> Event {
        self.countdown.stop();
        self.phase = phase;
        self.sink.record_score(GameType::HieroglyphPuzzle, self.score);
        info!(score = self.score, ?phase, "hieroglyph quiz finished");
        let game = GameType::HieroglyphPuzzle;
        let at = Utc::now();
        if phase == GamePhase::GameOver {
            Event::GameOver {
                game,
                score: self.score,
                recorded: self.score,
                at,
            }
        } else {
            Event::GameCompleted {
                game,
                score: self.score,
                recorded: self.score,
                at,
            }
        }
    }
}

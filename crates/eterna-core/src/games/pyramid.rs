//! Pyramid builder: fill every slot of a level before its countdown runs out.
//!
//! Level `k` (counted from the base) has `N - k` slots and gets exactly that
//! many fresh blocks. Placing is a two-step interaction: select a block, then
//! place it into an empty slot. Finishing a level scores
//! `max(10, seconds_remaining * 2)`.
//!
//! The high-score table receives the number of fully completed levels, not
//! the point score.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{GamePhase, GameRng, GameType, ScoreSink};
use crate::events::Event;
use crate::timer::{Countdown, Tick};

pub const LEVEL_SECONDS: u32 = 60;

const MIN_LEVEL_POINTS: u32 = 10;
const POINTS_PER_SECOND_LEFT: u32 = 2;

const DECORATIONS: &[&str] = &["𓂀", "☥", "𓇳", "𓋹", "𓊽", "𓆣", "𓁹", "𓋴"];

/// Pyramid height. Both variants share the timing and scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PyramidVariant {
    /// Five levels.
    #[default]
    Classic,
    /// Seven levels.
    Grand,
}

impl PyramidVariant {
    pub fn levels(self) -> usize {
        match self {
            PyramidVariant::Classic => 5,
            PyramidVariant::Grand => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PyramidBlock {
    pub id: BlockId,
    pub level: usize,
    pub placed: bool,
    pub decoration: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PyramidSnapshot {
    pub phase: GamePhase,
    pub variant: PyramidVariant,
    pub level: usize,
    pub levels: usize,
    pub score: u32,
    pub remaining_secs: u32,
    pub slots: Vec<Option<BlockId>>,
    pub available: Vec<PyramidBlock>,
    pub selected: Option<BlockId>,
    pub built: usize,
}

#[derive(Debug)]
pub struct PyramidBuilder<S> {
    sink: S,
    rng: GameRng,
    variant: PyramidVariant,
    current_level: usize,
    available: Vec<PyramidBlock>,
    slots: Vec<Option<BlockId>>,
    /// Placed blocks of every finished or in-progress level, base first.
    built: Vec<PyramidBlock>,
    selected: Option<BlockId>,
    score: u32,
    countdown: Countdown,
    phase: GamePhase,
    next_block_id: u64,
}

impl<S: ScoreSink> PyramidBuilder<S> {
    pub fn new(sink: S, rng: GameRng, variant: PyramidVariant) -> Self {
        Self {
            sink,
            rng,
            variant,
            current_level: 0,
            available: Vec::new(),
            slots: Vec::new(),
            built: Vec::new(),
            selected: None,
            score: 0,
            countdown: Countdown::new(LEVEL_SECONDS),
            phase: GamePhase::Idle,
            next_block_id: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn variant(&self) -> PyramidVariant {
        self.variant
    }

    pub fn levels(&self) -> usize {
        self.variant.levels()
    }

    /// Blocks (and slots) needed to finish `level`.
    pub fn blocks_required(&self, level: usize) -> usize {
        self.levels().saturating_sub(level)
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn available_blocks(&self) -> &[PyramidBlock] {
        &self.available
    }

    pub fn slots(&self) -> &[Option<BlockId>] {
        &self.slots
    }

    pub fn built_blocks(&self) -> &[PyramidBlock] {
        &self.built
    }

    pub fn selected_block(&self) -> Option<BlockId> {
        self.selected
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> PyramidSnapshot {
        PyramidSnapshot {
            phase: self.phase,
            variant: self.variant,
            level: self.current_level,
            levels: self.levels(),
            score: self.score,
            remaining_secs: self.countdown.remaining_secs(),
            slots: self.slots.clone(),
            available: self.available.clone(),
            selected: self.selected,
            built: self.built.len(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Idle {
            return None;
        }
        self.current_level = 0;
        self.score = 0;
        self.built.clear();
        self.selected = None;
        debug!(levels = self.levels(), "pyramid builder started");
        Some(self.load_level())
    }

    pub fn restart(&mut self) -> Option<Event> {
        self.countdown.stop();
        self.phase = GamePhase::Idle;
        self.start()
    }

    /// Pick up an available block of the current level.
    pub fn select_block(&mut self, id: BlockId) -> Option<Event> {
        if self.phase != GamePhase::Playing || !self.available.iter().any(|b| b.id == id) {
            return None;
        }
        self.selected = Some(id);
        Some(Event::BlockSelected {
            block_id: id,
            at: Utc::now(),
        })
    }

    /// Put the selected block into an empty slot of the current level.
    ///
    /// Returns `LevelCompleted` instead of `BlockPlaced` when this placement
    /// fills the level.
    pub fn place_selected_block(&mut self, slot: usize) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let id = self.selected?;
        if !matches!(self.slots.get(slot), Some(None)) {
            return None;
        }
        let position = self.available.iter().position(|b| b.id == id)?;

        let mut block = self.available.remove(position);
        block.placed = true;
        self.slots[slot] = Some(id);
        self.built.push(block);
        self.selected = None;
        debug!(level = self.current_level, slot, block = %id, "block placed");

        if self.slots.iter().all(Option::is_some) {
            return Some(self.complete_level());
        }
        Some(Event::BlockPlaced {
            block_id: id,
            level: self.current_level,
            slot,
            at: Utc::now(),
        })
    }

    /// Leave the level-complete overlay for the next level, or finish.
    pub fn advance_level(&mut self) -> Option<Event> {
        if self.phase != GamePhase::LevelComplete {
            return None;
        }
        self.current_level += 1;
        if self.current_level >= self.levels() {
            return Some(self.finish(GamePhase::Complete));
        }
        Some(self.load_level())
    }

    /// One elapsed second. Expiry with the level unfinished ends the game.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        match self.countdown.tick() {
            Tick::Expired => Some(self.finish(GamePhase::GameOver)),
            Tick::Running { .. } | Tick::Stopped => None,
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn load_level(&mut self) -> Event {
        let level = self.current_level;
        let required = self.blocks_required(level);
        let blocks: Vec<PyramidBlock> = (0..required).map(|_| self.new_block(level)).collect();
        self.available = blocks;
        self.slots = vec![None; required];
        self.selected = None;
        self.phase = GamePhase::Playing;
        self.countdown.restart();
        Event::LevelStarted {
            level,
            blocks_required: required,
            duration_secs: LEVEL_SECONDS,
            at: Utc::now(),
        }
    }

    fn new_block(&mut self, level: usize) -> PyramidBlock {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        PyramidBlock {
            id,
            level,
            placed: false,
            decoration: self.rng.pick(DECORATIONS).copied().unwrap_or("☥"),
        }
    }

    fn complete_level(&mut self) -> Event {
        self.countdown.stop();
        let points = MIN_LEVEL_POINTS.max(self.countdown.remaining_secs() * POINTS_PER_SECOND_LEFT);
        self.score += points;
        self.phase = GamePhase::LevelComplete;
        info!(level = self.current_level, points, score = self.score, "pyramid level complete");
        Event::LevelCompleted {
            level: self.current_level,
            points,
            score: self.score,
            at: Utc::now(),
        }
    }

    fn finish(&mut self, phase: GamePhase) -> Event {
        self.countdown.stop();
        self.selected = None;
        self.phase = phase;
        let levels_completed = u32::try_from(self.current_level).unwrap_or(u32::MAX);
        self.sink.record_score(GameType::PyramidBuilder, levels_completed);
        info!(levels_completed, score = self.score, ?phase, "pyramid builder finished");
        let game = GameType::PyramidBuilder;
        let at = Utc::now();
        if phase == GamePhase::GameOver {
            Event::GameOver {
                game,
                score: self.score,
                recorded: levels_completed,
                at,
            }
        } else {
            Event::GameCompleted {
                game,
                score: self.score,
                recorded: levels_completed,
                at,
            }
        }
    }
}

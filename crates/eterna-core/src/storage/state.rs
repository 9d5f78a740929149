//! The app's persisted state, owned explicitly and handed to engines.
//!
//! `AppState` is created once at startup from a [`KvStore`] and mutated only
//! through its named operations, each of which writes the affected record
//! back before returning. Reads never fail: a missing or unreadable record
//! falls back to its default.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::KvStore;
use crate::error::Result;
use crate::games::{GameType, ScoreSink};
use crate::journal::JournalEntry;
use crate::meditation::{MeditationSession, MeditationStats, SessionSink};

/// Persisted record names.
pub mod keys {
    pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";
    pub const MEDITATION_PROGRESS: &str = "meditationProgress";
    pub const JOURNAL_ENTRIES: &str = "journalEntries";
    pub const GAME_SCORES: &str = "gameScores";
}

/// Best score per game. Fields only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScores {
    #[serde(default)]
    pub hieroglyph_high_score: u32,
    #[serde(default)]
    pub history_high_score: u32,
    #[serde(default)]
    pub pyramid_high_score: u32,
}

impl GameScores {
    pub fn get(&self, game: GameType) -> u32 {
        match game {
            GameType::HieroglyphPuzzle => self.hieroglyph_high_score,
            GameType::HistoryQuiz => self.history_high_score,
            GameType::PyramidBuilder => self.pyramid_high_score,
        }
    }

    /// Keep the maximum. Returns whether the stored value changed.
    pub fn update(&mut self, game: GameType, score: u32) -> bool {
        let slot = match game {
            GameType::HieroglyphPuzzle => &mut self.hieroglyph_high_score,
            GameType::HistoryQuiz => &mut self.history_high_score,
            GameType::PyramidBuilder => &mut self.pyramid_high_score,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
pub struct AppState<K> {
    store: K,
    has_seen_onboarding: bool,
    meditation_progress: Vec<MeditationSession>,
    journal_entries: Vec<JournalEntry>,
    game_scores: GameScores,
}

impl<K: KvStore> AppState<K> {
    /// Read every record from `store`, defaulting whatever is missing or
    /// corrupt.
    pub fn load(store: K) -> Self {
        let has_seen_onboarding = read(&store, keys::HAS_SEEN_ONBOARDING);
        let meditation_progress = read(&store, keys::MEDITATION_PROGRESS);
        let journal_entries = read(&store, keys::JOURNAL_ENTRIES);
        let game_scores = read(&store, keys::GAME_SCORES);
        Self {
            store,
            has_seen_onboarding,
            meditation_progress,
            journal_entries,
            game_scores,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn has_seen_onboarding(&self) -> bool {
        self.has_seen_onboarding
    }

    pub fn meditation_progress(&self) -> &[MeditationSession] {
        &self.meditation_progress
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }

    pub fn game_scores(&self) -> GameScores {
        self.game_scores
    }

    /// Stats with days taken in the local timezone; pass the local `today`.
    pub fn meditation_stats(&self, today: NaiveDate) -> MeditationStats {
        MeditationStats::from_sessions(&self.meditation_progress, today, &chrono::Local)
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    // ── Updates ──────────────────────────────────────────────────────

    /// # Errors
    /// Returns an error if the flag cannot be written.
    pub fn complete_onboarding(&mut self) -> Result<()> {
        self.has_seen_onboarding = true;
        write(&mut self.store, keys::HAS_SEEN_ONBOARDING, &self.has_seen_onboarding)
    }

    /// # Errors
    /// Returns an error if the session list cannot be written.
    pub fn add_meditation_session(&mut self, session: MeditationSession) -> Result<()> {
        info!(id = %session.id, meditation = ?session.meditation, "meditation session recorded");
        self.meditation_progress.push(session);
        write(&mut self.store, keys::MEDITATION_PROGRESS, &self.meditation_progress)
    }

    /// # Errors
    /// Returns an error if the entry list cannot be written.
    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> Result<()> {
        info!(id = %entry.id, mood = ?entry.mood, "journal entry recorded");
        self.journal_entries.push(entry);
        write(&mut self.store, keys::JOURNAL_ENTRIES, &self.journal_entries)
    }

    /// Apply the keep-maximum rule and persist. Returns whether the high
    /// score moved.
    ///
    /// # Errors
    /// Returns an error if the score record cannot be written.
    pub fn update_game_score(&mut self, game: GameType, score: u32) -> Result<bool> {
        let improved = self.game_scores.update(game, score);
        if improved {
            info!(?game, score, "new high score");
        }
        write(&mut self.store, keys::GAME_SCORES, &self.game_scores)?;
        Ok(improved)
    }
}

impl<K: KvStore> ScoreSink for AppState<K> {
    fn record_score(&mut self, game: GameType, score: u32) {
        if let Err(e) = self.update_game_score(game, score) {
            warn!(?game, score, error = %e, "failed to persist game score");
        }
    }
}

impl<K: KvStore> SessionSink for AppState<K> {
    fn record_meditation(&mut self, session: MeditationSession) {
        if let Err(e) = self.add_meditation_session(session) {
            warn!(error = %e, "failed to persist meditation session");
        }
    }
}

fn read<K: KvStore, T: DeserializeOwned + Default>(store: &K, key: &str) -> T {
    match store.kv_get(key) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(key, error = %e, "corrupt record, using default");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "failed to read record, using default");
            T::default()
        }
    }
}

fn write<K: KvStore, T: Serialize + ?Sized>(store: &mut K, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.kv_set(key, &json)
}

//! # Eterna Core Library
//!
//! Core logic for Eterna, an ancient-Egypt themed wellness app: three
//! timed mini-games, guided meditations and a reflective journal. The CLI
//! binary is a thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Games**: tick-driven state machines. The caller invokes `tick()` once
//!   per second and forwards user commands; every command returns an
//!   optional [`Event`] describing what changed
//! - **Catalog**: the fixed hieroglyph and history question banks
//! - **Meditation / Journal**: session player, statistics and entry drafts
//! - **Mind training**: the fixed exercise cards with tips and quotes
//! - **Storage**: [`AppState`] over a key-value store (SQLite or in-memory)
//!   and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`HieroglyphQuiz`], [`HistoryQuiz`], [`PyramidBuilder`]: game engines
//! - [`MeditationPlayer`]: meditation countdown
//! - [`AppState`]: persisted scores, sessions and entries
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod games;
pub mod journal;
pub mod meditation;
pub mod mind_training;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use games::{
    Achievement, GamePhase, GameRng, GameType, HieroglyphQuiz, HistoryQuiz, PyramidBuilder,
    PyramidVariant, ScoreSink,
};
pub use journal::{JournalDraft, JournalEntry, Mood};
pub use meditation::{MeditationPlayer, MeditationSession, MeditationType, SessionSink};
pub use mind_training::{MindTrainingCard, MindTrainingCategory};
pub use storage::{AppState, Config, Database, GameScores, KvStore, MemoryStore};
pub use timer::{Countdown, Tick};

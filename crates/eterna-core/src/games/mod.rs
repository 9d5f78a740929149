//! Mini-game engines.
//!
//! Each engine is a pure state machine with no rendering and no clock.
//! Hosts feed it user commands and one `tick()` per elapsed second, and
//! render from the returned [`Event`](crate::Event)s plus the engine queries.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Playing <-> (ShowingResult | LevelComplete) -> ... -> (Complete | GameOver)
//! ```
//!
//! `Complete` and `GameOver` are terminal until `restart()`. Entering either
//! one offers the result to the engine's [`ScoreSink`].

mod achievements;
mod hieroglyph;
mod history_quiz;
mod pyramid;
mod rng;

pub use achievements::Achievement;
pub use hieroglyph::{HieroglyphQuiz, HieroglyphSnapshot, HIEROGLYPH_LIVES, HIEROGLYPH_ROUND_LEN, PUZZLE_SECONDS};
pub use history_quiz::{HistoryQuiz, HistorySnapshot, HISTORY_ROUND_LEN, QUESTION_SECONDS};
pub use pyramid::{
    BlockId, PyramidBlock, PyramidBuilder, PyramidSnapshot, PyramidVariant, LEVEL_SECONDS,
};
pub use rng::GameRng;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameType {
    HieroglyphPuzzle,
    HistoryQuiz,
    PyramidBuilder,
}

impl GameType {
    pub const ALL: [GameType; 3] = [
        GameType::HieroglyphPuzzle,
        GameType::HistoryQuiz,
        GameType::PyramidBuilder,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GameType::HieroglyphPuzzle => "Hieroglyph Puzzle",
            GameType::HistoryQuiz => "History Quiz",
            GameType::PyramidBuilder => "Build the Pyramid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Idle,
    Playing,
    /// A quiz answer is on screen, waiting for `next()`.
    ShowingResult,
    /// A pyramid level is finished, waiting for `advance_level()`.
    LevelComplete,
    Complete,
    GameOver,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Complete | GamePhase::GameOver)
    }
}

/// Receives finished games. [`AppState`](crate::storage::AppState) applies
/// the keep-maximum rule and persists; tests can collect into a `Vec`.
pub trait ScoreSink {
    fn record_score(&mut self, game: GameType, score: u32);
}

impl<T: ScoreSink + ?Sized> ScoreSink for &mut T {
    fn record_score(&mut self, game: GameType, score: u32) {
        (**self).record_score(game, score);
    }
}

impl ScoreSink for Vec<(GameType, u32)> {
    fn record_score(&mut self, game: GameType, score: u32) {
        self.push((game, score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_type_uses_persisted_names() {
        assert_eq!(
            serde_json::to_string(&GameType::PyramidBuilder).unwrap(),
            "\"pyramidBuilder\""
        );
    }

    #[test]
    fn only_complete_and_game_over_are_terminal() {
        assert!(GamePhase::Complete.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(!GamePhase::ShowingResult.is_terminal());
        assert!(!GamePhase::LevelComplete.is_terminal());
    }
}

//! Static, read-only game content.
//!
//! Catalogs are never mutated. Engines copy and shuffle them per play-through.

mod hieroglyphs;
mod questions;

pub use hieroglyphs::HIEROGLYPH_PUZZLES;
pub use questions::QUIZ_QUESTIONS;

use serde::Serialize;

/// A symbol-to-meaning puzzle. `options` always contains `correct_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HieroglyphPuzzle {
    pub symbol: &'static str,
    pub meaning: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
}

impl HieroglyphPuzzle {
    pub fn is_option(&self, choice: &str) -> bool {
        self.options.contains(&choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Base points for a correct answer.
    pub fn points(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Novice Scribe",
            Difficulty::Medium => "Temple Scholar",
            Difficulty::Hard => "High Priest",
        }
    }
}

/// A multiple-choice history question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_index]
    }
}

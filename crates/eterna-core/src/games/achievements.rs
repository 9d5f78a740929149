use serde::Serialize;

use super::GameType;

/// Rank earned for a score, highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
}

struct Tier {
    min_score: u32,
    achievement: Achievement,
}

const fn tier(min_score: u32, title: &'static str, description: &'static str) -> Tier {
    Tier {
        min_score,
        achievement: Achievement { title, description },
    }
}

const HIEROGLYPH_TIERS: &[Tier] = &[
    tier(150, "Master Scribe", "You have mastered the ancient art of hieroglyphic reading!"),
    tier(100, "Temple Scholar", "Your knowledge of hieroglyphs grows like the wisdom of scribes."),
    tier(50, "Novice Reader", "You're beginning to understand the sacred symbols."),
    tier(0, "Student of Hieroglyphs", "Every great scribe started with their first symbol."),
];

const HISTORY_TIERS: &[Tier] = &[
    tier(300, "Pharaoh's Advisor", "Your knowledge rivals that of the greatest pharaohs!"),
    tier(200, "High Priest", "You possess the wisdom of the high priests."),
    tier(100, "Temple Scholar", "Your understanding of Egypt's history is growing strong."),
    tier(0, "Novice Scribe", "You're on the path to ancient wisdom."),
];

// Pyramid scores are completed levels.
const PYRAMID_TIERS: &[Tier] = &[
    tier(7, "Master Builder", "You've built a pyramid worthy of the greatest pharaohs!"),
    tier(5, "Royal Architect", "Your architectural skills honor the ancient builders."),
    tier(3, "Stone Mason", "You're learning the sacred art of pyramid construction."),
    tier(0, "Apprentice Builder", "Every master builder started with a single stone."),
];

impl Achievement {
    pub fn for_score(game: GameType, score: u32) -> Achievement {
        let tiers = match game {
            GameType::HieroglyphPuzzle => HIEROGLYPH_TIERS,
            GameType::HistoryQuiz => HISTORY_TIERS,
            GameType::PyramidBuilder => PYRAMID_TIERS,
        };
        tiers
            .iter()
            .find(|t| score >= t.min_score)
            .map(|t| t.achievement)
            .unwrap_or(tiers[tiers.len() - 1].achievement)
    }
}

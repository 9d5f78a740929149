//! Mind-training exercises: four themed cards, each tied to a category that
//! carries practice tips and a closing wisdom quote.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MindTrainingCategory {
    Wisdom,
    Focus,
    Creativity,
    Resilience,
}

impl MindTrainingCategory {
    pub const ALL: [MindTrainingCategory; 4] = [
        MindTrainingCategory::Wisdom,
        MindTrainingCategory::Focus,
        MindTrainingCategory::Creativity,
        MindTrainingCategory::Resilience,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MindTrainingCategory::Wisdom => "Ancient Wisdom",
            MindTrainingCategory::Focus => "Pharaoh Focus",
            MindTrainingCategory::Creativity => "Scribe Creativity",
            MindTrainingCategory::Resilience => "Desert Resilience",
        }
    }

    pub fn tips(self) -> [&'static str; 3] {
        match self {
            MindTrainingCategory::Wisdom => [
                "The ancient Egyptians believed wisdom came from observing nature and reflecting on experiences.",
                "Take time to pause and consider what each experience teaches you.",
                "Write down insights to remember them, like scribes recorded important knowledge.",
            ],
            MindTrainingCategory::Focus => [
                "Pharaohs needed intense focus to rule vast kingdoms effectively.",
                "Start with short periods of focused attention and gradually increase.",
                "Remove distractions from your environment, like clearing a temple for worship.",
            ],
            MindTrainingCategory::Creativity => [
                "Egyptian artists and scribes were highly creative, inventing beautiful art and writing.",
                "Don't judge your creative output; let ideas flow freely like the Nile.",
                "Combine different ideas, like Egyptians blended various cultural influences.",
            ],
            MindTrainingCategory::Resilience => [
                "The pyramids have stood for thousands of years through storms and time.",
                "Build your inner strength gradually, like laying pyramid stones one by one.",
                "Remember that challenges are temporary, but your growth is permanent.",
            ],
        }
    }

    /// Shown when an exercise of this category is completed.
    pub fn wisdom_quote(self) -> &'static str {
        match self {
            MindTrainingCategory::Wisdom => {
                "The wise person learns from every experience, like the Nile learns from every stone in its path."
            }
            MindTrainingCategory::Focus => {
                "A focused mind is like a sharp chisel that can carve the hardest stone into beautiful art."
            }
            MindTrainingCategory::Creativity => {
                "Creativity flows like the Nile, bringing life and beauty wherever it touches."
            }
            MindTrainingCategory::Resilience => {
                "Be like the pyramid, built to last through any storm that time may bring."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MindTrainingCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub task: &'static str,
    pub icon: &'static str,
    pub category: MindTrainingCategory,
}

impl MindTrainingCard {
    /// Closing line for a finished exercise.
    pub fn completion_message(&self) -> String {
        format!(
            "You have completed the {} exercise. Your mind grows stronger like the eternal pyramids.",
            self.title
        )
    }
}

pub static MIND_TRAINING_CARDS: &[MindTrainingCard] = &[
    MindTrainingCard {
        slug: "pharaohs-focus",
        title: "Pharaoh's Focus",
        description: "Develop laser-sharp concentration like ancient rulers",
        task: "Practice focused attention on a single object for 10 minutes",
        icon: "👑",
        category: MindTrainingCategory::Focus,
    },
    MindTrainingCard {
        slug: "scribes-memory",
        title: "Scribe's Memory",
        description: "Enhance your memory using ancient Egyptian techniques",
        task: "Memorize and recite a sequence of hieroglyphs",
        icon: "📜",
        category: MindTrainingCategory::Wisdom,
    },
    MindTrainingCard {
        slug: "desert-resilience",
        title: "Desert Resilience",
        description: "Build mental toughness through challenging exercises",
        task: "Complete a difficult task without giving up",
        icon: "🏜️",
        category: MindTrainingCategory::Resilience,
    },
    MindTrainingCard {
        slug: "creative-visualization",
        title: "Creative Visualization",
        description: "Use imagination to create vivid mental images",
        task: "Visualize building a pyramid step by step",
        icon: "🎨",
        category: MindTrainingCategory::Creativity,
    },
];

/// Looks a card up by slug or title, ignoring ASCII case.
pub fn find_card(name: &str) -> Option<&'static MindTrainingCard> {
    MIND_TRAINING_CARDS
        .iter()
        .find(|c| c.slug.eq_ignore_ascii_case(name) || c.title.eq_ignore_ascii_case(name))
}

/// Like [`find_card`], failing with the unknown name.
pub fn card(name: &str) -> Result<&'static MindTrainingCard, ValidationError> {
    find_card(name).ok_or_else(|| ValidationError::UnknownVariant {
        kind: "mind training exercise".into(),
        value: name.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_card_per_category() {
        let categories: HashSet<_> = MIND_TRAINING_CARDS.iter().map(|c| c.category).collect();
        assert_eq!(MIND_TRAINING_CARDS.len(), 4);
        assert_eq!(categories.len(), MindTrainingCategory::ALL.len());
    }

    #[test]
    fn slugs_are_unique_and_resolve() {
        let slugs: HashSet<_> = MIND_TRAINING_CARDS.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), MIND_TRAINING_CARDS.len());
        for entry in MIND_TRAINING_CARDS {
            assert_eq!(find_card(entry.slug), Some(entry));
        }
    }

    #[test]
    fn lookup_accepts_title_and_ignores_case() {
        let memory = find_card("scribe's memory").unwrap();
        assert_eq!(memory.category, MindTrainingCategory::Wisdom);
        assert_eq!(find_card("PHARAOHS-FOCUS").unwrap().title, "Pharaoh's Focus");
        assert!(find_card("sphinx-riddle").is_none());

        let err = card("sphinx-riddle").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownVariant { .. }));
    }

    #[test]
    fn every_category_has_tips_and_quote() {
        for category in MindTrainingCategory::ALL {
            assert!(category.tips().iter().all(|t| !t.is_empty()));
            assert!(!category.wisdom_quote().is_empty());
        }
        assert!(MindTrainingCategory::Resilience
            .wisdom_quote()
            .starts_with("Be like the pyramid"));
    }

    #[test]
    fn completion_message_names_the_card() {
        let resilience = find_card("desert-resilience").unwrap();
        assert!(resilience.completion_message().contains("Desert Resilience exercise"));
    }
}

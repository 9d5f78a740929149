//! Reflective journal: moods, preset prompts and draft validation.
//!
//! Entries are append-only. A draft becomes an entry only when both its
//! effective prompt and its response have text.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::games::GameRng;

pub static JOURNAL_PROMPTS: &[&str] = &[
    "What wisdom did I gain today, like the ancient pharaohs?",
    "How can I build my inner pyramid of strength?",
    "What would the gods of Egypt teach me about this challenge?",
    "Like the Nile's flow, how can I adapt to change?",
    "What treasures of knowledge did I discover today?",
    "How did I show resilience like the eternal pyramids?",
    "What creative inspiration flowed through me like the Nile?",
    "How can I honor my ancestors' wisdom in my actions?",
    "What sacred knowledge am I ready to receive?",
    "How did I practice patience like the desert sands?",
];

/// A preset prompt for a new draft.
pub fn random_prompt(rng: &mut GameRng) -> &'static str {
    rng.pick(JOURNAL_PROMPTS).copied().unwrap_or(JOURNAL_PROMPTS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    #[default]
    PharaohPower,
    NileCalm,
    DesertStorm,
    GoldenSun,
    MysticalMoon,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::PharaohPower,
        Mood::NileCalm,
        Mood::DesertStorm,
        Mood::GoldenSun,
        Mood::MysticalMoon,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Mood::PharaohPower => "Pharaoh Power",
            Mood::NileCalm => "Nile Calm",
            Mood::DesertStorm => "Desert Storm",
            Mood::GoldenSun => "Golden Sun",
            Mood::MysticalMoon => "Mystical Moon",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::PharaohPower => "👑",
            Mood::NileCalm => "🌊",
            Mood::DesertStorm => "🌪️",
            Mood::GoldenSun => "☀️",
            Mood::MysticalMoon => "🌙",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Mood::PharaohPower => "pharaoh-power",
            Mood::NileCalm => "nile-calm",
            Mood::DesertStorm => "desert-storm",
            Mood::GoldenSun => "golden-sun",
            Mood::MysticalMoon => "mystical-moon",
        }
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(s) || m.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "mood".into(),
                value: s.into(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub prompt: String,
    pub response: String,
    pub mood: Mood,
}

/// An entry being written. A custom prompt, once set, wins over the preset.
#[derive(Debug, Clone, Default)]
pub struct JournalDraft {
    preset_prompt: String,
    custom_prompt: Option<String>,
    response: String,
    mood: Mood,
}

impl JournalDraft {
    pub fn new(preset_prompt: impl Into<String>) -> Self {
        Self {
            preset_prompt: preset_prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn prompt(&self) -> &str {
        self.custom_prompt.as_deref().unwrap_or(&self.preset_prompt)
    }

    pub fn can_save(&self) -> bool {
        !self.prompt().trim().is_empty() && !self.response.trim().is_empty()
    }

    /// Seal the draft into an entry dated `date`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` when the prompt or the response
    /// is blank.
    pub fn into_entry(self, date: DateTime<Utc>) -> Result<JournalEntry, ValidationError> {
        if self.prompt().trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "prompt".into(),
            });
        }
        if self.response.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "response".into(),
            });
        }
        let prompt = self.prompt().to_string();
        Ok(JournalEntry {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            prompt,
            response: self.response,
            mood: self.mood,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_prompt_overrides_preset() {
        let draft = JournalDraft::new(JOURNAL_PROMPTS[0]).with_custom_prompt("Why did the Nile flood?");
        assert_eq!(draft.prompt(), "Why did the Nile flood?");
    }

    #[test]
    fn blank_response_cannot_be_saved() {
        let draft = JournalDraft::new(JOURNAL_PROMPTS[1]).with_response("   ");
        assert!(!draft.can_save());
        let err = draft.into_entry(Utc::now()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { ref field } if field == "response"));
    }

    #[test]
    fn blank_custom_prompt_cannot_be_saved() {
        let draft = JournalDraft::new(JOURNAL_PROMPTS[1])
            .with_custom_prompt("")
            .with_response("Patience.");
        assert!(!draft.can_save());
    }

    #[test]
    fn complete_draft_becomes_entry() {
        let now = Utc::now();
        let entry = JournalDraft::new(JOURNAL_PROMPTS[2])
            .with_response("Stand firm like the pyramids.")
            .with_mood(Mood::GoldenSun)
            .into_entry(now)
            .unwrap();
        assert_eq!(entry.prompt, JOURNAL_PROMPTS[2]);
        assert_eq!(entry.mood, Mood::GoldenSun);
        assert_eq!(entry.date, now);
    }

    #[test]
    fn random_prompt_is_a_preset() {
        let mut rng = GameRng::seeded(3);
        assert!(JOURNAL_PROMPTS.contains(&random_prompt(&mut rng)));
    }

    #[test]
    fn mood_parses_slug() {
        assert_eq!("nile-calm".parse::<Mood>().unwrap(), Mood::NileCalm);
        assert!("grumpy".parse::<Mood>().is_err());
    }
}

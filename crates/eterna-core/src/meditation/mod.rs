//! Guided meditation: session types, the tick-driven player, and progress
//! statistics over recorded sessions.

mod player;
mod stats;

pub use player::{MeditationPlayer, PlayerState, DEFAULT_SKIP_SECS};
pub use stats::MeditationStats;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeditationType {
    PyramidVisualization,
    NileFlow,
    SunRa,
    AncientWisdom,
}

impl MeditationType {
    pub const ALL: [MeditationType; 4] = [
        MeditationType::PyramidVisualization,
        MeditationType::NileFlow,
        MeditationType::SunRa,
        MeditationType::AncientWisdom,
    ];

    pub fn duration_secs(self) -> u32 {
        match self {
            MeditationType::PyramidVisualization => 600,
            MeditationType::NileFlow => 480,
            MeditationType::SunRa => 720,
            MeditationType::AncientWisdom => 900,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MeditationType::PyramidVisualization => "Pyramid Visualization",
            MeditationType::NileFlow => "Nile River Flow",
            MeditationType::SunRa => "Sun God Ra",
            MeditationType::AncientWisdom => "Ancient Wisdom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MeditationType::PyramidVisualization => {
                "Visualize yourself inside the Great Pyramid, connecting with ancient energy and finding inner peace."
            }
            MeditationType::NileFlow => {
                "Flow like the Nile River, letting thoughts pass gently while finding your center."
            }
            MeditationType::SunRa => {
                "Channel the power of Ra, the sun god, to energize your spirit and illuminate your path."
            }
            MeditationType::AncientWisdom => {
                "Connect with the wisdom of ancient Egyptian sages and pharaohs for guidance."
            }
        }
    }

    /// Short command-line name, e.g. `nile-flow`.
    pub fn slug(self) -> &'static str {
        match self {
            MeditationType::PyramidVisualization => "pyramid-visualization",
            MeditationType::NileFlow => "nile-flow",
            MeditationType::SunRa => "sun-ra",
            MeditationType::AncientWisdom => "ancient-wisdom",
        }
    }
}

impl FromStr for MeditationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeditationType::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(s) || m.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "meditation".into(),
                value: s.into(),
            })
    }
}

/// A finished (or abandoned) meditation. Append-only once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeditationSession {
    pub id: String,
    pub meditation: MeditationType,
    pub duration_secs: u32,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

impl MeditationSession {
    /// A fully completed session of `meditation` ending at `date`.
    pub fn completed(meditation: MeditationType, date: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            meditation,
            duration_secs: meditation.duration_secs(),
            date,
            completed: true,
        }
    }
}

/// Receives finished meditation sessions.
pub trait SessionSink {
    fn record_meditation(&mut self, session: MeditationSession);
}

impl<T: SessionSink + ?Sized> SessionSink for &mut T {
    fn record_meditation(&mut self, session: MeditationSession) {
        (**self).record_meditation(session);
    }
}

impl SessionSink for Vec<MeditationSession> {
    fn record_meditation(&mut self, session: MeditationSession) {
        self.push(session);
    }
}

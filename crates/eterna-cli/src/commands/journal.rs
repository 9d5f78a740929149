use chrono::Utc;
use clap::Subcommand;
use eterna_core::journal::random_prompt;
use eterna_core::{Config, GameRng, JournalDraft, Mood};

use super::{open_state, CmdResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write an entry
    Add {
        /// Your reflection
        #[arg(long)]
        response: String,
        /// Own prompt instead of a preset one
        #[arg(long)]
        prompt: Option<String>,
        /// Mood, e.g. "nile-calm"
        #[arg(long, default_value = "pharaoh-power")]
        mood: Mood,
        /// Seed for choosing the preset prompt
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List entries as JSON
    List,
    /// Print a reflection prompt
    Prompt {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn prompt_rng(seed: Option<u64>) -> GameRng {
    GameRng::from_seed(seed.or_else(|| Config::load_or_default().games.seed))
}

pub fn run(action: JournalAction) -> CmdResult {
    match action {
        JournalAction::Add {
            response,
            prompt,
            mood,
            seed,
        } => {
            let mut draft = JournalDraft::new(random_prompt(&mut prompt_rng(seed)))
                .with_response(response)
                .with_mood(mood);
            if let Some(prompt) = prompt {
                draft = draft.with_custom_prompt(prompt);
            }
            let entry = draft.into_entry(Utc::now())?;
            let mut state = open_state()?;
            state.add_journal_entry(entry.clone())?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::List => {
            let state = open_state()?;
            println!("{}", serde_json::to_string_pretty(state.journal_entries())?);
        }
        JournalAction::Prompt { seed } => {
            println!("{}", random_prompt(&mut prompt_rng(seed)));
        }
    }
    Ok(())
}

use clap::Subcommand;
use eterna_core::mind_training::{card, MIND_TRAINING_CARDS};
use serde_json::json;

use super::CmdResult;

#[derive(Subcommand)]
pub enum MindAction {
    /// List the exercises as JSON
    List,
    /// Show one exercise with its tips and closing quote
    Show {
        /// Exercise name, e.g. "pharaohs-focus"
        name: String,
    },
}

pub fn run(action: MindAction) -> CmdResult {
    match action {
        MindAction::List => {
            let cards: Vec<_> = MIND_TRAINING_CARDS
                .iter()
                .map(|c| {
                    json!({
                        "name": c.slug,
                        "title": c.title,
                        "icon": c.icon,
                        "category": c.category.title(),
                        "task": c.task,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        MindAction::Show { name } => {
            let c = card(&name)?;
            println!("{} {}", c.icon, c.title);
            println!("{}", c.category.title());
            println!();
            println!("{}", c.description);
            println!();
            println!("Your task: {}", c.task);
            println!();
            for tip in c.category.tips() {
                println!("  • {tip}");
            }
            println!();
            println!("{}", c.completion_message());
            println!("\"{}\"", c.category.wisdom_quote());
        }
    }
    Ok(())
}

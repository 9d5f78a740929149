use clap::Subcommand;
use serde_json::json;

use super::{open_state, CmdResult};

#[derive(Subcommand)]
pub enum OnboardingAction {
    /// Whether onboarding has been seen
    Status,
    /// Mark onboarding as seen
    Complete,
}

pub fn run(action: OnboardingAction) -> CmdResult {
    let mut state = open_state()?;
    match action {
        OnboardingAction::Status => {
            let out = json!({ "hasSeenOnboarding": state.has_seen_onboarding() });
            println!("{out}");
        }
        OnboardingAction::Complete => {
            state.complete_onboarding()?;
            println!("ok");
        }
    }
    Ok(())
}

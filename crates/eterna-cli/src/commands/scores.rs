use eterna_core::{Achievement, GameType};
use serde::Serialize;

use super::{open_state, CmdResult};

#[derive(Serialize)]
struct ScoreLine {
    game: GameType,
    title: &'static str,
    high_score: u32,
    rank: Achievement,
}

pub fn run() -> CmdResult {
    let state = open_state()?;
    let scores = state.game_scores();
    let lines: Vec<ScoreLine> = GameType::ALL
        .into_iter()
        .map(|game| ScoreLine {
            game,
            title: game.title(),
            high_score: scores.get(game),
            rank: Achievement::for_score(game, scores.get(game)),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

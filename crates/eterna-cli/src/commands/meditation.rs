use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Subcommand;
use eterna_core::meditation::PlayerState;
use eterna_core::{Config, MeditationPlayer, MeditationType, SessionSink};
use serde_json::json;

use super::{clock_label, describe, open_state, read_command, CmdResult, TickClock};

#[derive(Subcommand)]
pub enum MeditationAction {
    /// List the guided meditations
    Types,
    /// Play a meditation (p pause/resume, s skip ahead, r restart, q stop)
    Play {
        /// Meditation name, e.g. "nile-flow"
        meditation: MeditationType,
    },
    /// List recorded sessions as JSON
    List,
    /// Session totals and current day streak
    Stats,
}

pub fn run(action: MeditationAction) -> CmdResult {
    match action {
        MeditationAction::Types => {
            let types: Vec<_> = MeditationType::ALL
                .into_iter()
                .map(|m| {
                    json!({
                        "name": m.slug(),
                        "title": m.title(),
                        "description": m.description(),
                        "duration_secs": m.duration_secs(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&types)?);
        }
        MeditationAction::Play { meditation } => {
            let config = Config::load_or_default();
            let mut state = open_state()?;
            let player = MeditationPlayer::new(&mut state, meditation)
                .with_skip_secs(config.meditation.skip_seconds);
            let mut clock = TickClock::start();
            play_meditation(
                player,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                &mut || clock.take_ticks(),
            )?;
        }
        MeditationAction::List => {
            let state = open_state()?;
            println!(
                "{}",
                serde_json::to_string_pretty(state.meditation_progress())?
            );
        }
        MeditationAction::Stats => {
            let state = open_state()?;
            let stats = state.meditation_stats(Local::now().date_naive());
            let out = json!({
                "total_sessions": stats.total_sessions,
                "total_secs": stats.total_secs,
                "total_time": stats.total_time_label(),
                "streak_days": stats.streak_days,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Runs the player until it completes or the input ends. Returns whether
/// the session completed (and was recorded).
pub fn play_meditation<S: SessionSink>(
    mut player: MeditationPlayer<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    ticks: &mut impl FnMut() -> u32,
) -> io::Result<bool> {
    let meditation = player.meditation();
    writeln!(out, "{}: {}", meditation.title(), meditation.description())?;
    if let Some(line) = player.play().as_ref().and_then(describe) {
        writeln!(out, "{line}")?;
    }

    while player.state() != PlayerState::Completed {
        let status = if player.state() == PlayerState::Paused {
            "paused"
        } else {
            "playing"
        };
        write!(
            out,
            "{} / {} ({:.0}%) {status}> ",
            clock_label(player.elapsed_secs()),
            clock_label(meditation.duration_secs()),
            player.progress() * 100.0
        )?;
        out.flush()?;

        let Some(line) = read_command(input)? else {
            if let Some(text) = player.stop().as_ref().and_then(describe) {
                writeln!(out, "{text}")?;
            }
            break;
        };
        for _ in 0..ticks() {
            if let Some(text) = player.tick().as_ref().and_then(describe) {
                writeln!(out, "{text}")?;
            }
        }
        if player.state() == PlayerState::Completed {
            break;
        }

        let event = match line.as_str() {
            "p" if player.state() == PlayerState::Playing => player.pause(),
            "p" => player.play(),
            "s" => player.skip_forward(),
            "r" => player.restart(),
            "q" => {
                if let Some(text) = player.stop().as_ref().and_then(describe) {
                    writeln!(out, "{text}")?;
                }
                break;
            }
            _ => None,
        };
        if let Some(text) = event.as_ref().and_then(describe) {
            writeln!(out, "{text}")?;
        }
    }

    Ok(player.state() == PlayerState::Completed)
}

//! Line-driven play for the three mini-games.
//!
//! Every input line first advances the engine by the whole seconds that
//! passed while the player was typing. An answer that arrives after the
//! countdown ran out is discarded.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use eterna_core::games::{BlockId, GamePhase, GameType, HIEROGLYPH_LIVES};
use eterna_core::{
    Achievement, Config, GameRng, HieroglyphQuiz, HistoryQuiz, PyramidBuilder, PyramidVariant,
    ScoreSink,
};

use super::{describe, open_state, read_command, CmdResult, TickClock};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PlayGame {
    Hieroglyph,
    History,
    Pyramid,
}

pub fn run(game: PlayGame, seed: Option<u64>) -> CmdResult {
    let config = Config::load_or_default();
    let rng = GameRng::from_seed(seed.or(config.games.seed));
    let mut state = open_state()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let mut clock = TickClock::start();
    let mut ticks = || clock.take_ticks();

    let (game_type, result) = match game {
        PlayGame::Hieroglyph => (
            GameType::HieroglyphPuzzle,
            play_hieroglyph(HieroglyphQuiz::new(&mut state, rng), &mut input, &mut out, &mut ticks)?,
        ),
        PlayGame::History => (
            GameType::HistoryQuiz,
            play_history(HistoryQuiz::new(&mut state, rng), &mut input, &mut out, &mut ticks)?,
        ),
        PlayGame::Pyramid => (
            GameType::PyramidBuilder,
            play_pyramid(
                PyramidBuilder::new(&mut state, rng, config.games.pyramid_variant),
                &mut input,
                &mut out,
                &mut ticks,
            )?,
        ),
    };

    match result {
        Some(recorded) => {
            let rank = Achievement::for_score(game_type, recorded);
            writeln!(out, "\nRank: {}. {}", rank.title, rank.description)?;
            writeln!(out, "Best: {}", state.game_scores().get(game_type))?;
        }
        None => writeln!(out, "\nLeft the game. No score recorded.")?,
    }
    Ok(())
}

fn report(out: &mut impl Write, event: Option<eterna_core::Event>) -> io::Result<()> {
    if let Some(line) = event.as_ref().and_then(describe) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// `"1"`..`"4"` to an option index.
fn option_index(line: &str) -> Option<usize> {
    match line.parse::<usize>() {
        Ok(n @ 1..=4) => Some(n - 1),
        _ => None,
    }
}

/// Plays one hieroglyph round. Returns the recorded score, or `None` if the
/// player left before the end.
pub fn play_hieroglyph<S: ScoreSink>(
    mut quiz: HieroglyphQuiz<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    ticks: &mut impl FnMut() -> u32,
) -> io::Result<Option<u32>> {
    writeln!(
        out,
        "Hieroglyph Puzzle: name each symbol. {HIEROGLYPH_LIVES} lives. Answer 1-4, q to quit."
    )?;
    quiz.start();

    while !quiz.phase().is_terminal() {
        if quiz.phase() == GamePhase::Playing {
            if let Some(puzzle) = quiz.current_puzzle() {
                writeln!(
                    out,
                    "\n[{}/{}]  {}    score {}  lives {}  {}s left",
                    quiz.index() + 1,
                    quiz.round_len(),
                    puzzle.symbol,
                    quiz.score(),
                    quiz.lives(),
                    quiz.remaining_secs()
                )?;
                for (i, option) in puzzle.options.iter().enumerate() {
                    writeln!(out, "  {}. {option}", i + 1)?;
                }
            }
            write!(out, "answer> ")?;
        } else {
            write!(out, "enter for next> ")?;
        }
        out.flush()?;

        let Some(line) = read_command(input)? else {
            break;
        };
        let phase = quiz.phase();
        for _ in 0..ticks() {
            report(out, quiz.tick())?;
        }
        if line == "q" {
            break;
        }

        if quiz.phase() == phase {
            match phase {
                GamePhase::Playing => {
                    let choice = option_index(&line)
                        .and_then(|i| quiz.current_puzzle().map(|p| p.options[i]));
                    match choice.and_then(|c| quiz.select_answer(c)) {
                        Some(event) => report(out, Some(event))?,
                        None => writeln!(out, "Pick an answer from 1 to 4.")?,
                    }
                }
                _ => report(out, quiz.next())?,
            }
        }

        if quiz.phase() == GamePhase::ShowingResult && quiz.last_answer_correct() == Some(false) {
            if let Some(puzzle) = quiz.current_puzzle() {
                writeln!(out, "{} means \"{}\".", puzzle.symbol, puzzle.correct_answer)?;
            }
        }
    }

    Ok(quiz.phase().is_terminal().then(|| quiz.score()))
}

/// Plays one history round. Returns the recorded score, or `None` if the
/// player left before the end.
pub fn play_history<S: ScoreSink>(
    mut quiz: HistoryQuiz<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    ticks: &mut impl FnMut() -> u32,
) -> io::Result<Option<u32>> {
    writeln!(out, "History Quiz: answer 1-4 before time runs out, q to quit.")?;
    quiz.start();

    while !quiz.phase().is_terminal() {
        if quiz.phase() == GamePhase::Playing {
            if let Some(question) = quiz.current_question() {
                writeln!(
                    out,
                    "\n[{}/{}] ({}, worth {} now)  score {}  streak {}  {}s left",
                    quiz.index() + 1,
                    quiz.round_len(),
                    question.difficulty.title(),
                    quiz.potential_points().unwrap_or(0),
                    quiz.score(),
                    quiz.streak(),
                    quiz.remaining_secs()
                )?;
                writeln!(out, "{}", question.text)?;
                for (i, option) in question.options.iter().enumerate() {
                    writeln!(out, "  {}. {option}", i + 1)?;
                }
            }
            write!(out, "answer> ")?;
        } else {
            write!(out, "enter for next> ")?;
        }
        out.flush()?;

        let Some(line) = read_command(input)? else {
            break;
        };
        let phase = quiz.phase();
        for _ in 0..ticks() {
            report(out, quiz.tick())?;
        }
        if line == "q" {
            break;
        }

        if quiz.phase() == phase {
            match phase {
                GamePhase::Playing => match option_index(&line).and_then(|i| quiz.select_answer(i)) {
                    Some(event) => report(out, Some(event))?,
                    None => writeln!(out, "Pick an answer from 1 to 4.")?,
                },
                _ => report(out, quiz.next())?,
            }
        }

        if quiz.phase() == GamePhase::ShowingResult {
            if let Some(question) = quiz.current_question() {
                if quiz.last_answer_correct() == Some(false) {
                    writeln!(out, "Answer: {}", question.correct_option())?;
                }
                writeln!(out, "{}", question.explanation)?;
            }
        }
    }

    if quiz.phase().is_terminal() {
        writeln!(out, "Best streak: {}", quiz.max_streak())?;
        return Ok(Some(quiz.score()));
    }
    Ok(None)
}

enum BuildCommand {
    Pick(BlockId),
    Place(usize),
    PickAndPlace(BlockId, usize),
}

/// `"ID"` picks a block (or places the held one into slot `ID`), and
/// `"ID SLOT"` does both. Slots are numbered from 1.
fn parse_build(line: &str, holding: bool) -> Option<BuildCommand> {
    let numbers: Vec<u64> = line
        .split_whitespace()
        .map(|t| t.trim_start_matches('#').parse().ok())
        .collect::<Option<_>>()?;
    let slot = |n: u64| usize::try_from(n).ok()?.checked_sub(1);
    match numbers.as_slice() {
        [n] if holding => slot(*n).map(BuildCommand::Place),
        [n] => Some(BuildCommand::Pick(BlockId(*n))),
        [id, s] => slot(*s).map(|s| BuildCommand::PickAndPlace(BlockId(*id), s)),
        _ => None,
    }
}

/// Plays one pyramid. Returns the completed level count, or `None` if the
/// player left before the end.
pub fn play_pyramid<S: ScoreSink>(
    mut builder: PyramidBuilder<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    ticks: &mut impl FnMut() -> u32,
) -> io::Result<Option<u32>> {
    let height = match builder.variant() {
        PyramidVariant::Classic => "classic",
        PyramidVariant::Grand => "grand",
    };
    writeln!(
        out,
        "Build the Pyramid ({height}, {} levels): \"ID SLOT\" places a block, q to quit.",
        builder.levels()
    )?;
    report(out, builder.start())?;

    while !builder.phase().is_terminal() {
        if builder.phase() == GamePhase::Playing {
            let slots: Vec<String> = builder
                .slots()
                .iter()
                .enumerate()
                .map(|(i, slot)| match slot {
                    Some(id) => format!("[{}:#{id}]", i + 1),
                    None => format!("[{}:  ]", i + 1),
                })
                .collect();
            let blocks: Vec<String> = builder
                .available_blocks()
                .iter()
                .map(|b| format!("#{} {}", b.id, b.decoration))
                .collect();
            writeln!(
                out,
                "\nlevel {}/{}  score {}  {}s left",
                builder.current_level() + 1,
                builder.levels(),
                builder.score(),
                builder.remaining_secs()
            )?;
            writeln!(out, "slots:  {}", slots.join(" "))?;
            writeln!(out, "blocks: {}", blocks.join("  "))?;
            match builder.selected_block() {
                Some(id) => write!(out, "holding #{id}, slot> ")?,
                None => write!(out, "block> ")?,
            }
        } else {
            write!(out, "enter for next level> ")?;
        }
        out.flush()?;

        let Some(line) = read_command(input)? else {
            break;
        };
        let phase = builder.phase();
        for _ in 0..ticks() {
            report(out, builder.tick())?;
        }
        if line == "q" {
            break;
        }
        if builder.phase() != phase {
            continue;
        }

        if phase == GamePhase::LevelComplete {
            report(out, builder.advance_level())?;
            continue;
        }
        let event = match parse_build(&line, builder.selected_block().is_some()) {
            Some(BuildCommand::Pick(id)) => builder.select_block(id),
            Some(BuildCommand::Place(slot)) => builder.place_selected_block(slot),
            Some(BuildCommand::PickAndPlace(id, slot)) => builder
                .select_block(id)
                .and_then(|_| builder.place_selected_block(slot)),
            None => None,
        };
        match event {
            Some(event) => report(out, Some(event))?,
            None => writeln!(out, "That move doesn't fit. Try \"ID SLOT\".")?,
        }
    }

    let levels = u32::try_from(builder.current_level()).unwrap_or(u32::MAX);
    Ok(builder.phase().is_terminal().then_some(levels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eterna_core::catalog::{HIEROGLYPH_PUZZLES, QUIZ_QUESTIONS};

    fn no_ticks() -> u32 {
        0
    }

    #[test]
    fn perfect_hieroglyph_script_scores_300() {
        let mut preview = HieroglyphQuiz::new(Vec::new(), GameRng::seeded(11));
        preview.start();
        let script: String = preview.queue()[..preview.round_len()]
            .iter()
            .map(|p| {
                let i = p.options.iter().position(|o| *o == p.correct_answer).unwrap();
                format!("{}\n\n", i + 1)
            })
            .collect();

        let mut sink = Vec::new();
        let mut out = Vec::new();
        let result = play_hieroglyph(
            HieroglyphQuiz::new(&mut sink, GameRng::seeded(11)),
            &mut script.as_bytes(),
            &mut out,
            &mut no_ticks,
        )
        .unwrap();

        assert_eq!(result, Some(300));
        assert_eq!(sink, vec![(GameType::HieroglyphPuzzle, 300)]);
        assert!(String::from_utf8(out).unwrap().contains("Correct! +30"));
        assert!(HIEROGLYPH_PUZZLES.len() >= 10);
    }

    #[test]
    fn quitting_records_nothing() {
        let mut sink = Vec::new();
        let mut out = Vec::new();
        let result = play_history(
            HistoryQuiz::new(&mut sink, GameRng::seeded(3)),
            &mut "5\n1\n\nq\n".as_bytes(),
            &mut out,
            &mut no_ticks,
        )
        .unwrap();

        assert_eq!(result, None);
        assert!(sink.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Pick an answer from 1 to 4."));
        assert!(QUIZ_QUESTIONS.iter().any(|q| text.contains(q.explanation)));
    }

    #[test]
    fn late_answer_is_discarded() {
        let mut sink = Vec::new();
        let mut out = Vec::new();
        let mut slow = || 100;
        play_hieroglyph(
            HieroglyphQuiz::new(&mut sink, GameRng::seeded(5)),
            &mut "1\nq\n".as_bytes(),
            &mut out,
            &mut slow,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Time's up!"));
        assert!(!text.contains("Correct!"));
    }

    #[test]
    fn pyramid_script_builds_every_level() {
        // Block ids are handed out in order, so level k starts at the sum of
        // the previous level sizes.
        let mut script = String::new();
        let mut next_id = 0;
        for size in (1..=5).rev() {
            for slot in 1..=size {
                script.push_str(&format!("{next_id} {slot}\n"));
                next_id += 1;
            }
            script.push('\n');
        }

        let mut sink = Vec::new();
        let mut out = Vec::new();
        let result = play_pyramid(
            PyramidBuilder::new(&mut sink, GameRng::seeded(1), PyramidVariant::Classic),
            &mut script.as_bytes(),
            &mut out,
            &mut no_ticks,
        )
        .unwrap();

        assert_eq!(result, Some(5));
        assert_eq!(sink, vec![(GameType::PyramidBuilder, 5)]);
    }

    #[test]
    fn parse_build_forms() {
        assert!(matches!(parse_build("3", false), Some(BuildCommand::Pick(BlockId(3)))));
        assert!(matches!(parse_build("2", true), Some(BuildCommand::Place(1))));
        assert!(matches!(
            parse_build("#4 1", false),
            Some(BuildCommand::PickAndPlace(BlockId(4), 0))
        ));
        assert!(parse_build("0", true).is_none());
        assert!(parse_build("x", false).is_none());
        assert!(parse_build("", false).is_none());
    }
}

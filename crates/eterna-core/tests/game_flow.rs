//! End-to-end play-throughs with engines writing into a shared `AppState`.
//!
//! Each test drives an engine the way a host would (commands plus one tick
//! per second) and checks what ended up in the store.

use eterna_core::games::{GamePhase, GameType, HIEROGLYPH_ROUND_LEN, LEVEL_SECONDS, PUZZLE_SECONDS};
use eterna_core::storage::keys;
use eterna_core::{
    AppState, Event, GameRng, GameScores, HieroglyphQuiz, HistoryQuiz, MeditationPlayer,
    MeditationType, MemoryStore, PyramidBuilder, PyramidVariant,
};

fn fresh_state() -> AppState<MemoryStore> {
    AppState::load(MemoryStore::new())
}

fn stored_scores(state: &AppState<MemoryStore>) -> GameScores {
    serde_json::from_str(state.store().raw(keys::GAME_SCORES).unwrap()).unwrap()
}

#[test]
fn perfect_hieroglyph_round_records_300() {
    let mut state = fresh_state();
    {
        let mut quiz = HieroglyphQuiz::new(&mut state, GameRng::seeded(1));
        quiz.start();
        for _ in 0..HIEROGLYPH_ROUND_LEN {
            let answer = quiz.current_puzzle().unwrap().correct_answer;
            let event = quiz.select_answer(answer).unwrap();
            assert!(matches!(event, Event::AnswerChecked { correct: true, points: 30, .. }));
            quiz.next();
        }
        assert_eq!(quiz.phase(), GamePhase::Complete);
        assert_eq!(quiz.score(), 300);
    }
    assert_eq!(state.game_scores().hieroglyph_high_score, 300);
    assert_eq!(stored_scores(&state).hieroglyph_high_score, 300);
}

#[test]
fn three_wrong_hieroglyph_answers_end_the_game() {
    let mut state = fresh_state();
    {
        let mut quiz = HieroglyphQuiz::new(&mut state, GameRng::seeded(2));
        quiz.start();

        let answer = quiz.current_puzzle().unwrap().correct_answer;
        quiz.select_answer(answer);
        quiz.next();

        for _ in 0..3 {
            let puzzle = quiz.current_puzzle().unwrap();
            let wrong = puzzle
                .options
                .iter()
                .copied()
                .find(|o| *o != puzzle.correct_answer)
                .unwrap();
            quiz.select_answer(wrong);
            quiz.next();
        }
        assert_eq!(quiz.phase(), GamePhase::GameOver);
        assert_eq!(quiz.lives(), 0);
    }
    assert_eq!(state.game_scores().hieroglyph_high_score, 30);
}

#[test]
fn hieroglyph_timeouts_cost_lives() {
    let mut quiz = HieroglyphQuiz::new(Vec::new(), GameRng::seeded(3));
    quiz.start();
    let mut events = Vec::new();
    for _ in 0..=PUZZLE_SECONDS {
        events.extend(quiz.tick());
    }
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::AnswerChecked { timed_out: true, correct: false, .. }));
    assert_eq!(quiz.lives(), 2);
}

#[test]
fn history_round_records_final_score_once() {
    let mut state = fresh_state();
    let final_score;
    {
        let mut quiz = HistoryQuiz::new(&mut state, GameRng::seeded(4));
        quiz.start();
        let mut answered = 0;
        while quiz.phase() == GamePhase::Playing {
            let correct = quiz.current_question().unwrap().correct_index;
            let event = quiz.select_answer(correct).unwrap();
            assert!(matches!(event, Event::AnswerChecked { correct: true, .. }));
            answered += 1;
            quiz.next();
        }
        assert_eq!(answered, quiz.round_len());
        assert_eq!(quiz.phase(), GamePhase::Complete);
        assert_eq!(quiz.max_streak() as usize, answered);
        final_score = quiz.score();
    }
    assert!(final_score > 0);
    assert_eq!(state.game_scores().get(GameType::HistoryQuiz), final_score);
}

#[test]
fn lower_history_score_keeps_previous_best() {
    let mut state = fresh_state();
    state.update_game_score(GameType::HistoryQuiz, 10_000).unwrap();
    {
        let mut quiz = HistoryQuiz::new(&mut state, GameRng::seeded(5));
        quiz.start();
        while quiz.phase() == GamePhase::Playing {
            quiz.select_answer(0);
            quiz.next();
        }
        assert!(quiz.score() < 10_000);
    }
    assert_eq!(state.game_scores().history_high_score, 10_000);
}

#[test]
fn completed_pyramid_records_level_count() {
    let mut state = fresh_state();
    {
        let mut builder = PyramidBuilder::new(&mut state, GameRng::seeded(6), PyramidVariant::Classic);
        builder.start();
        for level in 0..builder.levels() {
            assert_eq!(builder.current_level(), level);
            assert_eq!(builder.slots().len(), builder.levels() - level);
            let ids: Vec<_> = builder.available_blocks().iter().map(|b| b.id).collect();
            for (slot, id) in ids.into_iter().enumerate() {
                builder.select_block(id);
                builder.place_selected_block(slot);
            }
            assert_eq!(builder.phase(), GamePhase::LevelComplete);
            builder.advance_level();
        }
        assert_eq!(builder.phase(), GamePhase::Complete);
        assert_eq!(builder.built_blocks().len(), 5 + 4 + 3 + 2 + 1);
        // Every level finished with the full minute left.
        assert_eq!(builder.score(), 5 * LEVEL_SECONDS * 2);
    }
    assert_eq!(state.game_scores().pyramid_high_score, 5);
}

#[test]
fn pyramid_timeout_records_finished_levels() {
    let mut state = fresh_state();
    {
        let mut builder = PyramidBuilder::new(&mut state, GameRng::seeded(7), PyramidVariant::Grand);
        builder.start();
        let ids: Vec<_> = builder.available_blocks().iter().map(|b| b.id).collect();
        for (slot, id) in ids.into_iter().enumerate() {
            builder.select_block(id);
            builder.place_selected_block(slot);
        }
        builder.advance_level();
        assert_eq!(builder.current_level(), 1);

        let mut game_over = None;
        for _ in 0..=LEVEL_SECONDS {
            if let Some(event) = builder.tick() {
                game_over = Some(event);
            }
        }
        assert!(matches!(game_over, Some(Event::GameOver { .. })));
        assert_eq!(builder.phase(), GamePhase::GameOver);
    }
    assert_eq!(state.game_scores().pyramid_high_score, 1);
}

#[test]
fn completed_meditation_lands_in_progress_and_stats() {
    let mut state = fresh_state();
    {
        let mut player = MeditationPlayer::new(&mut state, MeditationType::NileFlow);
        player.play();
        for _ in 0..MeditationType::NileFlow.duration_secs() {
            player.tick();
        }
        assert!(player.tick().is_none());
    }
    assert_eq!(state.meditation_progress().len(), 1);
    let session = &state.meditation_progress()[0];
    assert_eq!(session.meditation, MeditationType::NileFlow);
    assert_eq!(session.duration_secs, 480);
    assert!(session.completed);

    let stats = state.meditation_stats(chrono::Local::now().date_naive());
    assert_eq!(stats.total_sessions, 1);
    assert_eq!(stats.total_secs, 480);
    assert_eq!(stats.streak_days, 1);
}

#[test]
fn stopped_meditation_is_not_recorded() {
    let mut state = fresh_state();
    {
        let mut player = MeditationPlayer::new(&mut state, MeditationType::SunRa);
        player.play();
        player.tick();
        player.stop();
    }
    assert!(state.meditation_progress().is_empty());
    assert!(state.store().raw(keys::MEDITATION_PROGRESS).is_none());
}

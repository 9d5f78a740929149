//! History trivia: fifteen multiple-choice questions with difficulty-weighted
//! scoring, a time bonus and a streak bonus.
//!
//! There are no lives; a play-through always runs every question.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::{GamePhase, GameRng, GameType, ScoreSink};
use crate::catalog::{QuizQuestion, QUIZ_QUESTIONS};
use crate::events::Event;
use crate::timer::{Countdown, Tick};

/// Questions per play-through.
pub const HISTORY_ROUND_LEN: usize = 15;
pub const QUESTION_SECONDS: u32 = 45;

const SECONDS_PER_TIME_BONUS_POINT: u32 = 5;
const STREAK_BONUS_PER_ANSWER: u32 = 2;

/// Points for a correct answer given the streak held *before* this answer.
fn question_points(question: &QuizQuestion, remaining_secs: u32, streak: u32) -> u32 {
    let base = question.difficulty.points();
    let time_bonus = remaining_secs / SECONDS_PER_TIME_BONUS_POINT;
    let streak_bonus = if streak > 1 {
        streak * STREAK_BONUS_PER_ANSWER
    } else {
        0
    };
    base + time_bonus + streak_bonus
}

#[derive(Debug, Clone, Serialize)]
pub struct HistorySnapshot {
    pub phase: GamePhase,
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub remaining_secs: u32,
    pub question: Option<QuizQuestion>,
    pub selected: Option<usize>,
    pub last_correct: Option<bool>,
}

#[derive(Debug)]
pub struct HistoryQuiz<S> {
    sink: S,
    rng: GameRng,
    catalog: &'static [QuizQuestion],
    queue: Vec<QuizQuestion>,
    index: usize,
    score: u32,
    streak: u32,
    max_streak: u32,
    countdown: Countdown,
    selected: Option<usize>,
    last_correct: Option<bool>,
    phase: GamePhase,
}

impl<S: ScoreSink> HistoryQuiz<S> {
    pub fn new(sink: S, rng: GameRng) -> Self {
        Self::with_catalog(sink, rng, QUIZ_QUESTIONS)
    }

    pub fn with_catalog(sink: S, rng: GameRng, catalog: &'static [QuizQuestion]) -> Self {
        Self {
            sink,
            rng,
            catalog,
            queue: Vec::new(),
            index: 0,
            score: 0,
            streak: 0,
            max_streak: 0,
            countdown: Countdown::new(QUESTION_SECONDS),
            selected: None,
            last_correct: None,
            phase: GamePhase::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn round_len(&self) -> usize {
        HISTORY_ROUND_LEN.min(self.queue.len())
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.index < self.round_len() {
            self.queue.get(self.index)
        } else {
            None
        }
    }

    pub fn queue(&self) -> &[QuizQuestion] {
        &self.queue
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_correct
    }

    /// Points a correct answer would earn right now.
    pub fn potential_points(&self) -> Option<u32> {
        self.current_question()
            .map(|q| question_points(q, self.countdown.remaining_secs(), self.streak))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            phase: self.phase,
            index: self.index,
            total: self.round_len(),
            score: self.score,
            streak: self.streak,
            max_streak: self.max_streak,
            remaining_secs: self.countdown.remaining_secs(),
            question: self.current_question().copied(),
            selected: self.selected,
            last_correct: self.last_correct,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Idle {
            return None;
        }
        self.queue = self.rng.shuffled(self.catalog);
        self.index = 0;
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.selected = None;
        self.last_correct = None;
        debug!(questions = self.round_len(), "history quiz started");
        Some(self.load(0))
    }

    pub fn restart(&mut self) -> Option<Event> {
        self.countdown.stop();
        self.phase = GamePhase::Idle;
        self.start()
    }

    /// Answer with the index of one of the four options. Out-of-range
    /// indices are ignored.
    pub fn select_answer(&mut self, choice: usize) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let options = self.current_question()?.options.len();
        if choice >= options {
            return None;
        }
        Some(self.resolve(Some(choice)))
    }

    pub fn next(&mut self) -> Option<Event> {
        if self.phase != GamePhase::ShowingResult {
            return None;
        }
        self.index += 1;
        Some(self.load(self.index))
    }

    /// One elapsed second. Expiry resolves the question with no answer.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        match self.countdown.tick() {
            Tick::Expired => Some(self.resolve(None)),
            Tick::Running { .. } | Tick::Stopped => None,
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn load(&mut self, index: usize) -> Event {
        if index >= self.round_len() {
            return self.complete();
        }
        self.selected = None;
        self.last_correct = None;
        self.phase = GamePhase::Playing;
        self.countdown.restart();
        Event::QuestionPresented {
            game: GameType::HistoryQuiz,
            index,
            total: self.round_len(),
            duration_secs: QUESTION_SECONDS,
            at: Utc::now(),
        }
    }

    fn resolve(&mut self, choice: Option<usize>) -> Event {
        self.countdown.stop();
        let remaining = self.countdown.remaining_secs();
        let (correct, points) = match self.current_question() {
            Some(question) if choice == Some(question.correct_index) => {
                (true, question_points(question, remaining, self.streak))
            }
            _ => (false, 0),
        };

        if correct {
            self.score += points;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.selected = choice;
        self.last_correct = Some(correct);
        self.phase = GamePhase::ShowingResult;
        debug!(
            index = self.index,
            correct,
            points,
            streak = self.streak,
            "history answer checked"
        );
        Event::AnswerChecked {
            game: GameType::HistoryQuiz,
            index: self.index,
            correct,
            timed_out: choice.is_none(),
            points,
            score: self.score,
            at: Utc::now(),
        }
    }

    fn complete(&mut self) -> Event {
        self.countdown.stop();
        self.phase = GamePhase::Complete;
        self.sink.record_score(GameType::HistoryQuiz, self.score);
        info!(
            score = self.score,
            max_streak = self.max_streak,
            "history quiz complete"
        );
        Event::GameCompleted {
            game: GameType::HistoryQuiz,
            score: self.score,
            recorded: self.score,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;

    type Recorded = Vec<(GameType, u32)>;

    static EASY_ONLY: &[QuizQuestion] = &[
        QuizQuestion {
            text: "Which river was essential to ancient Egyptian civilization?",
            options: ["Euphrates", "Tigris", "Nile", "Amazon"],
            correct_index: 2,
            explanation: "",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            text: "What symbol represents eternal life in ancient Egypt?",
            options: ["Scarab", "Ankh", "Eye of Horus", "Djed"],
            correct_index: 1,
            explanation: "",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            text: "Which animal was considered sacred to the goddess Bastet?",
            options: ["Dog", "Cat", "Bird", "Snake"],
            correct_index: 1,
            explanation: "",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            text: "What was the primary writing material used by ancient Egyptians?",
            options: ["Stone", "Clay", "Papyrus", "Wood"],
            correct_index: 2,
            explanation: "",
            difficulty: Difficulty::Easy,
        },
    ];

    fn started(seed: u64) -> HistoryQuiz<Recorded> {
        let mut quiz = HistoryQuiz::new(Vec::new(), GameRng::seeded(seed));
        quiz.start();
        quiz
    }

    fn answer_correctly(quiz: &mut HistoryQuiz<Recorded>) -> Option<Event> {
        let correct = quiz.current_question().unwrap().correct_index;
        quiz.select_answer(correct)
    }

    fn answer_wrongly(quiz: &mut HistoryQuiz<Recorded>) -> Option<Event> {
        let correct = quiz.current_question().unwrap().correct_index;
        quiz.select_answer((correct + 1) % 4)
    }

    #[test]
    fn easy_answer_with_full_time_and_no_streak_scores_19() {
        let mut quiz = HistoryQuiz::with_catalog(Vec::new(), GameRng::seeded(1), EASY_ONLY);
        quiz.start();
        match answer_correctly(&mut quiz) {
            Some(Event::AnswerChecked { points, .. }) => assert_eq!(points, 19),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(quiz.score(), 19);
        assert_eq!(quiz.streak(), 1);
    }

    #[test]
    fn streak_bonus_uses_streak_before_increment() {
        let mut quiz = HistoryQuiz::with_catalog(Vec::new(), GameRng::seeded(2), EASY_ONLY);
        quiz.start();
        // streak 0 and 1 earn no bonus, streak 2 earns 4, streak 3 earns 6.
        let mut earned = Vec::new();
        for _ in 0..4 {
            if let Some(Event::AnswerChecked { points, .. }) = answer_correctly(&mut quiz) {
                earned.push(points);
            }
            quiz.next();
        }
        assert_eq!(earned, vec![19, 19, 23, 25]);
        assert_eq!(quiz.max_streak(), 4);
        assert_eq!(quiz.phase(), GamePhase::Complete);
    }

    #[test]
    fn wrong_answer_resets_streak_but_not_max() {
        let mut quiz = started(3);
        answer_correctly(&mut quiz);
        quiz.next();
        answer_correctly(&mut quiz);
        quiz.next();
        let before = quiz.score();
        answer_wrongly(&mut quiz);
        assert_eq!(quiz.streak(), 0);
        assert_eq!(quiz.max_streak(), 2);
        assert_eq!(quiz.score(), before);
    }

    #[test]
    fn time_bonus_is_floored() {
        let mut quiz = started(4);
        for _ in 0..3 {
            quiz.tick();
        }
        assert_eq!(quiz.remaining_secs(), 42);
        let base = quiz.current_question().unwrap().difficulty.points();
        assert_eq!(quiz.potential_points(), Some(base + 8));
    }

    #[test]
    fn timeout_is_a_miss_that_resets_streak() {
        let mut quiz = started(5);
        answer_correctly(&mut quiz);
        quiz.next();
        for _ in 0..QUESTION_SECONDS {
            assert!(quiz.tick().is_none());
        }
        let event = quiz.tick().unwrap();
        assert!(matches!(
            event,
            Event::AnswerChecked {
                correct: false,
                timed_out: true,
                points: 0,
                ..
            }
        ));
        assert_eq!(quiz.streak(), 0);
        assert_eq!(quiz.max_streak(), 1);
    }

    #[test]
    fn runs_all_fifteen_questions_then_records() {
        let mut quiz = started(6);
        assert_eq!(quiz.round_len(), HISTORY_ROUND_LEN);
        for i in 0..HISTORY_ROUND_LEN {
            if i % 2 == 0 {
                answer_wrongly(&mut quiz);
            } else {
                answer_correctly(&mut quiz);
            }
            quiz.next();
        }
        assert_eq!(quiz.phase(), GamePhase::Complete);
        assert_eq!(quiz.sink(), &vec![(GameType::HistoryQuiz, quiz.score())]);
        assert!(quiz.next().is_none());
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut quiz = started(7);
        assert!(quiz.select_answer(4).is_none());
        assert!(quiz.select_answer(usize::MAX).is_none());
        assert_eq!(quiz.phase(), GamePhase::Playing);
    }

    #[test]
    fn restart_resets_streaks() {
        let mut quiz = started(8);
        answer_correctly(&mut quiz);
        quiz.restart();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.streak(), 0);
        assert_eq!(quiz.max_streak(), 0);
        assert_eq!(quiz.remaining_secs(), QUESTION_SECONDS);
        assert!(quiz.sink().is_empty(), "restart does not record");
    }
}

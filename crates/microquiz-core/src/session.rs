//! One question-and-answer round.
//!
//! [`submit_answer`] ties answer matching to progress tracking so the CLI
//! never mutates progress on a wrong answer or a quit.

use chrono::NaiveDate;

use crate::answer::is_quit;
use crate::model::Task;
use crate::progress::{ProgressState, SolveOutcome};

/// What happened to a typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The user typed a quit sentinel. Nothing was recorded.
    Quit,
    /// Correct; progress was updated.
    Correct(SolveOutcome),
    /// Wrong; progress was left untouched.
    Wrong,
}

impl AnswerOutcome {
    /// Returns `true` if progress changed and should be saved.
    pub fn needs_save(&self) -> bool {
        matches!(self, AnswerOutcome::Correct(o) if o.newly_completed)
    }
}

/// Check `input` against `task` and record a correct solve on `today`.
pub fn submit_answer(
    progress: &mut ProgressState,
    task: &Task,
    input: &str,
    quit_words: &[String],
    today: NaiveDate,
) -> AnswerOutcome {
    if is_quit(input, quit_words) {
        tracing::debug!(task_id = %task.id, "answer cancelled");
        return AnswerOutcome::Quit;
    }

    if task.accepts(input) {
        AnswerOutcome::Correct(progress.apply_correct_solve(task, today))
    } else {
        tracing::debug!(task_id = %task.id, "wrong answer");
        AnswerOutcome::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::StreakChange;

    fn capital() -> Task {
        Task {
            id: "capital-fr".into(),
            category: "Общие знания".into(),
            question: "Capital of France?".into(),
            answer: "Paris".into(),
            options: Some(vec!["Paris".into(), "London".into()]),
            explanation: Some("Paris has been the capital since 987.".into()),
        }
    }

    fn quit_words() -> Vec<String> {
        vec!["q".into(), "й".into()]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn correct_answer_updates_progress() {
        let mut progress = ProgressState::default();
        let outcome = submit_answer(&mut progress, &capital(), " paris ", &quit_words(), today());

        match outcome {
            AnswerOutcome::Correct(o) => {
                assert_eq!(o.streak, StreakChange::Started);
                assert_eq!(o.total_solved, 1);
            }
            other => panic!("expected Correct, got {other:?}"),
        }
        assert!(outcome.needs_save());
        assert_eq!(progress.category_stats["Общие знания"], 1);
    }

    #[test]
    fn wrong_option_leaves_progress_untouched() {
        let mut progress = ProgressState::default();
        let outcome = submit_answer(&mut progress, &capital(), "London", &quit_words(), today());
        assert_eq!(outcome, AnswerOutcome::Wrong);
        assert!(!outcome.needs_save());
        assert_eq!(progress, ProgressState::default());
    }

    #[test]
    fn quit_is_not_a_wrong_answer() {
        let mut progress = ProgressState::default();
        let outcome = submit_answer(&mut progress, &capital(), "Й", &quit_words(), today());
        assert_eq!(outcome, AnswerOutcome::Quit);
        assert_eq!(progress, ProgressState::default());
    }

    #[test]
    fn answer_equal_to_quit_word_is_still_quit() {
        let mut task = capital();
        task.answer = "q".into();
        task.options = None;
        let mut progress = ProgressState::default();
        assert_eq!(
            submit_answer(&mut progress, &task, "q", &quit_words(), today()),
            AnswerOutcome::Quit
        );
    }
}

//! Progress tracking: streak bookkeeping and solve counters.
//!
//! A [`ProgressState`] is loaded once per run, mutated at most once by
//! [`ProgressState::apply_correct_solve`], and written back by the caller.

use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Task;

/// Persisted solve history for the local user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Number of distinct tasks solved.
    #[serde(default)]
    pub total_solved: u32,
    /// Consecutive calendar days with at least one correct solve.
    #[serde(default)]
    pub streak_days: u32,
    /// Date of the most recent correct solve.
    #[serde(default)]
    pub last_solved_date: Option<NaiveDate>,
    /// Task id to the date it was solved, in solve order.
    #[serde(default)]
    pub completed_tasks: IndexMap<String, NaiveDate>,
    /// Correct solves per category label.
    #[serde(default)]
    pub category_stats: IndexMap<String, u32>,
}

/// How a solve moved the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First solve ever.
    Started,
    /// Solved the day after the previous solve.
    Extended,
    /// Already solved today; streak untouched.
    Kept,
    /// A day or more was skipped; streak restarted at 1.
    Broken,
}

/// Result of recording a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    pub streak: StreakChange,
    pub streak_days: u32,
    pub total_solved: u32,
    /// `false` when the task had already been completed and nothing changed.
    pub newly_completed: bool,
}

impl ProgressState {
    /// A fresh state with `category_stats` pre-seeded at zero.
    pub fn reset<S: AsRef<str>>(seed_categories: &[S]) -> Self {
        let category_stats = seed_categories
            .iter()
            .map(|c| (c.as_ref().to_string(), 0))
            .collect();
        Self {
            category_stats,
            ..Self::default()
        }
    }

    /// Record a correct answer to `task` on `today`.
    ///
    /// Counters advance once per task id. The streak changes at most once per
    /// calendar day: a second solve on the same day still counts toward the
    /// totals but leaves `streak_days` alone.
    pub fn apply_correct_solve(&mut self, task: &Task, today: NaiveDate) -> SolveOutcome {
        if self.is_completed(&task.id) {
            tracing::warn!(task_id = %task.id, "task already completed, not counting again");
            return SolveOutcome {
                streak: StreakChange::Kept,
                streak_days: self.streak_days,
                total_solved: self.total_solved,
                newly_completed: false,
            };
        }

        let streak = self.advance_streak(today);

        self.total_solved += 1;
        self.completed_tasks.insert(task.id.clone(), today);
        *self.category_stats.entry(task.category.clone()).or_insert(0) += 1;

        tracing::debug!(
            task_id = %task.id,
            ?streak,
            streak_days = self.streak_days,
            total_solved = self.total_solved,
            "recorded correct solve"
        );

        SolveOutcome {
            streak,
            streak_days: self.streak_days,
            total_solved: self.total_solved,
            newly_completed: true,
        }
    }

    fn advance_streak(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_solved_date {
            None => {
                self.streak_days = 1;
                StreakChange::Started
            }
            Some(last) => match (today - last).num_days() {
                1 => {
                    self.streak_days += 1;
                    StreakChange::Extended
                }
                d if d > 1 => {
                    self.streak_days = 1;
                    StreakChange::Broken
                }
                // Same day, or the clock went backwards.
                _ => {
                    self.streak_days = self.streak_days.max(1);
                    StreakChange::Kept
                }
            },
        };

        // Never move the last-solved date backwards.
        self.last_solved_date = Some(self.last_solved_date.map_or(today, |last| last.max(today)));
        change
    }

    /// Returns `true` if `id` has been solved before.
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_tasks.contains_key(id)
    }

    /// Ids of all solved tasks.
    pub fn completed_ids(&self) -> HashSet<&str> {
        self.completed_tasks.keys().map(String::as_str).collect()
    }

    /// The `n` most recent completions, oldest first.
    pub fn recent(&self, n: usize) -> Vec<(&str, NaiveDate)> {
        let skip = self.completed_tasks.len().saturating_sub(n);
        self.completed_tasks
            .iter()
            .skip(skip)
            .map(|(id, date)| (id.as_str(), *date))
            .collect()
    }

    /// Returns `true` if the per-category counters add up to `total_solved`
    /// and the completion log agrees with it.
    pub fn counters_consistent(&self) -> bool {
        let category_sum: u64 = self.category_stats.values().map(|&c| u64::from(c)).sum();
        category_sum == u64::from(self.total_solved)
            && self.completed_tasks.len() == self.total_solved as usize
    }
}

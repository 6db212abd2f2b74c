//! Summary statistics derived from a progress record.

use chrono::NaiveDate;
use serde::Serialize;

use crate::progress::ProgressState;

/// Everything the `stats` view shows, computed once from a [`ProgressState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_solved: u32,
    pub streak_days: u32,
    pub last_solved_date: Option<NaiveDate>,
    /// Categories with their solve counts, most solved first.
    pub categories: Vec<CategoryCount>,
    /// Most recent completions, oldest first.
    pub recent: Vec<RecentSolve>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub solved: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentSolve {
    pub task_id: String,
    pub solved_on: NaiveDate,
}

impl StatsSummary {
    pub fn from_progress(progress: &ProgressState, recent_limit: usize) -> Self {
        let mut categories: Vec<CategoryCount> = progress
            .category_stats
            .iter()
            .map(|(category, &solved)| CategoryCount {
                category: category.clone(),
                solved,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.solved
                .cmp(&a.solved)
                .then_with(|| a.category.cmp(&b.category))
        });

        let recent = progress
            .recent(recent_limit)
            .into_iter()
            .map(|(id, date)| RecentSolve {
                task_id: id.to_string(),
                solved_on: date,
            })
            .collect();

        Self {
            total_solved: progress.total_solved,
            streak_days: progress.streak_days,
            last_solved_date: progress.last_solved_date,
            categories,
            recent,
        }
    }

    /// Returns `true` if nothing has been solved yet.
    pub fn is_empty(&self) -> bool {
        self.total_solved == 0 && self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn categories_sorted_by_count_then_label() {
        let mut progress = ProgressState::default();
        progress.category_stats.insert("Math".into(), 1);
        progress.category_stats.insert("Logic".into(), 3);
        progress.category_stats.insert("Art".into(), 1);
        progress.total_solved = 5;

        let summary = StatsSummary::from_progress(&progress, 5);
        let order: Vec<_> = summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["Logic", "Art", "Math"]);
    }

    #[test]
    fn recent_respects_limit() {
        let mut progress = ProgressState::default();
        for (i, id) in ["t1", "t2", "t3"].iter().enumerate() {
            progress
                .completed_tasks
                .insert(id.to_string(), date("2025-01-01") + chrono::Days::new(i as u64));
        }
        progress.total_solved = 3;

        let summary = StatsSummary::from_progress(&progress, 2);
        assert_eq!(summary.recent.len(), 2);
        assert_eq!(summary.recent[0].task_id, "t2");
        assert_eq!(summary.recent[1].solved_on, date("2025-01-03"));
        assert!(!summary.is_empty());
    }

    #[test]
    fn empty_progress() {
        let summary = StatsSummary::from_progress(&ProgressState::default(), 5);
        assert!(summary.is_empty());
        assert!(summary.categories.is_empty());
        assert!(summary.last_solved_date.is_none());
    }
}

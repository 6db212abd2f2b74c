//! The read-only task catalog and its validation.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::answer::normalize;
use crate::model::Task;

/// The full question bank, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks whose category equals `category` exactly.
    pub fn in_category<'a, 'b>(&'a self, category: &'b str) -> impl Iterator<Item = &'a Task> + 'b
    where
        'a: 'b,
    {
        self.tasks.iter().filter(move |t| t.category == category)
    }

    /// Number of tasks per category, sorted by label.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for task in &self.tasks {
            *counts.entry(task.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Check the catalog for common authoring mistakes.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        let mut seen_ids = HashSet::new();
        for task in &self.tasks {
            if !seen_ids.insert(task.id.as_str()) {
                warnings.push(ValidationWarning::for_task(
                    task,
                    format!("duplicate task ID: {}", task.id),
                ));
            }
        }

        for task in &self.tasks {
            if task.question.trim().is_empty() {
                warnings.push(ValidationWarning::for_task(task, "question is empty"));
            }
            if task.answer.trim().is_empty() {
                warnings.push(ValidationWarning::for_task(task, "answer is empty"));
            }
            if task.category.trim().is_empty() {
                warnings.push(ValidationWarning::for_task(task, "category is empty"));
            }
        }

        // An option list without the answer makes every option a wrong choice.
        for task in &self.tasks {
            if let Some(options) = &task.options {
                let answer = normalize(&task.answer);
                if !options.iter().any(|o| normalize(o) == answer) {
                    warnings.push(ValidationWarning::for_task(
                        task,
                        "options do not include the answer",
                    ));
                }
            }
        }

        warnings
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The task ID (if applicable).
    pub task_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_task(task: &Task, message: impl Into<String>) -> Self {
        Self {
            task_id: Some(task.id.clone()),
            message: message.into(),
        }
    }
}

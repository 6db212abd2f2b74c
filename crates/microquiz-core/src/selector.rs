//! Uniform random selection of an uncompleted task.
//!
//! Exhaustion is a normal outcome and comes back as `None`. An unknown
//! category is an error so callers can tell the two apart.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::model::Task;

/// Pick a random task whose id is not in `completed_ids`.
///
/// Returns `None` when every task in the catalog has been completed.
pub fn select_task<'a, R>(
    catalog: &'a Catalog,
    completed_ids: &HashSet<&str>,
    rng: &mut R,
) -> Option<&'a Task>
where
    R: Rng + ?Sized,
{
    pick(catalog.tasks().iter(), completed_ids, rng)
}

/// Pick a random uncompleted task from one category.
///
/// Returns `Err(QuizError::UnknownCategory)` when no task in the catalog
/// carries `category`, and `Ok(None)` when the category is exhausted.
pub fn select_in_category<'a, R>(
    catalog: &'a Catalog,
    category: &str,
    completed_ids: &HashSet<&str>,
    rng: &mut R,
) -> Result<Option<&'a Task>, QuizError>
where
    R: Rng + ?Sized,
{
    let scoped: Vec<&Task> = catalog.in_category(category).collect();
    if scoped.is_empty() {
        return Err(QuizError::UnknownCategory(category.to_string()));
    }
    Ok(pick(scoped.into_iter(), completed_ids, rng))
}

fn pick<'a, I, R>(tasks: I, completed_ids: &HashSet<&str>, rng: &mut R) -> Option<&'a Task>
where
    I: Iterator<Item = &'a Task>,
    R: Rng + ?Sized,
{
    let available: Vec<&Task> = tasks
        .filter(|t| !completed_ids.contains(t.id.as_str()))
        .collect();

    tracing::debug!(available = available.len(), "selecting task");
    available.choose(rng).copied()
}

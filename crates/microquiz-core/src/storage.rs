//! JSON persistence for the catalog and the progress record.
//!
//! A missing file is not an error: the catalog loads empty and progress
//! loads fresh. A file that exists but does not parse is a hard error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::progress::ProgressState;

/// Load the task catalog, or an empty one if the file does not exist.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = load_json_or_default::<Catalog>(path, "task catalog")?;
    tracing::debug!(tasks = catalog.len(), path = %path.display(), "loaded catalog");
    Ok(catalog)
}

/// Parse a catalog from a JSON string (useful for testing).
pub fn parse_catalog_str(content: &str) -> Result<Catalog> {
    serde_json::from_str(content).context("failed to parse task catalog JSON")
}

/// Load progress, or a fresh record if the file does not exist.
pub fn load_progress(path: &Path) -> Result<ProgressState> {
    load_json_or_default::<ProgressState>(path, "progress")
}

/// Write progress as pretty-printed JSON, creating parent directories.
pub fn save_progress(path: &Path, progress: &ProgressState) -> Result<()> {
    let json = serde_json::to_string_pretty(progress).context("failed to serialize progress")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write progress to {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        total_solved = progress.total_solved,
        "saved progress"
    );
    Ok(())
}

fn load_json_or_default<T>(path: &Path, what: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        tracing::debug!(path = %path.display(), "{what} file not found, using defaults");
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {what} JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: &str, category: &str) -> Task {
        Task {
            id: id.into(),
            category: category.into(),
            question: "Вопрос?".into(),
            answer: "Ответ".into(),
            options: None,
            explanation: None,
        }
    }

    #[test]
    fn missing_files_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("tasks.json")).unwrap();
        assert!(catalog.is_empty());
        let progress = load_progress(&dir.path().join("progress.json")).unwrap();
        assert_eq!(progress, ProgressState::default());
    }

    #[test]
    fn progress_roundtrip_preserves_order_and_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        let mut progress = ProgressState::reset(&["Общие знания"]);
        // Ids deliberately out of lexical order.
        progress.apply_correct_solve(&task("z-last", "Логика"), date("2025-03-01"));
        progress.apply_correct_solve(&task("a-first", "Математика"), date("2025-03-02"));
        progress.apply_correct_solve(&task("m-mid", "Логика"), date("2025-03-02"));

        save_progress(&path, &progress).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Логика"), "non-ASCII must not be escaped");
        assert!(raw.contains("\"2025-03-02\""));

        let loaded = load_progress(&path).unwrap();
        assert_eq!(loaded, progress);
        let ids: Vec<_> = loaded.completed_tasks.keys().cloned().collect();
        assert_eq!(ids, vec!["z-last", "a-first", "m-mid"]);
        let cats: Vec<_> = loaded.category_stats.keys().cloned().collect();
        assert_eq!(cats, vec!["Общие знания", "Логика", "Математика"]);
    }

    #[test]
    fn legacy_progress_with_nulls_and_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(
            &path,
            r#"{"total_solved": 0, "streak_days": 0, "last_solved_date": null}"#,
        )
        .unwrap();

        let loaded = load_progress(&path).unwrap();
        assert!(loaded.last_solved_date.is_none());
        assert!(loaded.completed_tasks.is_empty());
        assert!(loaded.category_stats.is_empty());
    }

    #[test]
    fn malformed_progress_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_progress(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse progress JSON"));
    }

    #[test]
    fn catalog_file_loads_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"[
  {"id": "2", "category": "Logic", "question": "?", "answer": "b"},
  {"id": "1", "category": "Math", "question": "?", "answer": "a",
   "options": ["a", "b"], "explanation": "because"}
]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tasks()[0].id, "2");
        assert_eq!(catalog.tasks()[1].explanation.as_deref(), Some("because"));
    }

    #[test]
    fn parse_catalog_rejects_object() {
        assert!(parse_catalog_str(r#"{"id": "1"}"#).is_err());
        assert!(parse_catalog_str("[]").unwrap().is_empty());
    }
}

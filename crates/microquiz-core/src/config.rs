//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Locale;

/// Top-level microquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroquizConfig {
    /// Path to the task catalog JSON.
    #[serde(default = "default_tasks_path")]
    pub tasks_path: PathBuf,
    /// Path to the progress JSON.
    #[serde(default = "default_progress_path")]
    pub progress_path: PathBuf,
    /// Display language.
    #[serde(default)]
    pub language: Locale,
    /// Categories pre-populated at zero when progress is reset.
    #[serde(default)]
    pub seed_categories: Vec<String>,
    /// Inputs that cancel answering instead of being checked.
    #[serde(default = "default_quit_words")]
    pub quit_words: Vec<String>,
    /// How many recent completions `stats` lists.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_tasks_path() -> PathBuf {
    PathBuf::from("tasks.json")
}
fn default_progress_path() -> PathBuf {
    PathBuf::from("progress.json")
}
fn default_quit_words() -> Vec<String> {
    vec!["q".to_string(), "й".to_string()]
}
fn default_recent_limit() -> usize {
    5
}

impl Default for MicroquizConfig {
    fn default() -> Self {
        Self {
            tasks_path: default_tasks_path(),
            progress_path: default_progress_path(),
            language: Locale::default(),
            seed_categories: Vec::new(),
            quit_words: default_quit_words(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `microquiz.toml` in the current directory
/// 2. `~/.config/microquiz/config.toml`
///
/// Environment variable overrides: `MICROQUIZ_TASKS`, `MICROQUIZ_PROGRESS`,
/// `MICROQUIZ_LANG`.
pub fn load_config_from(path: Option<&Path>) -> Result<MicroquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("microquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MicroquizConfig::default(),
    };

    // Apply env var overrides
    if let Ok(tasks) = std::env::var("MICROQUIZ_TASKS") {
        config.tasks_path = PathBuf::from(tasks);
    }
    if let Ok(progress) = std::env::var("MICROQUIZ_PROGRESS") {
        config.progress_path = PathBuf::from(progress);
    }
    if let Ok(lang) = std::env::var("MICROQUIZ_LANG") {
        config.language = lang.parse()?;
    }

    config.tasks_path = resolve_path(&config.tasks_path);
    config.progress_path = resolve_path(&config.progress_path);

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<MicroquizConfig> {
    Ok(toml::from_str::<MicroquizConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("microquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_MICROQUIZ_TEST_VAR", "data");
        assert_eq!(resolve_env_vars("${_MICROQUIZ_TEST_VAR}"), "data");
        assert_eq!(
            resolve_env_vars("${_MICROQUIZ_TEST_VAR}/progress.json"),
            "data/progress.json"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_MICROQUIZ_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = MicroquizConfig::default();
        assert_eq!(config.tasks_path, PathBuf::from("tasks.json"));
        assert_eq!(config.progress_path, PathBuf::from("progress.json"));
        assert_eq!(config.language, Locale::En);
        assert!(config.seed_categories.is_empty());
        assert_eq!(config.quit_words, vec!["q", "й"]);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
tasks_path = "data/tasks.json"
progress_path = "data/progress.json"
language = "ru"
seed_categories = ["Логика", "Математика"]
quit_words = ["q", "exit"]
recent_limit = 10
"#;
        let config = parse_config_str(toml_str).unwrap();
        assert_eq!(config.language, Locale::Ru);
        assert_eq!(config.seed_categories.len(), 2);
        assert_eq!(config.quit_words, vec!["q", "exit"]);
        assert_eq!(config.recent_limit, 10);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config = parse_config_str("language = \"en\"").unwrap();
        assert_eq!(config.tasks_path, PathBuf::from("tasks.json"));
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/microquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("microquiz.toml");
        std::fs::write(&path, "seed_categories = [\"Logic\"]\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.seed_categories, vec!["Logic"]);
    }
}

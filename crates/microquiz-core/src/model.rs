//! Core data model types for microquiz.
//!
//! A [`Task`] is one quiz item from the catalog. [`Locale`] selects the
//! display language and never influences the quiz logic itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier across the catalog.
    pub id: String,
    /// Category label used for grouping and filtering.
    pub category: String,
    /// Question text shown to the user.
    pub question: String,
    /// Canonical correct answer.
    pub answer: String,
    /// Multiple-choice options, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Shown after the user answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Task {
    /// Check a submitted answer against this task.
    pub fn accepts(&self, submitted: &str) -> bool {
        crate::answer::is_correct(submitted, &self.answer, self.options.as_deref())
    }
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" | "русский" => Ok(Locale::Ru),
            other => Err(QuizError::UnknownLocale(other.to_string())),
        }
    }
}

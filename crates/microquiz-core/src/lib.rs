//! microquiz-core — Task selection, answer matching, and streak tracking.
//!
//! This crate holds every decision the quiz makes: which task to serve,
//! whether an answer is right, and how progress changes afterwards. The CLI
//! only renders and collects input.

pub mod answer;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod selector;
pub mod session;
pub mod statistics;
pub mod storage;

pub use catalog::Catalog;
pub use error::QuizError;
pub use model::{Locale, Task};
pub use progress::{ProgressState, SolveOutcome, StreakChange};

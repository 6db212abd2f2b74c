//! Subcommand implementations.

use microquiz_core::clock::Clock;
use microquiz_core::config::MicroquizConfig;

use crate::i18n::Messages;

pub mod ask;
pub mod categories;
pub mod category;
pub mod init;
pub mod reset;
pub mod stats;
pub mod today;
pub mod validate;

/// Everything a command needs, resolved once in `main`.
pub struct AppContext {
    pub config: MicroquizConfig,
    pub messages: Messages,
    pub clock: Clock,
}

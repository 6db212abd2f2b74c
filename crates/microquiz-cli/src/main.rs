//! microquiz CLI — one trivia question a day, with streak tracking.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use microquiz_core::clock::{parse_date, Clock};
use microquiz_core::config::load_config_from;
use microquiz_core::Locale;

mod commands;
mod i18n;

use commands::AppContext;
use i18n::Messages;

#[derive(Parser)]
#[command(name = "microquiz", version, about = "Micro-learning trivia quiz for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Display language (en, ru)
    #[arg(long, global = true, env = "MICROQUIZ_LANG")]
    lang: Option<Locale>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Task catalog JSON (overrides config)
    #[arg(long, global = true)]
    tasks: Option<PathBuf>,

    /// Progress JSON (overrides config)
    #[arg(long, global = true)]
    progress: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, env = "MICROQUIZ_TODAY", value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get today's task (default)
    Today,

    /// Show statistics
    Stats,

    /// Get a task from a specific category
    Category {
        /// Category name
        name: String,
    },

    /// Show all categories
    Categories,

    /// Reset progress
    Reset,

    /// Check the task catalog for mistakes
    Validate,

    /// Create starter config and task catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("microquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Today) {
        Commands::Init => commands::init::execute(),
        Commands::Today => commands::today::execute(&load_context(cli.global)?),
        Commands::Stats => commands::stats::execute(&load_context(cli.global)?),
        Commands::Category { name } => {
            commands::category::execute(&load_context(cli.global)?, &name)
        }
        Commands::Categories => commands::categories::execute(&load_context(cli.global)?),
        Commands::Reset => commands::reset::execute(&load_context(cli.global)?),
        Commands::Validate => commands::validate::execute(&load_context(cli.global)?),
    }
}

/// Load config and apply command-line overrides on top of it.
fn load_context(args: GlobalArgs) -> anyhow::Result<AppContext> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(tasks) = args.tasks {
        config.tasks_path = tasks;
    }
    if let Some(progress) = args.progress {
        config.progress_path = progress;
    }
    if let Some(lang) = args.lang {
        config.language = lang;
    }

    Ok(AppContext {
        messages: Messages::new(config.language),
        clock: Clock::from_override(args.today),
        config,
    })
}

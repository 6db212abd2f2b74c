//! The `microquiz category <name>` command.

use anyhow::Result;

use microquiz_core::selector::select_in_category;
use microquiz_core::storage::{load_catalog, load_progress};

use super::ask::ask;
use super::AppContext;

pub fn execute(ctx: &AppContext, category: &str) -> Result<()> {
    let catalog = load_catalog(&ctx.config.tasks_path)?;
    let mut progress = load_progress(&ctx.config.progress_path)?;

    // An unknown category propagates as an error; exhaustion does not.
    let picked = select_in_category(
        &catalog,
        category,
        &progress.completed_ids(),
        &mut rand::rng(),
    )?;
    let Some(task) = picked else {
        println!("{}", ctx.messages.category_completed(category));
        return Ok(());
    };

    ask(ctx, &mut progress, task)?;
    Ok(())
}

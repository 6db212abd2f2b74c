//! The `microquiz today` command.

use anyhow::Result;

use microquiz_core::selector::select_task;
use microquiz_core::storage::{load_catalog, load_progress};

use super::ask::ask;
use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let msg = &ctx.messages;
    let catalog = load_catalog(&ctx.config.tasks_path)?;
    let mut progress = load_progress(&ctx.config.progress_path)?;

    if catalog.is_empty() {
        println!("{}", msg.empty_catalog());
        return Ok(());
    }

    let Some(task) = select_task(&catalog, &progress.completed_ids(), &mut rand::rng()) else {
        println!("{}", msg.all_completed());
        println!("{}", msg.total_solved(progress.total_solved));
        return Ok(());
    };

    ask(ctx, &mut progress, task)?;
    Ok(())
}

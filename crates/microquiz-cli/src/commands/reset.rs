//! The `microquiz reset` command.

use anyhow::Result;

use microquiz_core::answer::normalize;
use microquiz_core::progress::ProgressState;
use microquiz_core::storage::save_progress;

use super::ask::read_line;
use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let msg = &ctx.messages;

    println!("{}", msg.reset_warning());
    let confirm = read_line(msg.reset_prompt())?.unwrap_or_default();
    let confirm = normalize(&confirm);

    if !msg.confirm_words().contains(&confirm.as_str()) {
        println!("{}", msg.cancelled());
        return Ok(());
    }

    let fresh = ProgressState::reset(&ctx.config.seed_categories);
    save_progress(&ctx.config.progress_path, &fresh)?;
    tracing::info!(path = %ctx.config.progress_path.display(), "progress reset");
    println!("\n{}", msg.reset_done());

    Ok(())
}

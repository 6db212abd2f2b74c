//! The `microquiz stats` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use microquiz_core::statistics::StatsSummary;
use microquiz_core::storage::load_progress;

use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let msg = &ctx.messages;
    let progress = load_progress(&ctx.config.progress_path)?;
    let summary = StatsSummary::from_progress(&progress, ctx.config.recent_limit);

    let last_solved = summary
        .last_solved_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| msg.never().to_string());

    let mut table = Table::new();
    table.set_header(vec![msg.metric_header(), msg.value_header()]);
    table.add_row(vec![
        Cell::new(msg.total_solved_label()),
        Cell::new(summary.total_solved),
    ]);
    table.add_row(vec![
        Cell::new(msg.streak_days_label()),
        Cell::new(summary.streak_days),
    ]);
    table.add_row(vec![Cell::new(msg.last_solved_label()), Cell::new(last_solved)]);

    println!("[CHART] {}", msg.statistics_title());
    println!("{table}");

    if !summary.categories.is_empty() {
        let mut cat_table = Table::new();
        cat_table.set_header(vec![msg.category_label(), msg.solved_header()]);
        for c in &summary.categories {
            cat_table.add_row(vec![Cell::new(&c.category), Cell::new(c.solved)]);
        }
        println!("\n[FOLDER] {}", msg.by_category_title());
        println!("{cat_table}");
    }

    if !summary.recent.is_empty() {
        println!("\n[CLOCK] {}", msg.recently_completed());
        for r in &summary.recent {
            println!("  * {} - {}", r.task_id, r.solved_on.format("%Y-%m-%d"));
        }
    }

    Ok(())
}

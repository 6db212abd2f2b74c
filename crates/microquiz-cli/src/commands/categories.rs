//! The `microquiz categories` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use microquiz_core::storage::load_catalog;

use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let msg = &ctx.messages;
    let catalog = load_catalog(&ctx.config.tasks_path)?;

    if catalog.is_empty() {
        println!("{}", msg.empty_catalog());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![msg.category_label(), msg.tasks_header()]);
    for (category, count) in catalog.category_counts() {
        table.add_row(vec![Cell::new(category), Cell::new(count)]);
    }

    println!("[FOLDER] {}", msg.categories_title());
    println!("{table}");

    Ok(())
}

//! The `microquiz validate` command.

use anyhow::Result;

use microquiz_core::storage::load_catalog;

use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    let path = &ctx.config.tasks_path;
    anyhow::ensure!(path.exists(), "task catalog not found: {}", path.display());

    let catalog = load_catalog(path)?;
    println!(
        "Catalog: {} ({} tasks, {} categories)",
        path.display(),
        catalog.len(),
        catalog.category_counts().len()
    );

    let warnings = catalog.validate();
    for w in &warnings {
        let prefix = w
            .task_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

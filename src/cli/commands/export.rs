//! Export view - dumps the ledger to an xlsx workbook.

use crate::{
    cli::AppContext,
    core::{export::export_workbook, ledger},
    errors::Result,
};
use clap::Args;
use std::path::PathBuf;

/// Export destination.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory for the workbook; defaults to `export_dir` from the config
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Writes all three tables and reports what was written.
pub async fn export(ctx: &AppContext, args: &ExportArgs) -> Result<String> {
    let snapshot = ledger::snapshot(&ctx.database).await?;
    let dir = args.dir.as_deref().unwrap_or(&ctx.config.export_dir);
    let summary = export_workbook(&snapshot, dir)?;

    Ok(format!(
        "Ledger exported to {} ({} products, {} sales, {} expenses)\n",
        summary.path.display(),
        summary.products,
        summary.income,
        summary.expenses
    ))
}

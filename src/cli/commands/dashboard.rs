//! Dashboard view - business overview for a date range.

use crate::{
    cli::AppContext,
    core::{
        cashflow::Cashflow,
        ledger,
        report::{format_metric_cards, format_month, format_trend_table},
    },
    errors::Result,
};
use chrono::NaiveDate;
use clap::Args;
use std::fmt::Write;

/// Message shown while the ledger is still empty
pub const NO_DATA_MESSAGE: &str =
    "No data yet. Record a sale or an expense to see your cashflow.";

/// Range selection for the dashboard.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// First day to include (YYYY-MM-DD); defaults to the earliest entry
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD); defaults to the latest entry
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Renders totals and the monthly trend.
///
/// When the ledger holds no income and no expenses, only the "no data" message
/// is shown: there is no earliest or latest entry to default the range to.
pub async fn dashboard(ctx: &AppContext, args: &DashboardArgs) -> Result<String> {
    let snapshot = ledger::snapshot(&ctx.database).await?;

    let Some(bounds) = snapshot.bounds() else {
        return Ok(format!("{NO_DATA_MESSAGE}\n"));
    };
    let start = args.from.unwrap_or(bounds.start);
    let end = args.to.unwrap_or(bounds.end);

    let summary = match snapshot.cashflow(start, end) {
        Cashflow::NoData => return Ok(format!("{NO_DATA_MESSAGE}\n")),
        Cashflow::Summary(summary) => summary,
    };

    let symbol = ctx.symbol();
    let mut out = String::new();
    if let Some(warning) = summary.warning {
        writeln!(out, "Warning: {warning}\n")?;
    }
    writeln!(
        out,
        "Business overview {} to {}\n",
        summary.range.start, summary.range.end
    )?;
    out.push_str(&format_metric_cards(&summary, symbol)?);
    writeln!(
        out,
        "\nCashflow trend {} to {}",
        format_month(summary.range.start),
        format_month(summary.range.end)
    )?;
    out.push_str(&format_trend_table(&summary.trend, symbol)?);
    Ok(out)
}

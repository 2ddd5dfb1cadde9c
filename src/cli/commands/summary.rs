use crate::chart::ChartSeries;
use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::SummaryService;
use crate::currency::CurrencyFormat;

use super::refresh_dashboard;

const BAR_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("summary", "Show the dashboard", "summary", cmd_summary),
        CommandEntry::new("chart", "Spending per category", "chart", cmd_chart),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = refresh_dashboard(context);
    let currency = context.currency();

    output::section("Dashboard");
    io::print_info(format!("  Entries      : {}", summary.entry_count));
    io::print_info(format!("  Total spent  : {}", currency.amount(summary.total_spent)));
    io::print_info(format!(
        "  Budget       : {}",
        summary
            .budget
            .map(|budget| currency.plain(budget))
            .unwrap_or_else(|| "not set".into())
    ));
    io::print_info(format!("  Saved        : {}", currency.amount(summary.saved_amount)));
    io::print_info(format!(
        "  Top category : {}",
        summary
            .top_category
            .map(|top| format!("{} ({})", top.category, currency.amount(top.amount)))
            .unwrap_or_else(|| "-".into())
    ));
    if summary.budget_exceeded {
        io::print_warning("Budget exceeded.");
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let series = SummaryService::expense_breakdown(context.store.ledger());
    output::section("Spending by category");
    if context.store.ledger().is_empty() {
        io::print_info("No Data");
        return Ok(());
    }
    print_series(&series, &context.currency());
    Ok(())
}

/// Renders a label/value series as horizontal text bars.
pub(crate) fn print_series(series: &ChartSeries, currency: &CurrencyFormat) {
    let width = series
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max_value();
    for (label, value) in series.iter() {
        io::print_info(format!(
            "  {:<width$} {:>12} {}",
            label,
            currency.amount(value),
            output::bar(value, max, BAR_WIDTH),
        ));
    }
}

use crate::cli::core::{usage_error, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::validation::parse_positive;

use super::{ensure_max_args, refresh_dashboard};

const BUDGET_USAGE: &str = "budget <value>|show";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Set or show the spending limit",
        BUDGET_USAGE,
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 1, BUDGET_USAGE)?;
    let raw = args.first().copied().unwrap_or("show");
    if raw.eq_ignore_ascii_case("show") {
        return show_budget(context);
    }
    if raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(usage_error(BUDGET_USAGE));
    }

    let value = parse_positive(raw, "budget")?;
    let currency = context.currency();
    context.store.set_budget(value)?;
    io::print_success(format!("Budget set to {}.", currency.plain(value)));
    refresh_dashboard(context);
    Ok(())
}

fn show_budget(context: &ShellContext) -> CommandResult {
    let currency = context.currency();
    let ledger = context.store.ledger();
    match ledger.budget {
        Some(budget) => {
            let remaining = budget - ledger.total_spent();
            io::print_info(format!(
                "Budget: {} | Spent: {} | Remaining: {}",
                currency.plain(budget),
                currency.amount(ledger.total_spent()),
                currency.amount(remaining)
            ));
        }
        None => io::print_info("No budget set. Use `budget <value>` to set one."),
    }
    Ok(())
}

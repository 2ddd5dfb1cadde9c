use std::path::PathBuf;

use crate::cli::core::{usage_error, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::core::services::ExportService;
use crate::ledger::validation::{parse_date, parse_positive};

use super::{arg, ensure_max_args, refresh_dashboard};

const ADD_USAGE: &str = "add <amount> <category> [YYYY-MM-DD]";
const CLEAR_USAGE: &str = "clear [--yes]";
const EXPORT_USAGE: &str = "export [path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an expense", ADD_USAGE, cmd_add),
        CommandEntry::new("list", "Show expenses, latest first", "list", cmd_list),
        CommandEntry::new("clear", "Delete every expense", CLEAR_USAGE, cmd_clear),
        CommandEntry::new("export", "Write expenses as CSV", EXPORT_USAGE, cmd_export),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 3, ADD_USAGE)?;
    let amount = parse_positive(arg(args, 0, ADD_USAGE)?, "amount")?;
    let category = arg(args, 1, ADD_USAGE)?;
    let date = args.get(2).map(|raw| parse_date(raw)).transpose()?;

    let currency = context.currency();
    let ledger = context.store.add_expense(amount, category, date)?;
    if let Some(record) = ledger.expenses.last() {
        io::print_success(format!(
            "Added {} for {} on {}.",
            currency.amount(record.amount),
            record.category,
            record.date
        ));
    }
    refresh_dashboard(context);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.store.ledger();
    if ledger.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }
    let currency = context.currency();
    output::section(format!("Expenses ({})", ledger.len()));
    for record in ledger.expenses_latest_first() {
        io::print_info(format!(
            "  {}  {:>12}  {}",
            record.date,
            currency.amount(record.amount),
            record.category
        ));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 1, CLEAR_USAGE)?;
    let forced = match args.first() {
        Some(flag) if flag.eq_ignore_ascii_case("--yes") || flag.eq_ignore_ascii_case("-y") => {
            true
        }
        Some(_) => return Err(usage_error(CLEAR_USAGE)),
        None => false,
    };
    let confirmed = if forced {
        true
    } else if context.mode == CliMode::Interactive {
        io::confirm_action(&context.theme, "Clear all expenses?", false)?
    } else {
        io::print_warning("Refusing to clear without confirmation; pass --yes.");
        false
    };

    if !confirmed {
        context.store.clear(false)?;
        io::print_info("Nothing was cleared.");
        return Ok(());
    }
    context.store.clear(true)?;
    io::print_success("All expenses cleared. Budget kept.");
    refresh_dashboard(context);
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 1, EXPORT_USAGE)?;
    let file = ExportService::export_as(context.store.ledger(), &context.config.export_file_name)?;
    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&file.file_name));
    file.write_to(&path)?;
    tracing::info!(path = %path.display(), rows = context.store.ledger().len(), "expenses exported");
    io::print_success(format!("Exported expenses to {}.", path.display()));
    Ok(())
}

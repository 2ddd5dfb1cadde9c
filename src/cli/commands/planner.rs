use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::validation::{parse_positive, parse_positive_count};
use crate::planner::{pocket_plan, project_sip};

use super::{arg, ensure_max_args};

const SIP_USAGE: &str = "sip <monthly amount> <years> <annual rate %>";
const POCKET_USAGE: &str = "pocket <amount> [days]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("sip", "Project a monthly SIP", SIP_USAGE, cmd_sip),
        CommandEntry::new("pocket", "Split money evenly across days", POCKET_USAGE, cmd_pocket),
    ]
}

fn cmd_sip(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 3, SIP_USAGE)?;
    let amount = parse_positive(arg(args, 0, SIP_USAGE)?, "monthly amount")?;
    let years = parse_positive(arg(args, 1, SIP_USAGE)?, "years")?;
    let rate = parse_positive(arg(args, 2, SIP_USAGE)?, "annual rate")?;

    let projection = project_sip(amount, years, rate)?;
    let currency = context.currency();
    output::section("SIP projection");
    io::print_info(format!(
        "  {}/month for {} months at {}% a year",
        currency.plain(amount),
        projection.months,
        rate
    ));
    io::print_success(format!(
        "Future value: {}",
        currency.amount(projection.future_value)
    ));

    let chart = projection.chart_series();
    if !chart.is_empty() {
        super::summary::print_series(&chart, &currency);
    }
    Ok(())
}

fn cmd_pocket(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_max_args(args, 2, POCKET_USAGE)?;
    let total = parse_positive(arg(args, 0, POCKET_USAGE)?, "amount")?;
    let days = match args.get(1) {
        Some(raw) => parse_positive_count(raw, "days")?,
        None => context.config.default_pocket_days,
    };

    let plan = pocket_plan(total, days)?;
    let currency = context.currency();
    output::section("Pocket plan");
    io::print_success(format!(
        "You can spend {} per day for {} days.",
        currency.amount(plan.per_day),
        plan.total_days
    ));
    for (day, allowance) in plan.days() {
        io::print_info(format!("  Day {:>3}: {}", day, currency.amount(allowance)));
    }
    Ok(())
}

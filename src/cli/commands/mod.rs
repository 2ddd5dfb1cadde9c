pub mod budget;
pub mod chat;
pub mod config;
pub mod expense;
pub mod planner;
pub mod summary;
pub mod system;

use crate::cli::core::{usage_error, CommandError, CommandResult};
use crate::cli::registry::CommandRegistry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::DashboardSummary;
use crate::core::services::SummaryService;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in expense::definitions()
        .into_iter()
        .chain(budget::definitions())
        .chain(summary::definitions())
        .chain(planner::definitions())
        .chain(chat::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Re-projects the dashboard after a mutation and forwards any budget alert.
pub(crate) fn refresh_dashboard(context: &mut ShellContext) -> DashboardSummary {
    let currency = context.currency();
    SummaryService::refresh(context.store.ledger(), &currency, &mut context.notifier)
}

/// Fetches the positional argument at `index` or fails with the command usage.
pub(crate) fn arg<'a>(args: &[&'a str], index: usize, usage: &str) -> Result<&'a str, CommandError> {
    args.get(index).copied().ok_or_else(|| usage_error(usage))
}

pub(crate) fn ensure_max_args(args: &[&str], max: usize, usage: &str) -> CommandResult {
    if args.len() > max {
        return Err(usage_error(usage));
    }
    Ok(())
}

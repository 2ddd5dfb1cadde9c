use crate::cli::core::{usage_error, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const CONFIG_USAGE: &str =
    "config [show|set <currency|export|pocket_days|data_dir> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(usage_error(CONFIG_USAGE));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            set_config_value(context, &key, &value)
        }
        _ => Err(usage_error(CONFIG_USAGE)),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    io::print_info(format!("  Currency symbol : {}", config.currency_symbol));
    io::print_info(format!("  Export file     : {}", config.export_file_name));
    io::print_info(format!("  Pocket days     : {}", config.default_pocket_days));
    io::print_info(format!(
        "  Data directory  : {}",
        config
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "(default)".into())
    ));
    io::print_info(format!(
        "  Config file     : {}",
        context.config_manager.path().display()
    ));
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set_value(key, value)?;
    context.config_manager.save(&updated)?;
    let data_dir_changed = updated.data_dir != context.config.data_dir;
    context.config = updated;
    tracing::info!(key, "configuration updated");
    io::print_success(format!("Updated `{key}`."));
    if data_dir_changed {
        io::print_hint("The new data directory is used from the next session.");
    }
    Ok(())
}

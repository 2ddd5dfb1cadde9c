use crate::chat::ChatResponder;
use crate::cli::core::{usage_error, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const CHAT_USAGE: &str = "chat <message...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "chat",
        "Ask the FinSmart assistant",
        CHAT_USAGE,
        cmd_chat,
    )]
}

fn cmd_chat(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage_error(CHAT_USAGE));
    }
    let message = args.join(" ");
    let responder = ChatResponder::new(context.currency());
    for line in responder.respond(&message, context.store.ledger()) {
        io::print_info(format!("bot: {line}"));
    }
    Ok(())
}

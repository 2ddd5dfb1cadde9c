use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::{io as cli_io, output, shell_context::CliMode};
use crate::notify::{Notification, Notifier, Permission};

/// Terminal notification surface. Script sessions never prompt and treat
/// notifications as permitted.
pub struct ConsoleNotifier {
    permission: Permission,
    theme: ColorfulTheme,
}

impl ConsoleNotifier {
    pub fn new(mode: CliMode) -> Self {
        let permission = match mode {
            CliMode::Interactive => Permission::Undecided,
            CliMode::Script => Permission::Granted,
        };
        Self {
            permission,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        let granted = Confirm::with_theme(&self.theme)
            .with_prompt("Show budget alerts as notifications?")
            .default(true)
            .interact()
            .unwrap_or(false);
        self.permission = if granted {
            Permission::Granted
        } else {
            Permission::Denied
        };
        self.permission
    }

    fn show(&mut self, notification: &Notification) {
        output::section(&notification.title);
        cli_io::print_warning(&notification.body);
    }

    fn fallback(&mut self, notification: &Notification) {
        cli_io::print_warning(format!("Warning: {}", notification.body));
    }
}

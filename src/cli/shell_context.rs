use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::{
    cli::{commands, core::CliError, io as cli_io, notifier::ConsoleNotifier, output},
    config::{Config, ConfigManager},
    core::{
        clock::{Clock, SystemClock},
        ledger_store::{LedgerStore, LoadReport},
        utils::PathResolver,
    },
    currency::CurrencyFormat,
    storage::{FileStore, KeyValueStore},
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every shell command for the lifetime of a session.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: LedgerStore,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub notifier: ConsoleNotifier,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Opens the file-backed ledger under the resolved data root.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = PathResolver::base_dir();
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        let data_root = config.data_dir.clone().unwrap_or(base);
        let storage = FileStore::new(Some(data_root))?;
        tracing::info!(root = %storage.root().display(), "using file store");
        Self::assemble(
            mode,
            config_manager,
            config,
            Box::new(storage),
            Box::new(SystemClock),
        )
    }

    /// Builds a context over an explicit backend; the config still lives under `base`.
    pub fn with_parts(
        mode: CliMode,
        base: PathBuf,
        storage: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        Self::assemble(mode, config_manager, config, storage, clock)
    }

    fn assemble(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        storage: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let (store, report) = LedgerStore::open_with_clock(storage, clock);
        if mode == CliMode::Script {
            output::set_plain(true);
        }
        report_load(&report);

        Ok(Self {
            mode,
            registry,
            store,
            config_manager,
            config,
            notifier: ConsoleNotifier::new(mode),
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn currency(&self) -> CurrencyFormat {
        self.config.currency()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("finsmart ({}) > ", self.store.ledger().len())
    }

    /// Categories already in the ledger, in first-use order.
    pub fn category_names(&self) -> Vec<String> {
        self.store
            .by_category()
            .into_iter()
            .map(|total| total.category)
            .collect()
    }
}

fn report_load(report: &LoadReport) {
    for warning in &report.warnings {
        cli_io::print_warning(warning);
    }
}

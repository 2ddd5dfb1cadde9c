use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, LoopControl};
use crate::cli::output::{hint as output_hint, info as output_info};
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::config::SETTABLE_KEYS;
use crate::core::utils::PathResolver;

/// Environment variable switching the shell to line-per-command stdin mode.
pub const SCRIPT_ENV: &str = "FINSMART_CLI_SCRIPT";
const HISTORY_FILE: &str = "history.txt";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(
        context.command_names(),
        context.category_names(),
    )));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    let history_path = PathResolver::base_dir().join(HISTORY_FILE);
    if editor.load_history(&history_path).is_err() {
        tracing::debug!(path = %history_path.display(), "no shell history loaded");
    }

    output_info(format!("FinSmart {}", crate::utils::build_info::CLI_VERSION));
    output_hint("Type `help` to list commands or `chat hello` to talk to the assistant.");

    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
                if let Some(helper) = editor.helper_mut() {
                    helper.set_categories(context.category_names());
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history_path) {
        tracing::debug!(error = %err, "failed to save shell history");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        match context.process_line(&line?) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

/// Completes command names, their fixed sub-arguments, and known categories
/// in the category slot of `add`.
struct CommandHelper {
    commands: Vec<String>,
    categories: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>, categories: Vec<String>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        let mut helper = Self {
            commands,
            categories: Vec::new(),
        };
        helper.set_categories(categories);
        helper
    }

    fn set_categories(&mut self, mut categories: Vec<String>) {
        categories.sort();
        categories.dedup();
        self.categories = categories;
    }

    /// Candidates for the word being typed, given the words before it.
    fn candidates(&self, previous: &[&str], needle: &str) -> Vec<String> {
        let pool: Vec<&str> = match previous {
            [] => self.commands.iter().map(String::as_str).collect(),
            [cmd] if cmd.eq_ignore_ascii_case("help") => {
                self.commands.iter().map(String::as_str).collect()
            }
            [cmd] if cmd.eq_ignore_ascii_case("config") => vec!["show", "set"],
            [cmd, sub] if cmd.eq_ignore_ascii_case("config") && sub.eq_ignore_ascii_case("set") => {
                SETTABLE_KEYS.to_vec()
            }
            [cmd] if cmd.eq_ignore_ascii_case("budget") => vec!["show"],
            [cmd] if cmd.eq_ignore_ascii_case("clear") => vec!["--yes"],
            [cmd, _amount] if cmd.eq_ignore_ascii_case("add") => {
                self.categories.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        };
        let needle = needle.to_lowercase();
        pool.into_iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .map(str::to_string)
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let previous: Vec<&str> = prefix[..start].split_whitespace().collect();
        let candidates = self
            .candidates(&previous, &prefix[start..])
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

/// Splits a line with shell quoting so `"street food"` stays one argument.
pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

use std::path::PathBuf;

use crate::config;
use crate::core::InventoryStore;
use crate::storage::JsonStorage;
use crate::utils::build_info;

use super::core::{report_error, CliError, CliMode, LoopControl};
use super::flow::Navigator;
use super::input::{InputEvent, InputSource};
use super::output::{self, OutputPreferences};

const USAGE: [&str; 3] = [
    "Usage: inventory_core_cli [DATA_FILE]",
    "       inventory_core_cli --version",
    "DATA_FILE defaults to the configured `data_file`, then `category.json`.",
];

#[derive(Debug, PartialEq)]
enum Invocation {
    Run(Option<PathBuf>),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut data_file = None;
    for arg in args {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Invocation::Version),
            "--help" | "-h" => return Ok(Invocation::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Input(format!("unknown option `{flag}`")));
            }
            path => {
                if data_file.is_some() {
                    return Err(CliError::Input(
                        "expected at most one data file argument".to_string(),
                    ));
                }
                data_file = Some(PathBuf::from(path));
            }
        }
    }
    Ok(Invocation::Run(data_file))
}

/// Runs one session. `args` excludes the program name.
pub fn run_cli(args: Vec<String>) -> Result<(), CliError> {
    let explicit = match parse_args(&args)? {
        Invocation::Version => {
            build_info::current()
                .describe()
                .iter()
                .for_each(|line| println!("{line}"));
            return Ok(());
        }
        Invocation::Help => {
            USAGE.iter().for_each(|line| println!("{line}"));
            return Ok(());
        }
        Invocation::Run(path) => path,
    };

    let mode = CliMode::from_env();
    let config = config::default_manager()?.load_or_init()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
    });
    let data_file = config.resolve_data_file(explicit.as_deref());

    let mut input = InputSource::new(mode)?;
    let Some(user) = prompt_user(&mut input)? else {
        return Ok(());
    };

    let storage = JsonStorage::new(data_file, Some(config.backup_retention));
    let mut store = InventoryStore::open(Box::new(storage), user)?;
    greet(&store)?;

    let mut navigator = Navigator::new(config.recent_transactions_limit);
    run_loop(&mut store, &mut navigator, &mut input)
}

/// Asks for a non-blank name. `None` when the user leaves instead.
fn prompt_user(input: &mut InputSource) -> Result<Option<String>, CliError> {
    loop {
        match input.read_line("Enter your name")? {
            InputEvent::Line(name) if !name.is_empty() => return Ok(Some(name)),
            InputEvent::Line(_) => output::warning("Name cannot be empty."),
            InputEvent::Interrupted => {
                output::info("Interrupted. Goodbye.");
                return Ok(None);
            }
            InputEvent::EndOfInput => return Ok(None),
        }
    }
}

fn greet(store: &InventoryStore) -> Result<(), CliError> {
    let categories = store.list_categories()?;
    output::success(format!(
        "Welcome, {}! Loaded {} categories from {}.",
        store.user(),
        categories.len(),
        store.storage_location().display()
    ));

    let threshold = store.low_stock_threshold()?;
    let low = store.low_stock_items(threshold)?;
    if !low.is_empty() {
        output::warning(format!(
            "{} item(s) at or below the low-stock threshold of {}.",
            low.item_count(),
            threshold
        ));
    }
    Ok(())
}

fn run_loop(
    store: &mut InventoryStore,
    navigator: &mut Navigator,
    input: &mut InputSource,
) -> Result<(), CliError> {
    loop {
        let view = match navigator.render(store) {
            Ok(view) => view,
            Err(err) => {
                report_error(err)?;
                navigator.reset();
                continue;
            }
        };
        output::section(&view.title);
        view.body_lines().iter().for_each(|line| output::plain(line));

        let line = match input.read_line(&view.prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Interrupted => {
                output::info("Interrupted. Goodbye.");
                return Ok(());
            }
            InputEvent::EndOfInput => {
                output::info("End of input. Goodbye.");
                return Ok(());
            }
        };
        if line.is_empty() {
            continue;
        }

        match navigator.handle(store, &line) {
            Ok(outcome) => {
                for message in &outcome.messages {
                    output::print(message.kind, &message.text);
                }
                if outcome.control == LoopControl::Exit {
                    output::info("Goodbye.");
                    return Ok(());
                }
            }
            Err(err) => report_error(err)?,
        }
    }
}

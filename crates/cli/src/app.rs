//! One labeling session, from loading the config to writing the file back.

use csv_labeler_core::config::{self, expand_path, Config};
use csv_labeler_core::error::Result;
use csv_labeler_core::file_handling;
use csv_labeler_core::render::check_relevant_columns;
use csv_labeler_core::table::Table;
use log::{debug, info, warn};

use crate::cli_args::Args;
use crate::colors::highlight_style;
use crate::completion::complete;
use crate::console::Console;
use crate::input::{confirm, prompt_csv_path};
use crate::labeling::label_table;

const EXISTING_LABELS_QUESTION: &str = "Existing labels detected! Do you want to keep the existing labels (if you choose No, all existing labels will be deleted!)";
const COMPLETED: &str = "Labeling of the CSV file completed";
const CANCELED: &str = "Labeling was canceled";

/// Load configuration from the path given on the command line or the default.
fn initialize_config(args: &Args) -> Result<Config> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    file_handling::get_config(&config_path)
}

/// Decides whether labels already in the file survive this session.
fn keep_existing_labels<C: Console>(
    console: &mut C,
    args: &Args,
    table: &mut Table,
    label_column: usize,
) -> Result<bool> {
    if !table.has_labels(label_column) {
        return Ok(false);
    }

    let keep = match args.existing_label_choice() {
        Some(keep) => keep,
        None => confirm(console, EXISTING_LABELS_QUESTION)?,
    };

    if !keep {
        warn!("Deleting existing labels");
        table.clear_column(label_column);
    }

    Ok(keep)
}

/// Runs the labeler against `console`.
///
/// # Errors
///
/// Fails on invalid configuration, unreadable or unwritable CSV files and
/// console errors. Canceling is not an error.
pub fn run<C: Console>(args: &Args, console: &mut C) -> Result<()> {
    let config = initialize_config(args)?;

    if let Some(text) = &args.complete {
        for label in complete(&config.catalog, text) {
            console.print_line(label)?;
        }
        return Ok(());
    }

    let style = highlight_style(&config.foreground, &config.background)?;

    let csv_path = match &args.csv_path {
        Some(path) => expand_path(path),
        None => match prompt_csv_path(console)? {
            Some(path) => path,
            None => {
                console.print_line("Exiting...")?;
                return Ok(());
            }
        },
    };

    let mut table = Table::load(&csv_path, config.separator)?;
    info!("Loaded {} rows from `{}`", table.len(), csv_path);
    check_relevant_columns(table.headers(), &config.display)?;

    let label_column = table.ensure_column(config.label_column());
    let keep_existing = keep_existing_labels(console, args, &mut table, label_column)?;

    let outcome = label_table(console, &mut table, &config, &style, keep_existing)?;
    debug!("Labeling finished: {:?}", outcome);

    console.clear()?;
    if outcome.interrupted {
        console.print_line(CANCELED)?;
    } else {
        console.print_line(COMPLETED)?;
    }

    if outcome.save {
        table.save(&csv_path)?;
        info!("Saved labels to `{}`", csv_path);
        if outcome.interrupted {
            console.print_line(&format!("{} labels were saved", outcome.labeled))?;
        }
    } else {
        console.print_line("The labels were not saved")?;
    }

    Ok(())
}

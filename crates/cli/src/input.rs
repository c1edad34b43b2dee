use std::path::Path;

use csv_labeler_core::config::expand_path;
use csv_labeler_core::error::Result;
use log::debug;

use crate::console::Console;

const INVALID_CONFIRMATION: &str =
    "Please enter a valid value (\"Y/y\" or Enter for Yes, \"N/n\" for No)";

const CSV_PATH_PROMPT: &str = "Please enter the path of the csv file: ";

/// Asks a yes/no question. An empty answer means yes.
pub fn confirm<C: Console>(console: &mut C, question: &str) -> Result<bool> {
    let prompt = format!("{question} (Y/n): ");

    loop {
        let reply = console.read_line(&prompt)?.trim().to_lowercase();

        if reply.is_empty() || reply == "y" {
            return Ok(true);
        }

        if reply == "n" {
            return Ok(false);
        }

        console.print_line(INVALID_CONFIRMATION)?;
    }
}

/// Asks for the CSV file until an existing file is given.
///
/// Returns `None` when the user quits with `q`.
pub fn prompt_csv_path<C: Console>(console: &mut C) -> Result<Option<String>> {
    loop {
        let input = console.read_line(CSV_PATH_PROMPT)?;

        if input.trim().eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let path = expand_path(&input);
        if Path::new(&path).is_file() {
            return Ok(Some(path));
        }

        debug!("`{}` is not a file", path);
        console.print_line("No valid file found")?;
    }
}

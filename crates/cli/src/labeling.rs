//! Walks the table row by row and asks for a label for each one.

use csv_labeler_core::config::Config;
use csv_labeler_core::error::Result;
use csv_labeler_core::highlight::HighlightStyle;
use csv_labeler_core::render::render_row;
use csv_labeler_core::table::Table;
use log::{debug, info};

use crate::classification::{prompt_classification, Classification};
use crate::console::Console;
use crate::input::confirm;

const SAVE_PARTIAL_QUESTION: &str =
    "\nInput was canceled, should the labels created so far be saved?";

/// What happened during one labeling run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelingOutcome {
    /// Rows that received a label in this run.
    pub labeled: usize,
    /// Rows skipped because they already had a label.
    pub kept: usize,
    /// The user canceled before the last row.
    pub interrupted: bool,
    /// The table should be written back.
    pub save: bool,
}

/// Labels every row of `table` in order.
///
/// With `keep_existing`, rows that already hold a label are skipped without a
/// prompt. A cancellation stops the loop at once, leaving later rows as they
/// are, and asks once whether the labels assigned so far should be saved.
///
/// The label column is added to the table if it is missing.
///
/// # Errors
///
/// Fails only on console errors.
pub fn label_table<C: Console>(
    console: &mut C,
    table: &mut Table,
    config: &Config,
    style: &HighlightStyle,
    keep_existing: bool,
) -> Result<LabelingOutcome> {
    let label_column = table.ensure_column(config.label_column());
    let mut outcome = LabelingOutcome {
        save: true,
        ..LabelingOutcome::default()
    };

    for row in 0..table.len() {
        if keep_existing && table.cell(row, label_column).is_some() {
            debug!("Keeping existing label of row {}", row + 1);
            outcome.kept += 1;
            continue;
        }

        console.clear()?;
        for line in render_row(table.row(row), &config.display, style) {
            console.print_line(&line)?;
        }

        match prompt_classification(console, &config.catalog, config.index_base)? {
            Classification::Label(label) => {
                debug!("Row {} labeled `{}`", row + 1, label);
                table.set_cell(row, label_column, Some(label));
                outcome.labeled += 1;
            }
            Classification::Cancelled => {
                info!("Labeling canceled at row {} of {}", row + 1, table.len());
                outcome.interrupted = true;
                outcome.save = confirm(console, SAVE_PARTIAL_QUESTION)?;
                break;
            }
        }
    }

    Ok(outcome)
}

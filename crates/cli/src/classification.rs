//! Interactive prompt that turns typed input into one label.
//!
//! Each line is checked in a fixed order: empty input, an exact label, a
//! partial label, the reassignment option, the cancel option and finally an
//! index in the configured base. Anything else is reported and asked again.

use csv_labeler_core::catalog::{IndexBase, LabelCatalog, ReservedOption, REASSIGNMENT_LABEL};
use csv_labeler_core::error::Result;
use itertools::Itertools;
use log::{debug, info};

use crate::console::Console;
use crate::input::confirm;

const CATEGORY_PROMPT: &str = "\nPlease select one of the categories, you can use the name, a unique part of the name or the corresponding number: ";
const EMPTY_INPUT: &str = "\nPlease select a category";
const INVALID_INPUT: &str = "Invalid Input, please choose a valid category!";

/// Outcome of one classification prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// A catalog label in its configured spelling, or the reassignment label.
    Label(String),
    Cancelled,
}

enum Step {
    Resolved(String),
    Cancelled,
    Retry,
}

/// Prints every label with its index, followed by the reserved options.
pub fn print_categories<C: Console>(
    console: &mut C,
    catalog: &LabelCatalog,
    index_base: IndexBase,
) -> Result<()> {
    console.print_line("\nThe following categories exist: ")?;

    for (index, label) in catalog.iter().enumerate() {
        console.print_line(&format!("\t{})\t{}", index_base.format(index + 1), label))?;
    }

    let reassignment = ReservedOption::Reassignment;
    let cancel = ReservedOption::Cancel;
    console.print_line(&format!(
        "\n\t{})\t{}",
        reassignment.shortcut(),
        reassignment.phrase()
    ))?;
    console.print_line(&format!("\t{})\t{}", cancel.shortcut(), cancel.phrase()))
}

/// Asks for a label until one is resolved or the user cancels.
///
/// The category listing is printed once, and the screen is cleared once a
/// label is chosen.
///
/// # Errors
///
/// Fails only on console errors, including running out of input.
pub fn prompt_classification<C: Console>(
    console: &mut C,
    catalog: &LabelCatalog,
    index_base: IndexBase,
) -> Result<Classification> {
    print_categories(console, catalog, index_base)?;

    loop {
        let input = console.read_line(CATEGORY_PROMPT)?;

        match evaluate(console, catalog, index_base, input.trim())? {
            Step::Resolved(label) => {
                debug!("Resolved input `{}` to `{}`", input, label);
                console.clear()?;
                return Ok(Classification::Label(label));
            }
            Step::Cancelled => {
                info!("Classification was canceled by the user");
                return Ok(Classification::Cancelled);
            }
            Step::Retry => {}
        }
    }
}

fn evaluate<C: Console>(
    console: &mut C,
    catalog: &LabelCatalog,
    index_base: IndexBase,
    input: &str,
) -> Result<Step> {
    if input.is_empty() {
        console.print_line(EMPTY_INPUT)?;
        return Ok(Step::Retry);
    }

    if let Some(label) = catalog.resolve_exact(input) {
        return Ok(Step::Resolved(label.to_string()));
    }

    match catalog.resolve_partial(input).as_slice() {
        [] => {}
        [candidate] => {
            if confirm(console, &format!("Did you mean \"{candidate}\"?"))? {
                return Ok(Step::Resolved((*candidate).to_string()));
            }
            debug!("Partial match `{}` was rejected", candidate);
        }
        candidates => {
            let joined = candidates.iter().map(|label| format!("\"{label}\"")).join(", ");
            console.print_line(&format!(
                "Too many possible results ({joined}), please enter a unique value"
            ))?;
            return Ok(Step::Retry);
        }
    }

    if ReservedOption::Reassignment.matches(input) {
        return Ok(Step::Resolved(REASSIGNMENT_LABEL.to_string()));
    }

    if ReservedOption::Cancel.matches(input) {
        return Ok(Step::Cancelled);
    }

    match catalog.resolve_index(input, index_base) {
        Ok(Some(label)) => return Ok(Step::Resolved(label.to_string())),
        Ok(None) => debug!("Index `{}` is out of range", input),
        Err(e) => debug!("User input `{}` was not a {} index: {}", input, index_base, e),
    }

    console.print_line(INVALID_INPUT)?;
    Ok(Step::Retry)
}

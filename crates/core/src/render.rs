//! Formats the relevant fields of a row for display next to the prompt.

use std::borrow::Cow;

use textwrap::wrap;

use crate::error::{Error, Result};
use crate::highlight::{highlight_keywords, HighlightStyle};
use crate::table::Row;

/// Display options taken from the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    pub label_column: String,
    /// Columns to show; empty means every column except the label column.
    pub relevant_columns: Vec<String>,
    pub keywords: Vec<String>,
    pub line_length: usize,
    pub name_value_separator_width: usize,
}

/// Removes backslashes and collapses whitespace, so multi-line cells print on one line.
#[must_use]
pub fn clean_text(value: &str) -> String {
    value
        .replace('\\', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps `text` to lines of at most `width` columns.
///
/// Words longer than `width` are split across lines. Always returns at least one line.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = wrap(text, width).into_iter().map(Cow::into_owned).collect();

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|number| number.is_finite())
}

/// Names of the columns to show for a table with `headers`.
#[must_use]
pub fn relevant_columns<'a>(headers: &'a [String], settings: &DisplaySettings) -> Vec<&'a str> {
    let label_column = settings.label_column.to_lowercase();
    let wanted: Vec<String> = settings
        .relevant_columns
        .iter()
        .map(|column| column.to_lowercase())
        .collect();

    headers
        .iter()
        .map(String::as_str)
        .filter(|header| {
            let header = header.to_lowercase();
            if wanted.is_empty() {
                header != label_column
            } else {
                wanted.contains(&header)
            }
        })
        .collect()
}

/// Checks that every configured relevant column exists in `headers`, ignoring case.
///
/// # Errors
///
/// Returns [`Error::MissingRelevantColumn`] naming the first column that is missing.
pub fn check_relevant_columns(headers: &[String], settings: &DisplaySettings) -> Result<()> {
    for column in &settings.relevant_columns {
        let column_lower = column.to_lowercase();
        if !headers
            .iter()
            .any(|header| header.to_lowercase() == column_lower)
        {
            return Err(Error::MissingRelevantColumn(column.clone()));
        }
    }

    Ok(())
}

/// Renders `row` as aligned `name: value` lines.
///
/// Empty cells print as `None` and numbers print verbatim. Text is cleaned,
/// wrapped to the configured line length and highlighted line by line, with
/// continuation lines aligned under the value column.
#[must_use]
pub fn render_row(row: Row<'_>, settings: &DisplaySettings, style: &HighlightStyle) -> Vec<String> {
    let headers: Vec<String> = row.iter().map(|(name, _)| name.to_string()).collect();
    let columns = relevant_columns(&headers, settings);

    let name_width = columns
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    let separator = " ".repeat(settings.name_value_separator_width);
    let indent = " ".repeat(name_width + 1);

    let mut lines = Vec::new();

    for (name, value) in row.iter() {
        if !columns.contains(&name) {
            continue;
        }

        let value_lines = match value {
            None => vec!["None".to_string()],
            Some(value) if is_numeric(value) => vec![value.to_string()],
            Some(value) => wrap_words(&clean_text(value), settings.line_length)
                .iter()
                .map(|line| highlight_keywords(line, &settings.keywords, style))
                .collect(),
        };

        for (index, value_line) in value_lines.iter().enumerate() {
            if index == 0 {
                lines.push(format!("{name:<name_width$}:{separator}{value_line}"));
            } else {
                lines.push(format!("{indent}{separator}{value_line}"));
            }
        }
    }

    lines
}

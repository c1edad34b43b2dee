//! Configuration paths and the validated, immutable run configuration.
//!
//! The YAML file is parsed into [`ConfigDefinition`] and then checked once
//! into a [`Config`], which the rest of the program borrows.

use crate::catalog::{IndexBase, LabelCatalog};
use crate::definitions::{ColorDefinition, ConfigDefinition};
use crate::error::{Error, Result};
use crate::render::DisplaySettings;

/// Default path for the labeler configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.csv-labeler/config.yml";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use csv_labeler_core::config::get_config_path;
///
/// let default_path = get_config_path(&None);
/// assert!(default_path.ends_with("config.yml"));
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Expands `~` in a path typed by the user.
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path.trim()).to_string()
}

/// Converts a configured separator such as `;` or `\t` to the byte the CSV reader expects.
///
/// # Errors
///
/// Returns [`Error::InvalidSeparator`] unless the value is exactly one ASCII character.
pub fn parse_separator(separator: &str) -> Result<u8> {
    let unescaped = match separator {
        "\\t" => "\t",
        other => other,
    };

    match unescaped.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(Error::InvalidSeparator(separator.to_string())),
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub separator: u8,
    pub catalog: LabelCatalog,
    pub index_base: IndexBase,
    pub display: DisplaySettings,
    pub foreground: ColorDefinition,
    pub background: ColorDefinition,
}

impl Config {
    /// Validates a parsed definition.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the separator is not a single ASCII character
    /// - the label list is empty, has case-insensitive duplicates or shadows a reserved option
    /// - the line length is zero
    pub fn from_definition(definition: ConfigDefinition) -> Result<Self> {
        let separator = parse_separator(&definition.csv.separator)?;
        let catalog = LabelCatalog::new(definition.classification.labels)?;

        if definition.general.line_length == 0 {
            return Err(Error::InvalidLineLength);
        }

        Ok(Self {
            separator,
            catalog,
            index_base: definition.classification.index_base,
            display: DisplaySettings {
                label_column: definition.csv.label_column,
                relevant_columns: definition.csv.relevant_columns,
                keywords: definition.classification.keywords,
                line_length: definition.general.line_length,
                name_value_separator_width: definition.general.name_value_separator_width,
            },
            foreground: definition.highlighting.foreground,
            background: definition.highlighting.background,
        })
    }

    #[must_use]
    pub fn label_column(&self) -> &str {
        &self.display.label_column
    }
}

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::catalog::IndexBase;

const DEFAULT_SEPARATOR: &str = ",";
const DEFAULT_LABEL_COLUMN: &str = "label";
const DEFAULT_LINE_LENGTH: usize = 80;
const DEFAULT_NAME_VALUE_SEPARATOR_WIDTH: usize = 4;

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_label_column() -> String {
    DEFAULT_LABEL_COLUMN.to_string()
}

fn default_line_length() -> usize {
    DEFAULT_LINE_LENGTH
}

fn default_name_value_separator_width() -> usize {
    DEFAULT_NAME_VALUE_SEPARATOR_WIDTH
}

#[derive(Deserialize, Debug, Clone)]
pub struct CsvDefinition {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default)]
    pub relevant_columns: Vec<String>,
}

impl Default for CsvDefinition {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            label_column: default_label_column(),
            relevant_columns: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ClassificationDefinition {
    pub labels: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub index_base: IndexBase,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Display for ColorDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.rgb, &self.ansi, &self.name) {
            (Some((r, g, b)), _, _) => write!(formatter, "rgb({r}, {g}, {b})"),
            (None, Some(ansi), _) => write!(formatter, "ansi({ansi})"),
            (None, None, Some(name)) => formatter.write_str(name),
            (None, None, None) => formatter.write_str("default"),
        }
    }
}

fn default_foreground() -> ColorDefinition {
    ColorDefinition::named("black")
}

fn default_background() -> ColorDefinition {
    ColorDefinition::named("yellow")
}

#[derive(Deserialize, Debug, Clone)]
pub struct HighlightingDefinition {
    #[serde(default = "default_foreground")]
    pub foreground: ColorDefinition,
    #[serde(default = "default_background")]
    pub background: ColorDefinition,
}

impl Default for HighlightingDefinition {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralDefinition {
    #[serde(default = "default_line_length")]
    pub line_length: usize,
    #[serde(default = "default_name_value_separator_width")]
    pub name_value_separator_width: usize,
}

impl Default for GeneralDefinition {
    fn default() -> Self {
        Self {
            line_length: default_line_length(),
            name_value_separator_width: default_name_value_separator_width(),
        }
    }
}

/// Shape of the YAML configuration file. Only `classification` is required.
#[derive(Deserialize, Debug, Clone)]
pub struct ConfigDefinition {
    #[serde(default)]
    pub csv: CsvDefinition,
    pub classification: ClassificationDefinition,
    #[serde(default)]
    pub highlighting: HighlightingDefinition,
    #[serde(default)]
    pub general: GeneralDefinition,
}

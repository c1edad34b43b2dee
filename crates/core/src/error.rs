use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} CSV file at `{}`: {}", .action, .path, .original)]
    Csv {
        action: String,
        path: String,
        original: csv::Error,
    },

    #[error("No labels were found in the classification config. Is `classification.labels` empty?")]
    EmptyLabelCatalog,

    #[error("Found a duplicate label (labels are compared case-insensitively): `{}`", .0)]
    DuplicateLabel(String),

    #[error("Label `{}` collides with the reserved option `{}`", .0, .1)]
    ReservedLabel(String, String),

    #[error("Invalid CSV separator `{}`: the separator must be a single ASCII character", .0)]
    InvalidSeparator(String),

    #[error("Relevant column `{}` does not exist in the CSV file", .0)]
    MissingRelevantColumn(String),

    #[error("Line length must be greater than zero")]
    InvalidLineLength,

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(action: String, path: String, original: csv::Error) -> Self {
        Self::Csv {
            action,
            path,
            original,
        }
    }
}

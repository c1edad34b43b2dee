//! Reading the configuration file from disk.

use std::fs::File;

use log::debug;

use crate::config::Config;
use crate::definitions::ConfigDefinition;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads and validates the configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configured values fail validation (see [`Config::from_definition`])
///
/// # Examples
///
/// ```no_run
/// use csv_labeler_core::file_handling::get_config;
///
/// let config = get_config("config.yml")?;
/// println!("Loaded {} labels", config.catalog.len());
/// # Ok::<(), csv_labeler_core::error::Error>(())
/// ```
pub fn get_config(config_path: &str) -> Result<Config> {
    let config_reader = get_reader("config", config_path)?;

    let definition: ConfigDefinition = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    debug!(
        "Read config at `{}` with {} labels",
        config_path,
        definition.classification.labels.len()
    );

    Config::from_definition(definition)
}

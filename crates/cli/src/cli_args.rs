//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the `csv-labeler` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use csv_labeler_cli::cli_args::Args;
///
/// let args = Args::parse_from(["csv-labeler", "transactions.csv", "--keep-existing"]);
/// assert!(args.keep_existing);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the labeler config file YAML.
    ///
    /// If not provided, defaults to `~/.csv-labeler/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// The CSV file to label.
    ///
    /// If not provided, the path is asked for interactively.
    #[arg(num_args(1))]
    pub csv_path: Option<String>,

    /// Keep labels that already exist and only ask for unlabeled rows.
    #[arg(long, short = 'k', action, conflicts_with = "overwrite_existing")]
    pub keep_existing: bool,

    /// Delete labels that already exist and ask for every row.
    #[arg(long, short = 'o', action)]
    pub overwrite_existing: bool,

    /// Print the labels matching TEXT, one per line, and exit.
    ///
    /// Meant to be called from shell completion scripts.
    #[arg(long, value_name = "TEXT")]
    pub complete: Option<String>,
}

impl Args {
    /// The keep/overwrite decision given on the command line, if any.
    #[must_use]
    pub fn existing_label_choice(&self) -> Option<bool> {
        match (self.keep_existing, self.overwrite_existing) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

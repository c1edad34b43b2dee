//! CSV Labeler CLI Library
//!
//! This crate provides the interactive front end of csv-labeler, a tool that
//! walks through the rows of a CSV file and asks for a label for each one.
//!
//! # Key Features
//!
//! - **Flexible Label Input**: Labels can be given by name, by a unique part of the name or by index
//! - **Keyword Highlighting**: Configured keywords are colored in the displayed row
//! - **Resumable Sessions**: Existing labels can be kept so only unlabeled rows are asked
//! - **Safe Cancellation**: Canceling asks once whether the labels so far should be saved
//!
//! # Architecture
//!
//! - [`app`]: One labeling session from config to saved file
//! - [`labeling`]: The row loop
//! - [`classification`]: Turning typed input into a label
//! - [`console`]: Terminal I/O behind a trait, with a scripted implementation for tests
//!
//! # Examples
//!
//! ```bash
//! # Ask for the file interactively
//! csv-labeler
//!
//! # Label a file, keeping labels that already exist
//! csv-labeler --keep-existing ~/Downloads/transactions.csv
//!
//! # Print the labels matching "mi", one per line
//! csv-labeler --complete mi
//! ```

pub mod app;
pub mod classification;
pub mod cli_args;
pub mod colors;
pub mod completion;
pub mod console;
pub mod input;
pub mod labeling;

//! CSV Labeler Core Library
//!
//! This crate provides the terminal-independent parts of csv-labeler, a tool
//! for assigning a category label to every row of a delimited text file.
//!
//! # Key Features
//!
//! - **Label Catalog**: Ordered, case-insensitively unique labels with exact,
//!   partial and index based lookup
//! - **Keyword Highlighting**: Word based marking of configured keywords
//! - **Row Rendering**: Aligned, wrapped display of the relevant fields of a row
//! - **Table I/O**: Loading and saving delimited files with a configurable separator
//! - **Configuration**: YAML configuration parsed once into an immutable value
//! - **Error Handling**: One error type for all configuration and data failures
//!
//! # Examples
//!
//! Resolving a typed fragment against the catalog:
//!
//! ```
//! use csv_labeler_core::catalog::LabelCatalog;
//!
//! let catalog = LabelCatalog::new(["Shopping", "Food", "Shoes", "Car"])?;
//! assert_eq!(catalog.resolve_partial("shop"), vec!["Shopping"]);
//! assert_eq!(catalog.resolve_partial("sh"), vec!["Shopping", "Shoes"]);
//! # Ok::<(), csv_labeler_core::error::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod highlight;
pub mod render;
pub mod table;

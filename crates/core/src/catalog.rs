//! The label catalog and the matching rules used to resolve user input.
//!
//! Labels are compared case-insensitively but always handed back in the
//! spelling they have in the configuration. Every label also has a 1-based
//! position which the prompt shows next to it and accepts as a shorthand.

use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Label written for rows flagged for later re-review.
pub const REASSIGNMENT_LABEL: &str = "Umbuchung";

/// Options the prompt accepts besides the catalog labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservedOption {
    Reassignment,
    Cancel,
}

impl ReservedOption {
    pub const ALL: [ReservedOption; 2] = [ReservedOption::Reassignment, ReservedOption::Cancel];

    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            ReservedOption::Reassignment => REASSIGNMENT_LABEL,
            ReservedOption::Cancel => "Cancel Input",
        }
    }

    #[must_use]
    pub fn shortcut(self) -> &'static str {
        match self {
            ReservedOption::Reassignment => "u",
            ReservedOption::Cancel => "q",
        }
    }

    /// True if `input` is the full phrase or the shortcut, ignoring case.
    #[must_use]
    pub fn matches(self, input: &str) -> bool {
        let folded = fold(input);
        folded == fold(self.phrase()) || folded == self.shortcut()
    }
}

/// Numbering base used to list labels and to parse index shorthand.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    #[default]
    Hex,
    Decimal,
}

impl IndexBase {
    #[must_use]
    pub fn format(self, position: usize) -> String {
        match self {
            IndexBase::Hex => format!("{position:x}"),
            IndexBase::Decimal => position.to_string(),
        }
    }

    /// Parses a position typed by the user. Hex input may carry a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `input` is not a number in this base.
    pub fn parse(self, input: &str) -> std::result::Result<usize, ParseIntError> {
        let input = input.trim();
        match self {
            IndexBase::Hex => {
                let digits = input
                    .strip_prefix("0x")
                    .or_else(|| input.strip_prefix("0X"))
                    .unwrap_or(input);
                usize::from_str_radix(digits, 16)
            }
            IndexBase::Decimal => input.parse::<usize>(),
        }
    }
}

impl Display for IndexBase {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexBase::Hex => formatter.write_str("hex"),
            IndexBase::Decimal => formatter.write_str("decimal"),
        }
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Ordered, case-insensitively unique list of labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCatalog {
    // folded spelling -> configured spelling
    labels: IndexMap<String, String>,
}

impl LabelCatalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `labels` is empty
    /// - two labels are equal when case is ignored
    /// - a label equals a reserved phrase or shortcut, which would hide that option
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = IndexMap::new();

        for label in labels {
            let label = label.into();

            for reserved in ReservedOption::ALL {
                if reserved.matches(&label) {
                    return Err(Error::ReservedLabel(label, reserved.phrase().to_string()));
                }
            }

            if catalog.insert(fold(&label), label.clone()).is_some() {
                return Err(Error::DuplicateLabel(label));
            }
        }

        if catalog.is_empty() {
            return Err(Error::EmptyLabelCatalog);
        }

        Ok(Self { labels: catalog })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(String::as_str)
    }

    /// Label at a 1-based `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        self.labels.get_index(index).map(|(_, label)| label.as_str())
    }

    /// Canonical spelling of `input` if it names a label exactly, ignoring case.
    #[must_use]
    pub fn resolve_exact(&self, input: &str) -> Option<&str> {
        self.labels.get(&fold(input)).map(String::as_str)
    }

    /// Labels consistent with a typed fragment. See [`resolve_partial`].
    #[must_use]
    pub fn resolve_partial(&self, substring: &str) -> Vec<&str> {
        if let Some(exact) = self.resolve_exact(substring) {
            return vec![exact];
        }

        let needle = fold(substring);
        self.labels
            .iter()
            .filter(|(folded, _)| folded.contains(&needle))
            .map(|(_, label)| label.as_str())
            .collect()
    }

    /// Label addressed by an index typed in `base`, if it is within `[1, len]`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `input` is not a number in `base`.
    pub fn resolve_index(
        &self,
        input: &str,
        base: IndexBase,
    ) -> std::result::Result<Option<&str>, ParseIntError> {
        let position = base.parse(input)?;
        Ok(self.get(position))
    }
}

/// Returns every label containing `substring`, ignoring case, in list order.
///
/// A label that equals `substring` outright wins over all broader matches and
/// is returned alone. An empty result means nothing matched.
pub fn resolve_partial<'a, S: AsRef<str>>(substring: &str, labels: &'a [S]) -> Vec<&'a str> {
    let needle = fold(substring);

    if let Some(exact) = labels
        .iter()
        .map(AsRef::as_ref)
        .find(|label| fold(label) == needle)
    {
        return vec![exact];
    }

    labels
        .iter()
        .map(AsRef::as_ref)
        .filter(|label| fold(label).contains(&needle))
        .collect()
}

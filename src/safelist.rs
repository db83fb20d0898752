//! Class names force-retained through dead-code elimination.
//!
//! Classes assembled at render time by string concatenation never appear
//! verbatim in scanned sources, so the build tool's purge step would drop
//! them. The safelist enumerates them explicitly.

use serde::{Deserialize, Serialize};

use crate::value::is_valid_class_name;

/// A flat ordered list of class-name literals the build tool must keep.
///
/// Order is irrelevant to correctness but preserved for readability.
/// Duplicates are harmless no-ops: they are kept verbatim and
/// [`contains`](Self::contains) has set semantics.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::Safelist;
///
/// let safelist = Safelist::new()
///     .add("hover:bg-blue-700")
///     .add("rounded-lg");
///
/// assert!(safelist.contains("hover:bg-blue-700"));
/// assert!(!safelist.contains("bg-blue-700"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Safelist {
    entries: Vec<String>,
}

impl Safelist {
    /// Creates an empty safelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one class name, returning the updated safelist for chaining.
    pub fn add(mut self, class: impl Into<String>) -> Self {
        self.entries.push(class.into());
        self
    }

    /// Adds a batch of class names in order.
    pub fn extend<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if the class name is safelisted.
    pub fn contains(&self, class: &str) -> bool {
        self.entries.iter().any(|entry| entry == class)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Validates that every entry is a plausible class selector.
    ///
    /// Entries for classes never actually emitted anywhere are dead weight
    /// but not invalid; only malformed names are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`SafelistError`] in declaration order.
    pub fn validate(&self) -> Result<(), SafelistError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.is_empty() {
                return Err(SafelistError::EmptyEntry { index });
            }
            if !is_valid_class_name(entry) {
                let ch = entry
                    .chars()
                    .find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
                    .unwrap_or(':');
                return Err(SafelistError::InvalidCharacter {
                    entry: entry.clone(),
                    ch,
                });
            }
        }
        Ok(())
    }
}

/// Error returned when safelist validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafelistError {
    /// An entry is the empty string
    EmptyEntry { index: usize },
    /// An entry carries a character not valid in a class selector
    InvalidCharacter { entry: String, ch: char },
}

impl std::fmt::Display for SafelistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafelistError::EmptyEntry { index } => {
                write!(f, "safelist entry {} is empty", index)
            }
            SafelistError::InvalidCharacter { entry, ch } => {
                write!(
                    f,
                    "safelist entry '{}' contains invalid character '{}'",
                    entry, ch
                )
            }
        }
    }
}

impl std::error::Error for SafelistError {}

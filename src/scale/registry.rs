//! The ordered token registry.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ScaleError;
use crate::value::TokenKind;

/// An insertion-ordered mapping from variant name to a literal CSS value.
///
/// A scale is one category of the token table: spacing steps, font sizes,
/// radii, and so on. Entries keep declaration order so the serialized object
/// reads the way it was written. Values are immutable once added; there are
/// no update or remove operations, the whole table is replaced on edit.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::{Scale, TokenKind};
///
/// let spacing = Scale::new()
///     .add("xs", "0.25rem")
///     .add("sm", "0.5rem")
///     .add("md", "1rem");
///
/// assert_eq!(spacing.get("md"), Some("1rem"));
/// assert!(spacing.validate("spacing", TokenKind::Length).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scale {
    entries: Vec<(String, String)>,
}

impl Scale {
    /// Creates an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, returning the updated scale for chaining.
    ///
    /// Adding never fails; a duplicate name is kept and reported later by
    /// [`validate`](Self::validate).
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Looks up a variant by name. The first declaration wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the scale declares the given variant.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of declared entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates variant names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Validates the scale against a value kind.
    ///
    /// Checks that every variant name is unique and that every value is a
    /// well-formed literal of `kind`. The scale name only labels errors.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScaleError`] encountered in declaration order.
    pub fn validate(&self, scale: &str, kind: TokenKind) -> Result<(), ScaleError> {
        let mut seen = HashSet::new();
        for (key, value) in &self.entries {
            if !seen.insert(key.as_str()) {
                return Err(ScaleError::DuplicateKey {
                    scale: scale.to_string(),
                    key: key.clone(),
                });
            }
            if !kind.validates(value) {
                return Err(ScaleError::InvalidValue {
                    scale: scale.to_string(),
                    key: key.clone(),
                    value: value.clone(),
                    kind,
                });
            }
        }
        Ok(())
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = Scale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variant names to CSS literal strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scale, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(Scale { entries })
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

//! Color roles and their shade ramps.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scale::{Scale, ScaleError};
use crate::value::TokenKind;

/// Shade variants for one color role.
///
/// A ramp maps variant names (`DEFAULT`, `light`, `dark`, `bg`, ...) to hex
/// colors. The `DEFAULT` variant is the shade the bare class name resolves
/// to; the others become suffixed class names.
pub type ColorRamp = Scale;

/// The role-to-ramp mapping serialized under the `colors` key.
///
/// Roles are semantic (`mtz-primary`, `mtz-error`, ...) and each carries its
/// own ramp. Declaration order is preserved.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::{ColorRamp, Palette};
///
/// let palette = Palette::new().add(
///     "mtz-error",
///     ColorRamp::new()
///         .add("DEFAULT", "#b91c1c")
///         .add("light", "#fca5a5"),
/// );
///
/// let ramp = palette.ramp("mtz-error").unwrap();
/// assert_eq!(ramp.get("DEFAULT"), Some("#b91c1c"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    ramps: Vec<(String, ColorRamp)>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color role, returning the updated palette for chaining.
    pub fn add(mut self, role: impl Into<String>, ramp: ColorRamp) -> Self {
        self.ramps.push((role.into(), ramp));
        self
    }

    /// Looks up a role's ramp. The first declaration wins.
    pub fn ramp(&self, role: &str) -> Option<&ColorRamp> {
        self.ramps.iter().find(|(r, _)| r == role).map(|(_, ramp)| ramp)
    }

    /// Returns `true` if the palette declares the given role.
    pub fn has(&self, role: &str) -> bool {
        self.ramp(role).is_some()
    }

    /// Number of declared roles.
    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    /// Returns `true` if no roles are declared.
    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    /// Iterates role names in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.ramps.iter().map(|(r, _)| r.as_str())
    }

    /// Iterates `(role, ramp)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorRamp)> {
        self.ramps.iter().map(|(r, ramp)| (r.as_str(), ramp))
    }

    /// Validates role uniqueness and every ramp's hex values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScaleError`]; duplicate roles are reported
    /// against the `colors` category, ramp defects against the role name.
    pub fn validate(&self) -> Result<(), ScaleError> {
        let mut seen = HashSet::new();
        for (role, ramp) in &self.ramps {
            if !seen.insert(role.as_str()) {
                return Err(ScaleError::DuplicateKey {
                    scale: "colors".to_string(),
                    key: role.clone(),
                });
            }
            ramp.validate(role, TokenKind::Color)?;
        }
        Ok(())
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ramps.len()))?;
        for (role, ramp) in &self.ramps {
            map.serialize_entry(role, ramp)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = Palette;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of color roles to shade ramps")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Palette, A::Error> {
                let mut ramps = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((role, ramp)) = access.next_entry::<String, ColorRamp>()? {
                    ramps.push((role, ramp));
                }
                Ok(Palette { ramps })
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

//! The top-level build-configuration object.
//!
//! This is the shape the external build tool reads: content globs to scan,
//! the token table under `theme.extend`, a plugin list, and the purge
//! safelist. The struct serializes to exactly that object and back.

use serde::{Deserialize, Serialize};

use crate::safelist::{Safelist, SafelistError};
use crate::scale::ScaleError;
use crate::theme::ThemeExtension;

/// The complete configuration consumed by the external build tool.
///
/// Constructed once, read during a build pass, discarded. There are no
/// update operations; the table is replaced wholesale on edit, never
/// patched at runtime.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::default_config;
///
/// let config = default_config();
/// assert!(config.validate().is_ok());
/// assert!(config.content.iter().any(|glob| glob == "./src/**/*.clj"));
/// assert!(config.safelist.contains("hover:bg-blue-700"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Glob patterns for the sources the tool scans for class usage.
    pub content: Vec<String>,
    /// The token table, merged additively over the tool's defaults.
    pub theme: ThemeConfig,
    /// Build tool plugins. Empty here.
    pub plugins: Vec<String>,
    /// Class names retained regardless of static usage analysis.
    pub safelist: Safelist,
}

/// The `theme` section; tokens extend the defaults rather than replace them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub extend: ThemeExtension,
}

impl BuildConfig {
    /// Resolves a `(category, variant)` token from the table.
    ///
    /// Convenience passthrough to [`ThemeExtension::resolve`].
    pub fn resolve(&self, category: &str, key: &str) -> Option<&str> {
        self.theme.extend.resolve(category, key)
    }

    /// Validates the token table and the safelist.
    ///
    /// # Errors
    ///
    /// Returns the first defect found, wrapped in [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.extend.validate()?;
        self.safelist.validate()?;
        Ok(())
    }
}

/// Error returned when configuration validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A token category failed validation
    Scale(ScaleError),
    /// The safelist failed validation
    Safelist(SafelistError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Scale(err) => write!(f, "invalid token table: {}", err),
            ConfigError::Safelist(err) => write!(f, "invalid safelist: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Scale(err) => Some(err),
            ConfigError::Safelist(err) => Some(err),
        }
    }
}

impl From<ScaleError> for ConfigError {
    fn from(err: ScaleError) -> Self {
        ConfigError::Scale(err)
    }
}

impl From<SafelistError> for ConfigError {
    fn from(err: SafelistError) -> Self {
        ConfigError::Safelist(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;
    use crate::theme::{ColorRamp, Palette};

    fn minimal_config() -> BuildConfig {
        BuildConfig {
            content: vec!["./src/**/*.html".to_string()],
            theme: ThemeConfig {
                extend: ThemeExtension {
                    colors: Palette::new()
                        .add("mtz-primary", ColorRamp::new().add("DEFAULT", "#2563eb")),
                    spacing: Scale::new().add("md", "1rem"),
                    ..ThemeExtension::default()
                },
            },
            plugins: Vec::new(),
            safelist: Safelist::new().add("p-4"),
        }
    }

    #[test]
    fn test_config_validate_ok() {
        assert!(minimal_config().validate().is_ok());
    }

    #[test]
    fn test_config_resolve_passthrough() {
        let config = minimal_config();
        assert_eq!(config.resolve("spacing", "md"), Some("1rem"));
        assert_eq!(config.resolve("mtz-primary", "DEFAULT"), Some("#2563eb"));
    }

    #[test]
    fn test_config_validate_surfaces_scale_error() {
        let mut config = minimal_config();
        config.theme.extend.spacing = Scale::new().add("md", "wide");
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Scale(ScaleError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_config_validate_surfaces_safelist_error() {
        let mut config = minimal_config();
        config.safelist = Safelist::new().add("");
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Safelist(SafelistError::EmptyEntry { index: 0 })
        ));
    }

    #[test]
    fn test_config_serialized_shape() {
        let json = serde_json::to_value(minimal_config()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("content"));
        assert!(obj.contains_key("theme"));
        assert!(obj.contains_key("plugins"));
        assert!(obj.contains_key("safelist"));
        assert!(obj["theme"].as_object().unwrap().contains_key("extend"));
        assert_eq!(obj["plugins"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = minimal_config();
        let json = serde_json::to_string(&config).unwrap();
        let back: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_error_display_prefixes() {
        let err = ConfigError::Scale(ScaleError::DuplicateKey {
            scale: "spacing".to_string(),
            key: "md".to_string(),
        });
        assert!(err.to_string().starts_with("invalid token table"));
    }
}

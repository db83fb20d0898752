//! The `theme.extend` token table.

use serde::{Deserialize, Serialize};

use super::palette::Palette;
use crate::scale::{Scale, ScaleError};
use crate::value::TokenKind;

/// The token categories merged additively over the build tool's defaults.
///
/// Field names serialize as the configuration keys the external tool
/// recognizes (`fontSize`, `borderRadius`, ...). Categories are pure lookup
/// structures; there are no operations beyond read access and validation.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::default_config;
///
/// let theme = &default_config().theme.extend;
/// assert_eq!(theme.resolve("spacing", "md"), Some("1rem"));
/// assert_eq!(theme.resolve("mtz-error", "DEFAULT"), Some("#b91c1c"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    pub colors: Palette,
    pub font_size: Scale,
    pub spacing: Scale,
    pub border_radius: Scale,
    pub box_shadow: Scale,
    pub max_width: Scale,
    pub transition_duration: Scale,
    pub font_weight: Scale,
}

impl ThemeExtension {
    /// Looks up a value scale by its configuration key.
    pub fn scale(&self, category: &str) -> Option<&Scale> {
        match category {
            "fontSize" => Some(&self.font_size),
            "spacing" => Some(&self.spacing),
            "borderRadius" => Some(&self.border_radius),
            "boxShadow" => Some(&self.box_shadow),
            "maxWidth" => Some(&self.max_width),
            "transitionDuration" => Some(&self.transition_duration),
            "fontWeight" => Some(&self.font_weight),
            _ => None,
        }
    }

    /// Resolves a `(category, variant)` pair to its literal value.
    ///
    /// The category is either a scale key (`"spacing"`, `"fontSize"`, ...)
    /// or a color role (`"mtz-error"`), mirroring how the generated class
    /// names address tokens.
    pub fn resolve(&self, category: &str, key: &str) -> Option<&str> {
        if let Some(scale) = self.scale(category) {
            return scale.get(key);
        }
        self.colors.ramp(category).and_then(|ramp| ramp.get(key))
    }

    /// Validates every category of the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScaleError`]: a duplicate variant within a
    /// category, or a value that is not a well-formed literal of the
    /// category's kind.
    pub fn validate(&self) -> Result<(), ScaleError> {
        self.colors.validate()?;
        let checks: [(&str, &Scale, TokenKind); 7] = [
            ("fontSize", &self.font_size, TokenKind::Length),
            ("spacing", &self.spacing, TokenKind::Length),
            ("borderRadius", &self.border_radius, TokenKind::Length),
            ("boxShadow", &self.box_shadow, TokenKind::Shadow),
            ("maxWidth", &self.max_width, TokenKind::Length),
            ("transitionDuration", &self.transition_duration, TokenKind::Duration),
            ("fontWeight", &self.font_weight, TokenKind::Weight),
        ];
        for (category, scale, kind) in checks {
            scale.validate(category, kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorRamp;

    fn small_theme() -> ThemeExtension {
        ThemeExtension {
            colors: Palette::new().add(
                "mtz-primary",
                ColorRamp::new()
                    .add("DEFAULT", "#2563eb")
                    .add("dark", "#1d4ed8"),
            ),
            font_size: Scale::new().add("base", "1rem"),
            spacing: Scale::new().add("md", "1rem").add("lg", "1.5rem"),
            border_radius: Scale::new().add("full", "9999px"),
            box_shadow: Scale::new().add("none", "none"),
            max_width: Scale::new().add("prose", "65ch"),
            transition_duration: Scale::new().add("fast", "150ms"),
            font_weight: Scale::new().add("bold", "700"),
        }
    }

    #[test]
    fn test_resolve_scale_category() {
        let theme = small_theme();
        assert_eq!(theme.resolve("spacing", "md"), Some("1rem"));
        assert_eq!(theme.resolve("transitionDuration", "fast"), Some("150ms"));
    }

    #[test]
    fn test_resolve_color_role_category() {
        let theme = small_theme();
        assert_eq!(theme.resolve("mtz-primary", "DEFAULT"), Some("#2563eb"));
        assert_eq!(theme.resolve("mtz-primary", "dark"), Some("#1d4ed8"));
    }

    #[test]
    fn test_resolve_unknown() {
        let theme = small_theme();
        assert_eq!(theme.resolve("spacing", "missing"), None);
        assert_eq!(theme.resolve("zIndex", "10"), None);
        assert_eq!(theme.resolve("mtz-info", "DEFAULT"), None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(small_theme().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_category_name() {
        let mut theme = small_theme();
        theme.font_weight = Scale::new().add("bold", "heavy");
        let err = theme.validate().unwrap_err();
        assert!(matches!(
            err,
            ScaleError::InvalidValue { ref scale, .. } if scale == "fontWeight"
        ));
    }

    #[test]
    fn test_serializes_with_config_keys() {
        let json = serde_json::to_value(small_theme()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("colors"));
        assert!(obj.contains_key("fontSize"));
        assert!(obj.contains_key("borderRadius"));
        assert!(obj.contains_key("transitionDuration"));
        assert!(!obj.contains_key("font_size"));
    }

    #[test]
    fn test_round_trip() {
        let theme = small_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: ThemeExtension = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}

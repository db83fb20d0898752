//! Flattening the token table into CSS custom properties.

use serde::Serialize;

use crate::theme::ThemeExtension;

/// One `--name: value` pair of the custom-property view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

/// Flattens the token table into custom-property declarations.
///
/// Color roles flatten to `--{role}` for the `DEFAULT` variant and
/// `--{role}-{variant}` otherwise; value scales get a family prefix
/// (`--text-*`, `--spacing-*`, `--radius-*`, ...). Declaration order
/// follows the table.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::{default_config, flatten};
///
/// let vars = flatten(&default_config().theme.extend);
/// assert!(vars
///     .iter()
///     .any(|v| v.name == "--mtz-primary" && v.value == "#2563eb"));
/// ```
pub fn flatten(theme: &ThemeExtension) -> Vec<CssVariable> {
    let mut vars = Vec::new();

    for (role, ramp) in theme.colors.iter() {
        for (variant, value) in ramp.iter() {
            let name = if variant == "DEFAULT" {
                format!("--{}", role)
            } else {
                format!("--{}-{}", role, variant)
            };
            vars.push(CssVariable {
                name,
                value: value.to_string(),
            });
        }
    }

    let families = [
        ("text", &theme.font_size),
        ("spacing", &theme.spacing),
        ("radius", &theme.border_radius),
        ("shadow", &theme.box_shadow),
        ("max-width", &theme.max_width),
        ("duration", &theme.transition_duration),
        ("font-weight", &theme.font_weight),
    ];
    for (family, scale) in families {
        for (key, value) in scale.iter() {
            vars.push(CssVariable {
                name: format!("--{}-{}", family, key),
                value: value.to_string(),
            });
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;
    use crate::theme::{ColorRamp, Palette};

    fn theme() -> ThemeExtension {
        ThemeExtension {
            colors: Palette::new().add(
                "mtz-error",
                ColorRamp::new()
                    .add("DEFAULT", "#b91c1c")
                    .add("bg", "#fef2f2"),
            ),
            spacing: Scale::new().add("md", "1rem"),
            transition_duration: Scale::new().add("fast", "150ms"),
            ..ThemeExtension::default()
        }
    }

    #[test]
    fn test_flatten_default_variant_drops_suffix() {
        let vars = flatten(&theme());
        assert!(vars
            .iter()
            .any(|v| v.name == "--mtz-error" && v.value == "#b91c1c"));
        assert!(vars
            .iter()
            .any(|v| v.name == "--mtz-error-bg" && v.value == "#fef2f2"));
    }

    #[test]
    fn test_flatten_scale_families() {
        let vars = flatten(&theme());
        assert!(vars
            .iter()
            .any(|v| v.name == "--spacing-md" && v.value == "1rem"));
        assert!(vars
            .iter()
            .any(|v| v.name == "--duration-fast" && v.value == "150ms"));
    }

    #[test]
    fn test_flatten_colors_come_first() {
        let vars = flatten(&theme());
        assert_eq!(vars[0].name, "--mtz-error");
    }

    #[test]
    fn test_flatten_empty_theme() {
        assert!(flatten(&ThemeExtension::default()).is_empty());
    }
}

//! Pre-compiled emission templates.

use minijinja::{context, Environment};

use super::vars::{flatten, CssVariable};
use crate::config::{BuildConfig, ConfigError};

/// The JS module the external build tool loads as its configuration.
const CONFIG_JS_TEMPLATE: &str = "\
/** @type {import('tailwindcss').Config} */
module.exports = {{ config }};
";

/// The `:root` block declaring every token as a custom property.
const TOKENS_CSS_TEMPLATE: &str = "\
:root {
{%- for var in variables %}
  {{ var.name }}: {{ var.value }};
{%- endfor %}
}
";

/// An emitter with pre-registered output templates.
///
/// Construction validates the configuration first, so render calls cannot
/// emit a malformed table. Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::{default_config, Emitter};
///
/// let emitter = Emitter::new(default_config()).unwrap();
/// let js = emitter.config_js().unwrap();
/// assert!(js.starts_with("/** @type"));
///
/// let css = emitter.css_variables().unwrap();
/// assert!(css.contains("--spacing-md: 1rem;"));
/// ```
#[derive(Debug)]
pub struct Emitter {
    env: Environment<'static>,
    config_json: String,
    variables: Vec<CssVariable>,
}

impl Emitter {
    /// Creates an emitter for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or cannot be
    /// serialized.
    pub fn new(config: &BuildConfig) -> Result<Self, EmitError> {
        config.validate()?;

        let mut env = Environment::new();
        env.add_template("config.js", CONFIG_JS_TEMPLATE)?;
        env.add_template("tokens.css", TOKENS_CSS_TEMPLATE)?;

        Ok(Self {
            env,
            config_json: serde_json::to_string_pretty(config)?,
            variables: flatten(&config.theme.extend),
        })
    }

    /// Renders the configuration as the JS module the build tool reads.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn config_js(&self) -> Result<String, EmitError> {
        let tmpl = self.env.get_template("config.js")?;
        Ok(tmpl.render(context! { config => self.config_json })?)
    }

    /// Renders the token table as a `:root` custom-property block.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn css_variables(&self) -> Result<String, EmitError> {
        let tmpl = self.env.get_template("tokens.css")?;
        Ok(tmpl.render(context! { variables => self.variables })?)
    }
}

/// Error returned when emission fails.
#[derive(Debug)]
pub enum EmitError {
    /// The configuration failed validation
    Invalid(ConfigError),
    /// A template failed to compile or render
    Template(minijinja::Error),
    /// The configuration could not be serialized
    Serialize(serde_json::Error),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::Invalid(err) => write!(f, "cannot emit invalid configuration: {}", err),
            EmitError::Template(err) => write!(f, "template error: {}", err),
            EmitError::Serialize(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Invalid(err) => Some(err),
            EmitError::Template(err) => Some(err),
            EmitError::Serialize(err) => Some(err),
        }
    }
}

impl From<ConfigError> for EmitError {
    fn from(err: ConfigError) -> Self {
        EmitError::Invalid(err)
    }
}

impl From<minijinja::Error> for EmitError {
    fn from(err: minijinja::Error) -> Self {
        EmitError::Template(err)
    }
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::safelist::Safelist;
    use crate::scale::Scale;
    use crate::theme::{ColorRamp, Palette, ThemeExtension};

    fn config() -> BuildConfig {
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
    fn test_config_js_shape() {
        let emitter = Emitter::new(&config()).unwrap();
        let js = emitter.config_js().unwrap();

        assert!(js.starts_with("/** @type {import('tailwindcss').Config} */\n"));
        assert!(js.contains("module.exports = {"));
        assert!(js.trim_end().ends_with("};"));
    }

    #[test]
    fn test_config_js_embeds_config_object() {
        let emitter = Emitter::new(&config()).unwrap();
        let js = emitter.config_js().unwrap();

        let json = js
            .split_once("module.exports = ")
            .map(|(_, rest)| rest.trim_end().trim_end_matches(';'))
            .unwrap();
        let parsed: BuildConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, config());
    }

    #[test]
    fn test_css_variables_block() {
        let emitter = Emitter::new(&config()).unwrap();
        let css = emitter.css_variables().unwrap();

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --mtz-primary: #2563eb;\n"));
        assert!(css.contains("  --spacing-md: 1rem;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut bad = config();
        bad.theme.extend.spacing = Scale::new().add("md", "medium");

        let result = Emitter::new(&bad);
        assert!(matches!(result, Err(EmitError::Invalid(_))));
    }

    #[test]
    fn test_error_display() {
        let mut bad = config();
        bad.safelist = Safelist::new().add("");
        let err = Emitter::new(&bad).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }
}

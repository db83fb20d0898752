//! The shipped configuration: every design constant of the site.
//!
//! Constructed once behind a `Lazy` static and handed out by reference;
//! the table never changes during a build pass.

use once_cell::sync::Lazy;

use crate::config::{BuildConfig, ThemeConfig};
use crate::safelist::Safelist;
use crate::scale::Scale;
use crate::theme::{ColorRamp, Palette, ThemeExtension};

static DEFAULT_CONFIG: Lazy<BuildConfig> = Lazy::new(|| BuildConfig {
    content: vec![
        "./src/**/*.clj".to_string(),
        "./src/**/*.cljc".to_string(),
        "./resources/**/*.html".to_string(),
    ],
    theme: ThemeConfig {
        extend: default_theme(),
    },
    plugins: Vec::new(),
    safelist: default_safelist(),
});

/// Returns the site's build configuration.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::default_config;
///
/// let config = default_config();
/// assert_eq!(config.resolve("spacing", "md"), Some("1rem"));
/// ```
pub fn default_config() -> &'static BuildConfig {
    &DEFAULT_CONFIG
}

fn default_theme() -> ThemeExtension {
    ThemeExtension {
        colors: default_palette(),
        font_size: Scale::new()
            .add("xs", "0.75rem")
            .add("sm", "0.875rem")
            .add("base", "1rem")
            .add("lg", "1.125rem")
            .add("xl", "1.25rem")
            .add("2xl", "1.5rem")
            .add("3xl", "1.875rem")
            .add("4xl", "2.25rem")
            .add("5xl", "3rem")
            .add("6xl", "3.75rem"),
        spacing: Scale::new()
            .add("xs", "0.25rem")
            .add("sm", "0.5rem")
            .add("md", "1rem")
            .add("lg", "1.5rem")
            .add("xl", "2rem")
            .add("2xl", "3rem")
            .add("3xl", "4rem")
            .add("4xl", "6rem"),
        border_radius: Scale::new()
            .add("none", "0")
            .add("sm", "0.125rem")
            .add("md", "0.375rem")
            .add("lg", "0.5rem")
            .add("xl", "0.75rem")
            .add("full", "9999px"),
        box_shadow: Scale::new()
            .add("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)")
            .add(
                "md",
                "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            )
            .add(
                "lg",
                "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
            )
            .add(
                "xl",
                "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
            )
            .add("none", "none"),
        max_width: Scale::new()
            .add("4xl", "56rem")
            .add("6xl", "72rem")
            .add("7xl", "80rem")
            .add("prose", "65ch"),
        transition_duration: Scale::new()
            .add("fast", "150ms")
            .add("normal", "200ms")
            .add("slow", "300ms"),
        font_weight: Scale::new()
            .add("normal", "400")
            .add("medium", "500")
            .add("semibold", "600")
            .add("bold", "700")
            .add("extrabold", "800"),
    }
}

fn default_palette() -> Palette {
    Palette::new()
        .add(
            "mtz-primary",
            ColorRamp::new()
                .add("DEFAULT", "#2563eb")
                .add("light", "#dbeafe")
                .add("lighter", "#eff6ff")
                .add("dark", "#1d4ed8")
                .add("darker", "#1e40af"),
        )
        .add(
            "mtz-secondary",
            ColorRamp::new()
                .add("DEFAULT", "#4b5563")
                .add("light", "#e5e7eb")
                .add("lighter", "#f9fafb"),
        )
        .add(
            "mtz-success",
            ColorRamp::new()
                .add("DEFAULT", "#15803d")
                .add("light", "#bbf7d0")
                .add("bg", "#f0fdf4"),
        )
        .add(
            "mtz-error",
            ColorRamp::new()
                .add("DEFAULT", "#b91c1c")
                .add("light", "#fca5a5")
                .add("bg", "#fef2f2")
                .add("border", "#fecaca")
                .add("strong", "#dc2626"),
        )
        .add(
            "mtz-warning",
            ColorRamp::new()
                .add("DEFAULT", "#a16207")
                .add("light", "#fde047")
                .add("bg", "#fefce8")
                .add("dark", "#854d0e"),
        )
        .add(
            "mtz-info",
            ColorRamp::new()
                .add("DEFAULT", "#2563eb")
                .add("light", "#bfdbfe")
                .add("bg", "#eff6ff"),
        )
}

/// Base-scale steps the templates compose spacing classes from.
const SPACING_STEPS: &[&str] = &["1", "2", "4", "6", "8", "12", "16", "24"];

fn stepped<'a>(prefix: &'a str, steps: &'static [&'static str]) -> impl Iterator<Item = String> + 'a {
    steps.iter().map(move |step| format!("{}-{}", prefix, step))
}

fn default_safelist() -> Safelist {
    Safelist::new()
        // color classes composed from role names in templates
        .extend([
            "text-blue-600",
            "text-blue-700",
            "text-blue-800",
            "bg-blue-600",
            "bg-blue-700",
            "bg-white",
            "bg-gray-50",
            "bg-gray-100",
            "bg-red-50",
            "bg-green-50",
            "bg-yellow-50",
            "border-gray-200",
            "border-red-200",
            "border-green-200",
            "border-yellow-300",
            "hover:bg-blue-700",
            "hover:text-blue-700",
            "hover:text-blue-800",
            "hover:shadow-lg",
            "hover:shadow-xl",
        ])
        // spacing and margin utilities at every step the templates use
        .extend(stepped("px", SPACING_STEPS))
        .extend(stepped("py", SPACING_STEPS))
        .extend(stepped("p", SPACING_STEPS))
        .extend(stepped("mb", SPACING_STEPS))
        .extend(stepped("mt", SPACING_STEPS))
        .extend(stepped("gap", &["1", "2", "4", "6", "8"]))
        .extend(stepped(
            "rounded",
            &["none", "sm", "md", "lg", "xl", "full"],
        ))
        .extend(stepped("shadow", &["none", "sm", "md", "lg", "xl"]))
        .extend(stepped(
            "text",
            &["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"],
        ))
        .extend(stepped(
            "font",
            &["normal", "medium", "semibold", "bold", "extrabold"],
        ))
        .extend([
            "transition",
            "transition-all",
            "transition-colors",
            "transition-opacity",
            "transition-shadow",
            "transition-transform",
        ])
        .extend(stepped("duration", &["150", "200", "300"]))
}

//! Design-token tables and purge safelist for the Mount Zion utility CSS
//! build.
//!
//! The site's front-end is styled with utility classes compiled by an
//! external build tool. This crate owns the data that tool consumes: color
//! ramps for the semantic roles, the type scale, spacing, radii, shadows,
//! max widths, transition durations, font weights, the content globs to
//! scan, and the safelist of class names composed at render time that the
//! purge step must never drop.
//!
//! The configuration is static data with structural guarantees on top:
//! unique keys per category, well-formed CSS literals, and a lossless
//! round-trip through the build tool's object shape.
//!
//! # Example
//!
//! ```rust
//! use mtz_tokens::{default_config, Emitter};
//!
//! let config = default_config();
//! assert_eq!(config.resolve("mtz-error", "DEFAULT"), Some("#b91c1c"));
//! assert!(config.safelist.contains("hover:bg-blue-700"));
//!
//! // The file the build tool actually loads:
//! let js = Emitter::new(config).unwrap().config_js().unwrap();
//! assert!(js.contains("module.exports"));
//! ```

pub mod config;
pub mod defaults;
pub mod emit;
pub mod safelist;
pub mod scale;
pub mod theme;
pub mod value;

pub use config::{BuildConfig, ConfigError, ThemeConfig};
pub use defaults::default_config;
pub use emit::{flatten, CssVariable, EmitError, Emitter};
pub use safelist::{Safelist, SafelistError};
pub use scale::{Scale, ScaleError};
pub use theme::{ColorRamp, Palette, ThemeExtension};
pub use value::TokenKind;

//! The token table: color ramps plus the sibling value scales.
//!
//! This module provides:
//!
//! - [`ColorRamp`]: shade variants for one color role
//! - [`Palette`]: the role-to-ramp mapping under the `colors` key
//! - [`ThemeExtension`]: the eight token categories merged additively over
//!   the build tool's defaults
//!
//! Categories are siblings with no composition between them; the one read
//! operation is [`ThemeExtension::resolve`].

mod extension;
mod palette;

pub use extension::ThemeExtension;
pub use palette::{ColorRamp, Palette};

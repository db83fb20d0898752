//! Rendering the configuration for external consumers.
//!
//! The build tool loads the configuration as a JS module; design tools read
//! the same tokens as CSS custom properties. This module provides:
//!
//! - [`Emitter`]: pre-compiled templates for both outputs
//! - [`CssVariable`] and [`flatten`]: the ordered custom-property view
//! - [`EmitError`]: errors from validation, serialization, or rendering

mod emitter;
mod vars;

pub use emitter::{EmitError, Emitter};
pub use vars::{flatten, CssVariable};

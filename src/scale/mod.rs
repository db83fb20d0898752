//! Ordered token registries.
//!
//! This module provides the core lookup structure of the token table:
//!
//! - [`Scale`]: an insertion-ordered mapping from variant name to CSS literal
//! - [`ScaleError`]: errors from scale validation
//!
//! Scales are built fluently and validated before use; building never fails,
//! so data entry stays declarative.

mod error;
mod registry;

pub use error::ScaleError;
pub use registry::Scale;

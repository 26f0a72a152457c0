//! Style primitives resolved by themes.
//!
//! This module provides:
//!
//! - [`Definition`]: An immutable foreground/background/highlight/underline value
//! - [`DefinitionError`]: Errors from definition construction
//! - [`parse_color`] and [`color_name`]: Mapping between color names and the palette
//!
//! Colors are [`console::Color`] values; this crate never writes escape
//! sequences itself.

mod color;
mod definition;
mod error;

pub use color::{color_name, parse_color};
pub use definition::Definition;
pub use error::DefinitionError;

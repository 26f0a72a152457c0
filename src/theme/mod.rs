//! Theme system mapping UI regions to style definitions.
//!
//! This module provides:
//!
//! - [`Category`]: The closed set of style slots
//! - [`Theme`]: Category lookup with a guaranteed fallback, plus the
//!   process-wide default theme
//! - [`ThemeBuilder`]: Construction-time assembly of theme variants
//! - [`ThemeSpec`]: Serializable overrides applied through the builder
//! - [`AdaptiveTheme`] and [`ThemeChoice`]: Light/dark pairs and theme
//!   selection at draw time
//!
//! Lookups never fail. A category without an explicit definition resolves
//! to the theme's fallback.

mod adaptive;
mod builder;
mod category;
mod choice;
mod spec;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, AdaptiveTheme, ColorMode};
pub use builder::ThemeBuilder;
pub use category::{Category, UnknownCategory};
pub use choice::ThemeChoice;
pub use spec::{DefinitionSpec, ThemeError, ThemeSpec};
pub use theme::Theme;

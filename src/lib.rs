//! # tui-theme
//!
//! Style resolution for terminal UI widgets.
//!
//! Widget drawing code asks a [`Theme`] for the [`Definition`] of a
//! [`Category`] (dialog area, border, selected list item, focused text
//! box, ...) instead of hard-coding colors. Every category resolves to a
//! definition: either the one configured for it or the theme's fallback.
//!
//! ```rust
//! use console::Color;
//! use tui_theme::{Category, Definition, Theme};
//!
//! let theme = Theme::default_theme()
//!     .to_builder()
//!     .set(
//!         Category::TextboxFocused,
//!         Definition::new(Color::Green, Color::Black).underlined(true),
//!     )
//!     .build();
//!
//! let focused = theme.get_definition(Category::TextboxFocused);
//! assert_eq!(focused.foreground(), Color::Green);
//! assert!(focused.is_underlined());
//!
//! // Unchanged categories keep the base palette.
//! let item = theme.get_definition(Category::ListItem);
//! assert_eq!(item.background(), Color::White);
//! ```
//!
//! Themes are immutable once built and can be shared between threads. The
//! process-wide [`Theme::default_theme`] is initialized on first use.

pub mod style;
pub mod theme;

pub use console::Color;
pub use style::{color_name, parse_color, Definition, DefinitionError};
pub use theme::{
    detect_color_mode, set_theme_detector, AdaptiveTheme, Category, ColorMode, DefinitionSpec,
    Theme, ThemeBuilder, ThemeChoice, ThemeError, ThemeSpec, UnknownCategory,
};

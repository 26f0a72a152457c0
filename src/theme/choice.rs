//! Theme selection for rendering.

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;

/// Reference to either a fixed theme or an adaptive theme.
///
/// Drawing code can accept `impl Into<ThemeChoice>` and call
/// [`resolve`](ThemeChoice::resolve) right before it looks up definitions.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A fixed theme that doesn't change based on color mode.
    Theme(&'a Theme),
    /// An adaptive theme that selects light/dark based on OS settings.
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete theme.
    ///
    /// Adaptive themes detect the current color mode on every call.
    pub fn resolve(&self) -> &'a Theme {
        match *self {
            ThemeChoice::Theme(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl Default for ThemeChoice<'static> {
    fn default() -> Self {
        ThemeChoice::Theme(Theme::default_theme())
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

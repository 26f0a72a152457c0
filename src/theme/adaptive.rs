//! Adaptive themes that respond to system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of themes selected by the user's display mode.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use tui_theme::{AdaptiveTheme, Category, ColorMode, Definition, Theme};
///
/// let light = Theme::default_theme().clone();
/// let dark = Theme::default_theme()
///     .to_builder()
///     .fallback(Definition::new(Color::White, Color::Black))
///     .unset(Category::DialogArea)
///     .build();
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let area = adaptive
///     .resolve_for(ColorMode::Dark)
///     .get_definition(Category::DialogArea);
/// assert_eq!(area.background(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for the current color mode.
    pub fn resolve(&self) -> &Theme {
        self.resolve_for(detect_color_mode())
    }

    /// Returns the variant for `mode`.
    pub fn resolve_for(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mode = detector();
    tracing::debug!(?mode, "color mode detected");
    mode
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Definition};
    use console::Color;
    use serial_test::serial;

    fn pair() -> AdaptiveTheme {
        let light = Theme::default_theme().clone();
        let dark = Theme::default_theme()
            .to_builder()
            .set(
                Category::ScreenBackground,
                Definition::new(Color::White, Color::Black),
            )
            .build();
        AdaptiveTheme::new(light, dark)
    }

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let adaptive = pair();

        set_theme_detector(|| ColorMode::Dark);
        let background = adaptive
            .resolve()
            .get_definition(Category::ScreenBackground)
            .background();
        assert_eq!(background, Color::Black);

        set_theme_detector(|| ColorMode::Light);
        let background = adaptive
            .resolve()
            .get_definition(Category::ScreenBackground)
            .background();
        assert_eq!(background, Color::Blue);
    }

    #[test]
    fn test_resolve_for_explicit_mode() {
        let adaptive = pair();
        assert_eq!(
            adaptive
                .resolve_for(ColorMode::Dark)
                .get_definition(Category::ScreenBackground)
                .foreground(),
            Color::White
        );
        assert_eq!(
            adaptive
                .resolve_for(ColorMode::Light)
                .get_definition(Category::ScreenBackground)
                .foreground(),
            Color::Cyan
        );
    }
}

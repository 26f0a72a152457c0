//! The immutable style value resolved for a category.

use console::{Color, Style};

use super::color::parse_color;
use super::error::DefinitionError;

/// Foreground color, background color and the two rendering flags for one
/// UI region.
///
/// A `Definition` is never mutated once it is placed in a theme. Themes
/// hold definitions behind an [`Arc`](std::sync::Arc) so several categories
/// can point at the same instance; use [`Arc::ptr_eq`](std::sync::Arc::ptr_eq)
/// when identity matters and `==` when only the fields do.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use tui_theme::Definition;
///
/// let focused = Definition::new(Color::Yellow, Color::Blue).highlighted(true);
/// assert!(focused.is_highlighted());
/// assert!(!focused.is_underlined());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    foreground: Color,
    background: Color,
    highlighted: bool,
    underlined: bool,
}

impl Definition {
    /// Creates a definition that is neither highlighted nor underlined.
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            highlighted: false,
            underlined: false,
        }
    }

    /// Creates a definition from colors that may be absent.
    ///
    /// Fails with [`DefinitionError::MissingForeground`] or
    /// [`DefinitionError::MissingBackground`]; the foreground is checked first.
    pub fn try_new(
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> Result<Self, DefinitionError> {
        let foreground = foreground.ok_or(DefinitionError::MissingForeground)?;
        let background = background.ok_or(DefinitionError::MissingBackground)?;
        Ok(Self::new(foreground, background))
    }

    /// Creates a definition from color names, see [`parse_color`].
    pub fn from_names(foreground: &str, background: &str) -> Result<Self, DefinitionError> {
        let resolve = |name: &str| {
            parse_color(name).ok_or_else(|| DefinitionError::UnknownColor(name.to_string()))
        };
        Ok(Self::new(resolve(foreground)?, resolve(background)?))
    }

    /// Sets the highlighted flag.
    pub const fn highlighted(self, highlighted: bool) -> Self {
        Self {
            highlighted,
            ..self
        }
    }

    /// Sets the underlined flag.
    pub const fn underlined(self, underlined: bool) -> Self {
        Self { underlined, ..self }
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_underlined(&self) -> bool {
        self.underlined
    }

    /// Converts the definition into a [`console::Style`].
    ///
    /// Highlighted maps to bold, which most terminals render with the
    /// bright variant of the foreground color.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new().fg(self.foreground).bg(self.background);
        if self.highlighted {
            style = style.bold();
        }
        if self.underlined {
            style = style.underlined();
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_flags_to_false() {
        let def = Definition::new(Color::Black, Color::White);
        assert_eq!(def.foreground(), Color::Black);
        assert_eq!(def.background(), Color::White);
        assert!(!def.is_highlighted());
        assert!(!def.is_underlined());
    }

    #[test]
    fn test_flag_setters() {
        let def = Definition::new(Color::Green, Color::Black)
            .highlighted(false)
            .underlined(true);
        assert!(!def.is_highlighted());
        assert!(def.is_underlined());
    }

    #[test]
    fn test_try_new_rejects_missing_foreground() {
        let err = Definition::try_new(None, Some(Color::White)).unwrap_err();
        assert_eq!(err, DefinitionError::MissingForeground);
    }

    #[test]
    fn test_try_new_rejects_missing_background() {
        let err = Definition::try_new(Some(Color::Black), None).unwrap_err();
        assert_eq!(err, DefinitionError::MissingBackground);
    }

    #[test]
    fn test_try_new_checks_foreground_first() {
        let err = Definition::try_new(None, None).unwrap_err();
        assert_eq!(err, DefinitionError::MissingForeground);
    }

    #[test]
    fn test_try_new_valid() {
        let def = Definition::try_new(Some(Color::Cyan), Some(Color::Blue)).unwrap();
        assert_eq!(def, Definition::new(Color::Cyan, Color::Blue));
        assert!(!def.is_highlighted());
        assert!(!def.is_underlined());
    }

    #[test]
    fn test_from_names() {
        let def = Definition::from_names("white", "blue").unwrap();
        assert_eq!(def.foreground(), Color::White);
        assert_eq!(def.background(), Color::Blue);
    }

    #[test]
    fn test_from_names_unknown_color() {
        let err = Definition::from_names("white", "mauve").unwrap_err();
        assert_eq!(err, DefinitionError::UnknownColor("mauve".to_string()));
    }

    #[test]
    fn test_value_equality_is_structural() {
        let a = Definition::new(Color::White, Color::Blue).highlighted(true);
        let b = Definition::new(Color::White, Color::Blue).highlighted(true);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().underlined(true));
    }

    #[test]
    fn test_to_style_applies_attributes() {
        let def = Definition::new(Color::Red, Color::Black)
            .highlighted(true)
            .underlined(true);
        let styled = def
            .to_style()
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert!(styled.contains("\x1b[31m"));
        assert!(styled.contains("\x1b[40m"));
        assert!(styled.contains("\x1b[1m"));
        assert!(styled.contains("\x1b[4m"));
    }

    #[test]
    fn test_to_style_plain_flags() {
        let styled = Definition::new(Color::Black, Color::White)
            .to_style()
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert!(!styled.contains("\x1b[1m"));
        assert!(!styled.contains("\x1b[4m"));
    }
}

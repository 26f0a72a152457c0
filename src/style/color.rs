//! Color name parsing.
//!
//! The palette itself is [`console::Color`]; this module only maps the
//! textual names used in theme configuration onto it.

use console::Color;

/// Parses a color name into a palette color.
///
/// Accepts the eight basic names (case-insensitive) or a decimal index
/// into the 256-color palette. Returns `None` for anything else.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use tui_theme::parse_color;
///
/// assert_eq!(parse_color("Blue"), Some(Color::Blue));
/// assert_eq!(parse_color("208"), Some(Color::Color256(208)));
/// assert_eq!(parse_color("chartreuse"), None);
/// ```
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim();
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        other => return other.parse::<u8>().ok().map(Color::Color256),
    };
    Some(color)
}

/// Returns the configuration name for a palette color.
///
/// Inverse of [`parse_color`]: indexed colors come back as their decimal
/// index.
pub fn color_name(color: Color) -> String {
    match color {
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::White => "white".to_string(),
        Color::Color256(index) => index.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_names() {
        assert_eq!(parse_color("black"), Some(Color::Black));
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("white"), Some(Color::White));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_color("YELLOW"), Some(Color::Yellow));
        assert_eq!(parse_color("  Magenta "), Some(Color::Magenta));
    }

    #[test]
    fn test_parse_palette_index() {
        assert_eq!(parse_color("0"), Some(Color::Color256(0)));
        assert_eq!(parse_color("255"), Some(Color::Color256(255)));
        assert_eq!(parse_color("256"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("teal"), None);
    }

    #[test]
    fn test_color_name_matches_parse() {
        for name in ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "42"] {
            let color = parse_color(name).unwrap();
            assert_eq!(color_name(color), name);
        }
    }
}

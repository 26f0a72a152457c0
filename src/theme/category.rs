//! Style slots a theme can configure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An abstract UI region whose look comes from the active theme.
///
/// The set is closed: adding a slot is a source change. Configuration
/// refers to categories by their snake_case [`name`](Category::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DialogArea,
    ScreenBackground,
    Shadow,
    RaisedBorder,
    Border,
    ButtonActive,
    ButtonInactive,
    ButtonLabelInactive,
    ButtonLabelActive,
    ListItem,
    ListItemSelected,
    Checkbox,
    CheckboxSelected,
    Textbox,
    TextboxFocused,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 15] = [
        Category::DialogArea,
        Category::ScreenBackground,
        Category::Shadow,
        Category::RaisedBorder,
        Category::Border,
        Category::ButtonActive,
        Category::ButtonInactive,
        Category::ButtonLabelInactive,
        Category::ButtonLabelActive,
        Category::ListItem,
        Category::ListItemSelected,
        Category::Checkbox,
        Category::CheckboxSelected,
        Category::Textbox,
        Category::TextboxFocused,
    ];

    /// The configuration name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::DialogArea => "dialog_area",
            Category::ScreenBackground => "screen_background",
            Category::Shadow => "shadow",
            Category::RaisedBorder => "raised_border",
            Category::Border => "border",
            Category::ButtonActive => "button_active",
            Category::ButtonInactive => "button_inactive",
            Category::ButtonLabelInactive => "button_label_inactive",
            Category::ButtonLabelActive => "button_label_active",
            Category::ListItem => "list_item",
            Category::ListItemSelected => "list_item_selected",
            Category::Checkbox => "checkbox",
            Category::CheckboxSelected => "checkbox_selected",
            Category::Textbox => "textbox",
            Category::TextboxFocused => "textbox_focused",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_complete_and_unique() {
        let unique: HashSet<_> = Category::ALL.iter().collect();
        assert_eq!(unique.len(), Category::ALL.len());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "title_bar".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("title_bar".to_string()));
        assert!(err.to_string().contains("title_bar"));
    }

    #[test]
    fn test_serde_name_matches_display() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}

//! Theme struct: category lookup with a fallback definition.

use std::collections::HashMap;
use std::sync::Arc;

use console::{Color, Style};
use once_cell::sync::Lazy;

use super::builder::ThemeBuilder;
use super::category::Category;
use super::spec::{ThemeError, ThemeSpec};
use crate::style::Definition;

/// Black on white, used for plain regions and as the fallback.
pub(crate) static DEFAULT_DEFINITION: Lazy<Arc<Definition>> =
    Lazy::new(|| Arc::new(Definition::new(Color::Black, Color::White)));

/// Highlighted white on blue, shared by every "selected" slot.
static SELECTED_DEFINITION: Lazy<Arc<Definition>> =
    Lazy::new(|| Arc::new(Definition::new(Color::White, Color::Blue).highlighted(true)));

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    let default = Arc::clone(&DEFAULT_DEFINITION);
    let selected = Arc::clone(&SELECTED_DEFINITION);

    ThemeBuilder::new()
        .set(Category::DialogArea, Arc::clone(&default))
        .set(
            Category::ScreenBackground,
            Definition::new(Color::Cyan, Color::Blue).highlighted(true),
        )
        .set(
            Category::Shadow,
            Definition::new(Color::Black, Color::Black).highlighted(true),
        )
        .set(
            Category::Border,
            Definition::new(Color::Black, Color::White).highlighted(true),
        )
        .set(
            Category::RaisedBorder,
            Definition::new(Color::White, Color::White).highlighted(true),
        )
        .set(
            Category::ButtonLabelActive,
            Definition::new(Color::Yellow, Color::Blue).highlighted(true),
        )
        .set(
            Category::ButtonLabelInactive,
            Definition::new(Color::Black, Color::White).highlighted(true),
        )
        .set(Category::ButtonActive, Arc::clone(&selected))
        .set(Category::ButtonInactive, Arc::clone(&default))
        .set(Category::ListItem, Arc::clone(&default))
        .set(Category::ListItemSelected, Arc::clone(&selected))
        .set(Category::Checkbox, Arc::clone(&default))
        .set(Category::CheckboxSelected, Arc::clone(&selected))
        .set(Category::Textbox, selected)
        .set(
            Category::TextboxFocused,
            Definition::new(Color::Yellow, Color::Blue).highlighted(true),
        )
        .build()
});

/// A partial mapping from [`Category`] to [`Definition`] plus a fallback.
///
/// Themes have no public mutator. Variants are assembled with a
/// [`ThemeBuilder`] and frozen by [`ThemeBuilder::build`]; after that a
/// theme can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tui_theme::{Category, Theme};
///
/// let theme = Theme::default_theme();
/// let button = theme.get_definition(Category::ButtonActive);
/// let item = theme.get_definition(Category::ListItemSelected);
/// assert!(Arc::ptr_eq(button, item));
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    pub(crate) styles: HashMap<Category, Arc<Definition>>,
    pub(crate) default: Arc<Definition>,
}

impl Theme {
    /// Returns the process-wide base theme.
    ///
    /// It is built on first access and never changes afterwards.
    pub fn default_theme() -> &'static Theme {
        &DEFAULT_THEME
    }

    /// Starts an empty theme whose fallback is black on white.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Starts a new theme pre-loaded with this theme's mapping and fallback.
    pub fn to_builder(&self) -> ThemeBuilder {
        ThemeBuilder::from_theme(self)
    }

    /// Builds a variant of the default theme from configuration.
    pub fn from_spec(spec: &ThemeSpec) -> Result<Theme, ThemeError> {
        Ok(Theme::default_theme().to_builder().apply_spec(spec)?.build())
    }

    /// Returns the definition for `category`, or the fallback when the
    /// category has no explicit entry.
    pub fn get_definition(&self, category: Category) -> &Arc<Definition> {
        match self.styles.get(&category) {
            Some(definition) => definition,
            None => {
                tracing::trace!(%category, "no explicit definition, using fallback");
                &self.default
            }
        }
    }

    /// Returns the fallback definition.
    pub fn get_default(&self) -> &Arc<Definition> {
        &self.default
    }

    /// Whether `category` has an explicit entry.
    pub fn has_explicit(&self, category: Category) -> bool {
        self.styles.contains_key(&category)
    }

    /// Returns the [`console::Style`] for `category`.
    pub fn style(&self, category: Category) -> Style {
        self.get_definition(category).to_style()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::default_theme().clone()
    }
}

//! Construction-time assembly of themes.

use std::collections::HashMap;
use std::sync::Arc;

use super::category::Category;
use super::theme::{Theme, DEFAULT_DEFINITION};
use crate::style::Definition;

/// Assembles a [`Theme`].
///
/// The builder is the only place a category mapping can change. It is
/// owned by a single caller and consumed by [`build`](ThemeBuilder::build),
/// so a published theme can no longer be modified.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use tui_theme::{Category, Definition, Theme};
///
/// let theme = Theme::default_theme()
///     .to_builder()
///     .set(
///         Category::TextboxFocused,
///         Definition::new(Color::Green, Color::Black).underlined(true),
///     )
///     .unset(Category::Shadow)
///     .build();
///
/// assert!(theme.get_definition(Category::TextboxFocused).is_underlined());
/// ```
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    styles: HashMap<Category, Arc<Definition>>,
    default: Arc<Definition>,
}

impl ThemeBuilder {
    /// Creates a builder with no explicit entries and the black on white
    /// fallback.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            default: Arc::clone(&DEFAULT_DEFINITION),
        }
    }

    /// Creates a builder pre-loaded with `base`'s entries and fallback.
    ///
    /// Definitions are shared with `base`, not copied.
    pub fn from_theme(base: &Theme) -> Self {
        Self {
            styles: base.styles.clone(),
            default: Arc::clone(&base.default),
        }
    }

    /// Installs or removes the entry for `category`.
    ///
    /// `None` removes any explicit entry, so lookups for `category` fall
    /// back to the theme default. `Some` replaces the previous entry.
    pub fn set_definition(mut self, category: Category, definition: Option<Arc<Definition>>) -> Self {
        match definition {
            Some(definition) => {
                self.styles.insert(category, definition);
            }
            None => {
                self.styles.remove(&category);
            }
        }
        self
    }

    /// Maps `category` to `definition`.
    ///
    /// Passing an `Arc` keeps its identity, so several categories can share
    /// one definition.
    pub fn set<D: Into<Arc<Definition>>>(self, category: Category, definition: D) -> Self {
        self.set_definition(category, Some(definition.into()))
    }

    /// Removes the explicit entry for `category`.
    pub fn unset(self, category: Category) -> Self {
        self.set_definition(category, None)
    }

    /// Replaces the fallback returned for unmapped categories.
    pub fn fallback<D: Into<Arc<Definition>>>(mut self, definition: D) -> Self {
        self.default = definition.into();
        self
    }

    /// Freezes the mapping into a [`Theme`].
    pub fn build(self) -> Theme {
        tracing::debug!(explicit = self.styles.len(), "theme built");
        Theme {
            styles: self.styles,
            default: self.default,
        }
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

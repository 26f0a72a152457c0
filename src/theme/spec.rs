//! Serializable theme overrides.
//!
//! A [`ThemeSpec`] describes changes to a base theme in plain data so it
//! can come from any serde format. Loading it from disk is left to the
//! caller.
//!
//! ```json
//! {
//!   "fallback": { "foreground": "white", "background": "black" },
//!   "styles": {
//!     "textbox_focused": { "foreground": "green", "background": "black", "underlined": true },
//!     "shadow": null
//!   }
//! }
//! ```
//!
//! A `null` entry removes the category's explicit definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builder::ThemeBuilder;
use super::category::Category;
use crate::style::{color_name, parse_color, Definition, DefinitionError};

/// One definition in configuration form.
///
/// Colors use the names accepted by [`parse_color`]. A missing color is
/// reported when the spec is applied, not when it is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default)]
    pub highlighted: bool,
    #[serde(default)]
    pub underlined: bool,
}

impl DefinitionSpec {
    /// Validates the spec into a [`Definition`].
    pub fn to_definition(&self) -> Result<Definition, DefinitionError> {
        let foreground = self.foreground.as_deref().map(resolve_color).transpose()?;
        let background = self.background.as_deref().map(resolve_color).transpose()?;
        Ok(Definition::try_new(foreground, background)?
            .highlighted(self.highlighted)
            .underlined(self.underlined))
    }
}

impl From<&Definition> for DefinitionSpec {
    fn from(definition: &Definition) -> Self {
        Self {
            foreground: Some(color_name(definition.foreground())),
            background: Some(color_name(definition.background())),
            highlighted: definition.is_highlighted(),
            underlined: definition.is_underlined(),
        }
    }
}

fn resolve_color(name: &str) -> Result<console::Color, DefinitionError> {
    parse_color(name).ok_or_else(|| DefinitionError::UnknownColor(name.to_string()))
}

/// Overrides to apply on top of a base theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSpec {
    /// Replacement fallback definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<DefinitionSpec>,
    /// Per-category overrides; `None` unsets the category.
    #[serde(default)]
    pub styles: BTreeMap<Category, Option<DefinitionSpec>>,
}

/// Error returned when a [`ThemeSpec`] cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A category override is not a valid definition
    #[error("invalid definition for '{category}': {source}")]
    InvalidDefinition {
        category: Category,
        #[source]
        source: DefinitionError,
    },
    /// The fallback override is not a valid definition
    #[error("invalid fallback definition: {0}")]
    InvalidFallback(#[source] DefinitionError),
}

impl ThemeBuilder {
    /// Applies every override in `spec`.
    ///
    /// Fails on the first invalid definition; categories are visited in
    /// declaration order.
    pub fn apply_spec(self, spec: &ThemeSpec) -> Result<ThemeBuilder, ThemeError> {
        let mut builder = self;
        if let Some(fallback) = &spec.fallback {
            let definition = fallback
                .to_definition()
                .map_err(ThemeError::InvalidFallback)?;
            builder = builder.fallback(definition);
        }
        for (&category, entry) in &spec.styles {
            let definition = entry
                .as_ref()
                .map(|entry| entry.to_definition())
                .transpose()
                .map_err(|source| ThemeError::InvalidDefinition { category, source })?;
            builder = builder.set_definition(category, definition.map(Into::into));
        }
        Ok(builder)
    }
}

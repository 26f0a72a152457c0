//! Definition construction errors.

use thiserror::Error;

/// Error returned when a [`Definition`](super::Definition) cannot be built.
///
/// Every variant is an invalid argument supplied by the caller; there is
/// nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// No foreground color was supplied
    #[error("foreground color cannot be absent")]
    MissingForeground,
    /// No background color was supplied
    #[error("background color cannot be absent")]
    MissingBackground,
    /// A color name did not match any palette entry
    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

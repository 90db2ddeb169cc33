//! Registry construction errors.

use thiserror::Error;

/// Errors that can occur when building a registry from untyped input.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Expected a transition at index {index}, found {found}: {reason}")]
    InvalidInputKind {
        index: usize,
        found: &'static str,
        reason: String,
    },
}

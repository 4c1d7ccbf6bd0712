//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("Unknown guide chapter: {0}")]
    UnknownChapter(String),

    #[error("Unknown message role: {0}")]
    UnknownRole(String),
}

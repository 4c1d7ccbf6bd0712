//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`rich_text::RichText`] - display text with emphasis spans

pub mod error;
pub mod rich_text;

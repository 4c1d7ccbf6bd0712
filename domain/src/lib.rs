//! Domain layer for prague-guide
//!
//! This crate contains the guide's content, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Regulations
//!
//! A fixed table of [`RegulationSection`]s, each grouping
//! [`RegulationItem`]s (fines, warnings, info). [`filter_sections`] narrows
//! the table with a case-insensitive substring query.
//!
//! ## Chat
//!
//! A [`Transcript`] is the append-only conversation with the AI guide.
//! [`ChatState`] tracks whether an advice request is in flight.

pub mod chat;
pub mod core;
pub mod guide;
pub mod prompt;
pub mod regulation;
pub mod util;

// Re-export commonly used types
pub use chat::{
    entities::{ChatMessage, ChatState, MessageId, Role},
    transcript::{GREETING, Transcript},
};
pub use core::{
    error::DomainError,
    rich_text::{RichText, TextSpan},
};
pub use guide::{
    chapters::{EMERGENCY_NUMBERS, GUIDE_SUBTITLE, GUIDE_TITLE, chapter, chapters, legal_basis},
    entities::{ChapterId, EmergencyNumber, GuideBlock, GuideChapter},
};
pub use prompt::{ADVICE_TEMPERATURE, FallbackReply, GuidePrompt};
pub use regulation::{
    catalog::{PUBLIC_ORDER_LAW, regulations},
    entities::{ItemKind, RegulationItem, RegulationSection},
    filter::{SectionMatch, filter_sections},
};

//! Regulation entities

use crate::core::error::DomainError;
use crate::core::rich_text::RichText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity class of a regulation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Breaking the rule carries a monetary penalty
    Fine,
    /// Penalized, but without a published maximum
    Warning,
    /// Informational only
    Info,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Fine => "fine",
            ItemKind::Warning => "warning",
            ItemKind::Info => "info",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fine" => Ok(ItemKind::Fine),
            "warning" => Ok(ItemKind::Warning),
            "info" => Ok(ItemKind::Info),
            _ => Err(DomainError::UnknownItemKind(s.to_string())),
        }
    }
}

/// A single regulation, fine or warning entry (Entity)
///
/// `search_text` mirrors `body` as plain text and is what the filter
/// matches against. Data authors keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationItem {
    pub kind: ItemKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_amount: Option<String>,
    pub body: RichText,
    pub search_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
}

impl RegulationItem {
    /// Create an entry whose search text is derived from `body`
    pub fn new(kind: ItemKind, title: impl Into<String>, body: impl Into<RichText>) -> Self {
        let body = body.into();
        Self {
            kind,
            title: title.into(),
            fine_amount: None,
            search_text: body.plain_text(),
            body,
            legal_reference: None,
        }
    }

    pub fn fine(
        title: impl Into<String>,
        amount: impl Into<String>,
        body: impl Into<RichText>,
    ) -> Self {
        Self::new(ItemKind::Fine, title, body).with_fine_amount(amount)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<RichText>) -> Self {
        Self::new(ItemKind::Warning, title, body)
    }

    pub fn info(title: impl Into<String>, body: impl Into<RichText>) -> Self {
        Self::new(ItemKind::Info, title, body)
    }

    pub fn with_fine_amount(mut self, amount: impl Into<String>) -> Self {
        self.fine_amount = Some(amount.into());
        self
    }

    pub fn with_legal_reference(mut self, reference: impl Into<String>) -> Self {
        self.legal_reference = Some(reference.into());
        self
    }
}

/// A titled group of related regulation entries (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationSection {
    pub id: String,
    pub title: String,
    pub items: Vec<RegulationItem>,
}

impl RegulationSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: RegulationItem) -> Self {
        self.items.push(item);
        self
    }
}

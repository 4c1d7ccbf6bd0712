//! Guide chapter entities

use crate::core::error::DomainError;
use crate::core::rich_text::RichText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a numbered guide chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterId {
    Alcohol,
    Penalties,
    Water,
    Traffic,
    Substances,
    Fees,
    Fireworks,
}

impl ChapterId {
    pub const ALL: [ChapterId; 7] = [
        ChapterId::Alcohol,
        ChapterId::Penalties,
        ChapterId::Water,
        ChapterId::Traffic,
        ChapterId::Substances,
        ChapterId::Fees,
        ChapterId::Fireworks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterId::Alcohol => "alcohol",
            ChapterId::Penalties => "penalties",
            ChapterId::Water => "water",
            ChapterId::Traffic => "traffic",
            ChapterId::Substances => "substances",
            ChapterId::Fees => "fees",
            ChapterId::Fireworks => "fireworks",
        }
    }

    /// 1-based position in the guide
    pub fn number(&self) -> u8 {
        match self {
            ChapterId::Alcohol => 1,
            ChapterId::Penalties => 2,
            ChapterId::Water => 3,
            ChapterId::Traffic => 4,
            ChapterId::Substances => 5,
            ChapterId::Fees => 6,
            ChapterId::Fireworks => 7,
        }
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChapterId {
    type Err = DomainError;

    /// Accepts the chapter id (`"water"`) or its number (`"3"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ChapterId::ALL
            .into_iter()
            .find(|id| id.as_str() == key || id.number().to_string() == key)
            .ok_or_else(|| DomainError::UnknownChapter(s.to_string()))
    }
}

/// One block of chapter content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuideBlock {
    Heading { text: String },
    Paragraph { text: RichText },
    Bullets { items: Vec<RichText> },
    /// Labelled figure, e.g. a fee or a time window
    Highlight { label: String, value: String },
    /// Small print
    Note { text: RichText },
    /// Place where the searchable regulations table is rendered
    Regulations,
}

/// A numbered chapter of the visitor guide (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideChapter {
    pub id: ChapterId,
    pub title: String,
    pub blocks: Vec<GuideBlock>,
}

impl GuideChapter {
    pub fn new(id: ChapterId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn number(&self) -> u8 {
        self.id.number()
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(GuideBlock::Heading { text: text.into() });
        self
    }

    pub fn paragraph(mut self, text: impl Into<RichText>) -> Self {
        self.blocks.push(GuideBlock::Paragraph { text: text.into() });
        self
    }

    pub fn bullets<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RichText>,
    {
        self.blocks.push(GuideBlock::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn highlight(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.blocks.push(GuideBlock::Highlight {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn note(mut self, text: impl Into<RichText>) -> Self {
        self.blocks.push(GuideBlock::Note { text: text.into() });
        self
    }

    pub fn regulations(mut self) -> Self {
        self.blocks.push(GuideBlock::Regulations);
        self
    }

    pub fn embeds_regulations(&self) -> bool {
        self.blocks.contains(&GuideBlock::Regulations)
    }
}

/// A public emergency line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyNumber {
    pub number: &'static str,
    pub service: &'static str,
}

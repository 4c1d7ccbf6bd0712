//! Visitor guide chapters.
//!
//! - [`entities::GuideChapter`] - a numbered chapter made of [`entities::GuideBlock`]s
//! - [`chapters::chapters`] - the built-in guide, chapter 2 embedding the regulations table

pub mod chapters;
pub mod entities;

//! Output formatter trait

use guide_domain::{GuideChapter, SectionMatch};

/// Trait for rendering guide content
pub trait OutputFormatter {
    /// Format regulation search results for `query`
    fn format_search(&self, query: &str, matches: &[SectionMatch<'_>]) -> String;

    /// Format a single chapter
    fn format_chapter(&self, chapter: &GuideChapter) -> String;

    /// Format the whole guide
    fn format_guide(&self, chapters: &[GuideChapter]) -> String;
}

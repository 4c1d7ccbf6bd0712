//! Guide search use case.
//!
//! Holds the current search query and recomputes the filtered regulations
//! view on demand. An empty result is what the caller renders as
//! "no results" together with a way to [`reset`](GuideSearch::reset).

use guide_domain::{RegulationSection, SectionMatch, filter_sections, regulations};
use tracing::debug;

pub struct GuideSearch<'a> {
    sections: &'a [RegulationSection],
    query: String,
}

impl GuideSearch<'static> {
    /// Search over the built-in regulations table
    pub fn builtin() -> Self {
        Self::new(regulations())
    }
}

impl<'a> GuideSearch<'a> {
    pub fn new(sections: &'a [RegulationSection]) -> Self {
        Self {
            sections,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "Search query updated");
    }

    /// Clear the query so every regulation is shown again
    pub fn reset(&mut self) {
        self.query.clear();
    }

    pub fn results(&self) -> Vec<SectionMatch<'a>> {
        filter_sections(self.sections, &self.query)
    }

    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }

    /// Number of matching items across all sections
    pub fn match_count(&self) -> usize {
        self.results().iter().map(|m| m.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unfiltered() {
        let search = GuideSearch::builtin();
        assert_eq!(search.query(), "");
        assert_eq!(search.results().len(), regulations().len());
        assert_eq!(
            search.match_count(),
            regulations().iter().map(|s| s.items.len()).sum::<usize>()
        );
    }

    #[test]
    fn test_set_query_narrows_results() {
        let mut search = GuideSearch::builtin();
        search.set_query("graffiti");
        let results = search.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].items[0].title, "Property Damage");
        assert_eq!(search.match_count(), 1);
    }

    #[test]
    fn test_no_results_then_reset() {
        let mut search = GuideSearch::builtin();
        search.set_query("casino");
        assert!(!search.has_results());

        search.reset();
        assert!(search.has_results());
        assert_eq!(search.results().len(), regulations().len());
    }
}

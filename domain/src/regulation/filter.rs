//! Case-insensitive substring filter over regulation sections.
//!
//! An item matches when the lower-cased query is contained in its title,
//! search text, legal reference or fine amount. Sections without a
//! matching item are dropped; everything else keeps its original order.
//! The query is used as given (no trimming), so `""` matches everything.

use super::entities::{RegulationItem, RegulationSection};
use serde::Serialize;

/// A section that survived filtering, with only its matching items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch<'a> {
    pub section: &'a RegulationSection,
    pub items: Vec<&'a RegulationItem>,
}

impl Serialize for SectionMatch<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SectionMatch", 3)?;
        state.serialize_field("id", &self.section.id)?;
        state.serialize_field("title", &self.section.title)?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}

impl<'a> SectionMatch<'a> {
    pub fn id(&self) -> &'a str {
        &self.section.id
    }

    pub fn title(&self) -> &'a str {
        &self.section.title
    }

    /// True when every item of the section matched
    pub fn is_complete(&self) -> bool {
        self.items.len() == self.section.items.len()
    }
}

/// Filter `sections` by `query`.
///
/// Pure and deterministic; cheap enough to run on every keystroke.
/// An empty result means nothing matched.
pub fn filter_sections<'a>(sections: &'a [RegulationSection], query: &str) -> Vec<SectionMatch<'a>> {
    let needle = query.to_lowercase();

    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<&RegulationItem> = section
                .items
                .iter()
                .filter(|item| item_matches(item, &needle))
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(SectionMatch { section, items })
            }
        })
        .collect()
}

/// `needle` must already be lower-cased
fn item_matches(item: &RegulationItem, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(item.title.as_str())
        || contains(item.search_text.as_str())
        || item.legal_reference.as_deref().is_some_and(contains)
        || item.fine_amount.as_deref().is_some_and(contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulation::catalog::regulations;
    use crate::regulation::entities::ItemKind;

    fn titles(result: &[SectionMatch<'_>]) -> Vec<Vec<String>> {
        result
            .iter()
            .map(|m| m.items.iter().map(|i| i.title.clone()).collect())
            .collect()
    }

    fn sample() -> Vec<RegulationSection> {
        vec![
            RegulationSection::new("a", "Alpha")
                .with_item(RegulationItem::fine("Noise", "100 CZK", "Keep it down."))
                .with_item(RegulationItem::info("Trams", "Validate tickets.")),
            RegulationSection::new("b", "Beta")
                .with_item(RegulationItem::warning("Dogs", "Leash required.").with_legal_reference("Act 9/2000")),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let sections = regulations();
        let result = filter_sections(sections, "");
        assert_eq!(result.len(), sections.len());
        for (matched, original) in result.iter().zip(sections) {
            assert_eq!(matched.id(), original.id);
            assert!(matched.is_complete());
            let items: Vec<_> = matched.items.iter().map(|i| &i.title).collect();
            let expected: Vec<_> = original.items.iter().map(|i| &i.title).collect();
            assert_eq!(items, expected);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let sections = regulations();
        let upper = filter_sections(sections, "NOISE");
        let lower = filter_sections(sections, "noise");
        assert_eq!(upper, lower);
        assert_eq!(titles(&lower), vec![vec!["Night Quiet".to_string()]]);
    }

    #[test]
    fn test_drops_sections_without_matches() {
        let sections = regulations();
        let result = filter_sections(sections, "pigeons");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "2.2");
        assert_eq!(titles(&result), vec![vec!["Feeding Animals".to_string()]]);
        assert!(!result[0].is_complete());
    }

    #[test]
    fn test_matches_legal_reference() {
        let sections = regulations();
        let result = filter_sections(sections, "251/2016");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), "2.1");
        assert_eq!(result[0].items.len(), 2);
    }

    #[test]
    fn test_matches_fine_amount() {
        let result = filter_sections(regulations(), "50,000");
        assert_eq!(titles(&result), vec![vec!["Property Damage".to_string()]]);
    }

    #[test]
    fn test_matches_title() {
        let result = filter_sections(regulations(), "littering");
        assert_eq!(titles(&result), vec![vec!["Littering".to_string()]]);
        assert_eq!(result[0].items[0].kind, ItemKind::Fine);
    }

    #[test]
    fn test_preserves_order_across_sections() {
        let sections = sample();
        let result = filter_sections(&sections, "e");
        let ids: Vec<_> = result.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            titles(&result),
            vec![
                vec!["Noise".to_string(), "Trams".to_string()],
                vec!["Dogs".to_string()]
            ]
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_sections(regulations(), "zzz-no-such-rule").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let sections = sample();
        assert!(filter_sections(&sections, " dogs ").is_empty());
        assert_eq!(filter_sections(&sections, "9/2000").len(), 1);
    }

    #[test]
    fn test_serializes_section_header_with_items() {
        let sections = sample();
        let result = filter_sections(&sections, "dogs");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json[0]["id"], "b");
        assert_eq!(json[0]["title"], "Beta");
        assert_eq!(json[0]["items"][0]["title"], "Dogs");
    }
}

//! JSON output

use crate::output::formatter::OutputFormatter;
use guide_domain::{
    EMERGENCY_NUMBERS, GUIDE_SUBTITLE, GUIDE_TITLE, GuideBlock, GuideChapter, SectionMatch,
    filter_sections, legal_basis, regulations,
};
use serde::Serialize;
use serde_json::Value;

/// Formats guide content as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string() }).to_string()
        })
    }

    /// Chapter as JSON with the regulations table filled in
    fn chapter_value(chapter: &GuideChapter) -> Value {
        let blocks: Vec<Value> = chapter
            .blocks
            .iter()
            .map(|block| match block {
                GuideBlock::Regulations => serde_json::json!({
                    "type": "regulations",
                    "sections": filter_sections(regulations(), ""),
                }),
                other => serde_json::to_value(other).unwrap_or(Value::Null),
            })
            .collect();

        serde_json::json!({
            "id": chapter.id,
            "number": chapter.number(),
            "title": chapter.title,
            "blocks": blocks,
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_search(&self, query: &str, matches: &[SectionMatch<'_>]) -> String {
        let count: usize = matches.iter().map(|m| m.items.len()).sum();
        Self::render(&serde_json::json!({
            "query": query,
            "match_count": count,
            "sections": matches,
        }))
    }

    fn format_chapter(&self, chapter: &GuideChapter) -> String {
        Self::render(&Self::chapter_value(chapter))
    }

    fn format_guide(&self, chapters: &[GuideChapter]) -> String {
        Self::render(&serde_json::json!({
            "title": GUIDE_TITLE,
            "subtitle": GUIDE_SUBTITLE,
            "chapters": chapters.iter().map(Self::chapter_value).collect::<Vec<_>>(),
            "emergency_numbers": EMERGENCY_NUMBERS,
            "legal_basis": legal_basis(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_domain::{ChapterId, chapter, chapters};

    #[test]
    fn test_search_json() {
        let matches = filter_sections(regulations(), "graffiti");
        let out = JsonFormatter.format_search("graffiti", &matches);
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["query"], "graffiti");
        assert_eq!(value["match_count"], 1);
        assert_eq!(value["sections"][0]["items"][0]["title"], "Property Damage");
    }

    #[test]
    fn test_empty_search_json() {
        let out = JsonFormatter.format_search("casino", &[]);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["match_count"], 0);
        assert_eq!(value["sections"], serde_json::json!([]));
    }

    #[test]
    fn test_guide_json_lists_all_chapters() {
        let out = JsonFormatter.format_guide(chapters());
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], GUIDE_TITLE);
        assert_eq!(value["chapters"].as_array().unwrap().len(), 7);
        assert_eq!(value["emergency_numbers"][0]["number"], "112");
    }

    #[test]
    fn test_chapter_json() {
        let water = chapter(ChapterId::Water).unwrap();
        let value: Value = serde_json::from_str(&JsonFormatter.format_chapter(water)).unwrap();
        assert_eq!(value["id"], "water");
        assert_eq!(value["number"], 3);
    }

    #[test]
    fn test_penalties_chapter_json_embeds_regulations() {
        let penalties = chapter(ChapterId::Penalties).unwrap();
        let out = JsonFormatter.format_chapter(penalties);
        assert!(out.contains("Night Quiet"));

        let value: Value = serde_json::from_str(&out).unwrap();
        let block = value["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|b| b["type"] == "regulations")
            .unwrap();
        assert_eq!(
            block["sections"].as_array().unwrap().len(),
            regulations().len()
        );
        assert_eq!(block["sections"][1]["items"][0]["title"], "Property Damage");
    }

    #[test]
    fn test_guide_json_embeds_regulations() {
        let out = JsonFormatter.format_guide(chapters());
        assert!(out.contains("Feeding Animals"));
    }
}

//! Console output formatter for guide content and chat messages

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use guide_domain::{
    ChatMessage, EMERGENCY_NUMBERS, GUIDE_SUBTITLE, GUIDE_TITLE, GuideBlock, GuideChapter,
    ItemKind, RegulationItem, RichText, Role, SectionMatch, TextSpan, filter_sections,
    legal_basis, regulations,
};

/// Formats guide content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format regulation search results, or the "no results" notice
    pub fn format_search(query: &str, matches: &[SectionMatch<'_>]) -> String {
        if matches.is_empty() {
            return Self::no_results(query);
        }

        let mut output = String::new();
        for section in matches {
            output.push_str(&Self::section_header(section.title()));
            for item in &section.items {
                output.push_str(&Self::item(item));
            }
        }
        output
    }

    /// Notice shown when a query matches nothing
    pub fn no_results(query: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("No regulations found matching \"{}\"", query).yellow(),
            "Clear the search (empty term) to see all regulations.".dimmed()
        )
    }

    pub fn format_chapter(chapter: &GuideChapter) -> String {
        let mut output = Self::section_header(&format!("{}. {}", chapter.number(), chapter.title));

        for block in &chapter.blocks {
            match block {
                GuideBlock::Heading { text } => {
                    output.push_str(&format!("\n{}\n", text.bold()));
                }
                GuideBlock::Paragraph { text } => {
                    output.push_str(&format!("{}\n", Self::rich(text)));
                }
                GuideBlock::Bullets { items } => {
                    for item in items {
                        output.push_str(&format!("  * {}\n", Self::rich(item)));
                    }
                }
                GuideBlock::Highlight { label, value } => {
                    output.push_str(&format!("  {} {}\n", format!("{}:", label).cyan(), value.bold()));
                }
                GuideBlock::Note { text } => {
                    output.push_str(&format!("{}\n", text.plain_text().dimmed().italic()));
                }
                GuideBlock::Regulations => {
                    output.push_str(&Self::format_search("", &filter_sections(regulations(), "")));
                }
            }
        }
        output
    }

    pub fn format_guide(chapters: &[GuideChapter]) -> String {
        let mut output = Self::header(GUIDE_TITLE);
        output.push_str(&format!("\n{:^60}\n", GUIDE_SUBTITLE.dimmed()));

        for chapter in chapters {
            output.push_str(&Self::format_chapter(chapter));
        }

        output.push_str(&Self::section_header("Emergency Numbers"));
        for entry in EMERGENCY_NUMBERS {
            output.push_str(&format!("  {:<4} {}\n", entry.number.red().bold(), entry.service));
        }
        output.push_str(&format!("\n{}\n", legal_basis().dimmed()));
        output.push_str(&Self::footer());
        output
    }

    /// Format a transcript message for the chat REPL
    pub fn format_message(message: &ChatMessage) -> String {
        let label = match message.role() {
            Role::User => "You".green().bold(),
            Role::Assistant => "Guide".cyan().bold(),
        };
        format!(
            "{} {}\n{}",
            label,
            message.created_at().format("%H:%M").to_string().dimmed(),
            message.text()
        )
    }

    fn item(item: &RegulationItem) -> String {
        let marker = match item.kind {
            ItemKind::Fine => "[FINE]".red().bold(),
            ItemKind::Warning => "[WARN]".yellow().bold(),
            ItemKind::Info => "[INFO]".blue().bold(),
        };

        let mut line = format!("\n{} {}", marker, item.title.bold());
        if let Some(amount) = &item.fine_amount {
            line.push_str(&format!("  {}", format!("up to {}", amount).red()));
        }
        line.push('\n');
        line.push_str(&Self::indent(&Self::rich(&item.body), "    "));
        line.push('\n');
        if let Some(reference) = &item.legal_reference {
            line.push_str(&format!("    {}\n", reference.dimmed()));
        }
        line
    }

    fn rich(text: &RichText) -> String {
        text.spans()
            .iter()
            .map(|span| match span {
                TextSpan::Plain(s) => s.clone(),
                TextSpan::Strong(s) => s.bold().to_string(),
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_search(&self, query: &str, matches: &[SectionMatch<'_>]) -> String {
        Self::format_search(query, matches)
    }

    fn format_chapter(&self, chapter: &GuideChapter) -> String {
        Self::format_chapter(chapter)
    }

    fn format_guide(&self, chapters: &[GuideChapter]) -> String {
        Self::format_guide(chapters)
    }
}

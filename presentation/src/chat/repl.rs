//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use colored::Colorize;
use guide_application::{ChatSession, GuideSearch, SubmitOutcome};
use guide_domain::{ChapterId, chapter, chapters};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::Path;
use tracing::debug;

const HISTORY_CAPACITY: usize = 1000;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Guide,
    History,
    /// `/search` with no term shows every regulation again
    Search(String),
    Chapter(String),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; `None` for ordinary questions
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        Some(match name {
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "help" | "h" | "?" => ReplCommand::Help,
            "guide" => ReplCommand::Guide,
            "history" => ReplCommand::History,
            "search" | "s" => ReplCommand::Search(arg.to_string()),
            "chapter" => ReplCommand::Chapter(arg.to_string()),
            _ => ReplCommand::Unknown(line.to_string()),
        })
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    search: GuideSearch<'static>,
    config: ReplConfig,
    model: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl around a chat session
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            search: GuideSearch::builtin(),
            config: ReplConfig::default(),
            model: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Model name shown in the banner; `None` means no API key
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path()
            && prepare_history_dir(&path)
        {
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => debug!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("praha".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Na shledanou!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Prague Guide - AI Assistant         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match &self.model {
            Some(model) => println!("Model: {}", model),
            None => println!(
                "{}",
                "No API key found; the assistant cannot answer questions.".yellow()
            ),
        }
        println!();
        Self::print_help();
        for message in self.session.messages() {
            println!("{}\n", ConsoleFormatter::format_message(&message));
        }
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /search <term>     - Search regulations (no term shows all)");
        println!("  /chapter <id|num>  - Show one guide chapter");
        println!("  /guide             - Show the whole guide");
        println!("  /history           - Show the conversation so far");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Na shledanou!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Guide => {
                println!("{}", ConsoleFormatter::format_guide(chapters()));
            }
            ReplCommand::History => {
                println!();
                for message in self.session.messages() {
                    println!("{}\n", ConsoleFormatter::format_message(&message));
                }
            }
            ReplCommand::Search(term) => {
                self.search.set_query(term);
                println!(
                    "{}",
                    ConsoleFormatter::format_search(self.search.query(), &self.search.results())
                );
            }
            ReplCommand::Chapter(arg) => match arg.parse::<ChapterId>().ok().and_then(chapter) {
                Some(found) => println!("{}", ConsoleFormatter::format_chapter(found)),
                None => {
                    println!("Unknown chapter: {}", arg);
                    let ids: Vec<_> = chapters()
                        .iter()
                        .map(|c| format!("{} ({})", c.number(), c.id))
                        .collect();
                    println!("Chapters: {}", ids.join(", "));
                }
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, question: &str) -> SubmitOutcome {
        println!();
        self.session.set_draft(question);

        // Runs on its own task; the session only lends it a weak handle
        let outcome = match self.session.spawn_submit(self.session.draft()) {
            Ok(handle) => handle.await.unwrap_or_else(|e| {
                debug!("Advice task did not finish: {}", e);
                SubmitOutcome::Discarded
            }),
            Err(rejected) => rejected,
        };

        match &outcome {
            SubmitOutcome::Answered { reply, .. } => {
                println!("{}", ConsoleFormatter::format_message(reply));
            }
            SubmitOutcome::Busy => {
                println!("{}", "Still waiting for the previous answer.".yellow());
            }
            SubmitOutcome::Empty | SubmitOutcome::Discarded => {}
        }
        println!();
        outcome
    }
}

/// Create the history file's directory. Returns false when that fails.
fn prepare_history_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use guide_application::AdvicePort;
    use std::sync::Arc;

    struct FixedAdvice;

    #[async_trait]
    impl AdvicePort for FixedAdvice {
        async fn request_advice(&self, message: &str) -> String {
            format!("About {}: be polite.", message)
        }
    }

    fn repl() -> ChatRepl {
        ChatRepl::new(ChatSession::new(Arc::new(FixedAdvice)))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("  /h "), Some(ReplCommand::Help));
        assert_eq!(
            ReplCommand::parse("/search  night quiet "),
            Some(ReplCommand::Search("night quiet".to_string()))
        );
        assert_eq!(ReplCommand::parse("/search"), Some(ReplCommand::Search(String::new())));
        assert_eq!(
            ReplCommand::parse("/chapter 3"),
            Some(ReplCommand::Chapter("3".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/dance"),
            Some(ReplCommand::Unknown("/dance".to_string()))
        );
        assert_eq!(ReplCommand::parse("Where is the castle?"), None);
    }

    #[test]
    fn test_handle_command() {
        let mut repl = repl();
        assert!(repl.handle_command(ReplCommand::Quit));
        assert!(!repl.handle_command(ReplCommand::Search("graffiti".to_string())));
        assert_eq!(repl.search.query(), "graffiti");
        assert!(!repl.handle_command(ReplCommand::Chapter("casino".to_string())));
    }

    #[tokio::test]
    async fn test_question_appends_to_transcript() {
        let repl = repl();
        let outcome = repl.process_question("trams").await;

        assert!(outcome.is_answered());
        assert_eq!(repl.session().message_count(), 3);
        assert_eq!(
            repl.session().last_message().unwrap().text(),
            "About trams: be polite."
        );
        assert_eq!(repl.session().draft(), "");
        assert!(!repl.session().is_busy());
    }

    #[tokio::test]
    async fn test_blank_question_keeps_transcript() {
        let repl = repl();
        assert_eq!(repl.process_question("   ").await, SubmitOutcome::Empty);
        assert_eq!(repl.session().message_count(), 1);
    }

    #[test]
    fn test_prepare_history_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(prepare_history_dir(&dir.path().join("a").join("history.txt")));
        assert!(dir.path().join("a").is_dir());

        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        assert!(!prepare_history_dir(&blocker.join("sub").join("history.txt")));
    }
}

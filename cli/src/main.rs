//! CLI entrypoint for Prague Guide
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use guide_application::{
    ChatObserver, ChatSession, ConversationLogger, GuideSearch, LlmGateway, NoChatObserver,
    NoConversationLogger, RequestAdviceUseCase,
};
use guide_domain::{chapter, chapters};
use guide_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, GeminiLlmGateway, JsonlConversationLogger,
    Severity,
};
use guide_presentation::{
    ChatRepl, Cli, Mode, OutputConfig, OutputFormat, ProgressReporter, ReplConfig,
    SimpleProgress, formatter_for,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();

    if mode == Mode::ShowConfig {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_dir = cli.log_dir.clone().or_else(|| config.log_dir());
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref());

    info!("Starting Prague Guide");
    report_config_issues(&config);

    let output_config = OutputConfig {
        format: cli
            .output
            .or(config.output.format.map(output_format))
            .unwrap_or(OutputFormat::Text),
        color: config.output.color,
    };
    output_config.apply_color();
    let formatter = formatter_for(output_config.format);

    match mode {
        Mode::Guide => {
            println!("{}", formatter.format_guide(chapters()));
        }
        Mode::Chapter(id) => {
            let Some(found) = chapter(id) else {
                return Err(anyhow!("Chapter {} is not part of the guide", id));
            };
            println!("{}", formatter.format_chapter(found));
        }
        Mode::Search(term) => {
            let mut search = GuideSearch::builtin();
            search.set_query(term);
            println!("{}", formatter.format_search(search.query(), &search.results()));
        }
        Mode::Ask(question) => {
            let advice = build_advice(&config, conversation_logger(&config));
            let reply = advice.execute(&question).await;
            println!("{}", reply);
        }
        Mode::Chat => {
            let logger = conversation_logger(&config);
            let advice = build_advice(&config, Arc::clone(&logger));
            let model = advice.model_name().map(str::to_string);

            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config.history_path(),
            };
            let observer: Arc<dyn ChatObserver> = match (repl_config.show_progress, cli.quiet) {
                (true, _) => Arc::new(ProgressReporter::new()),
                (false, false) => Arc::new(SimpleProgress),
                (false, true) => Arc::new(NoChatObserver),
            };

            let session = ChatSession::new(Arc::new(advice))
                .with_observer(observer)
                .with_conversation_logger(logger);

            let mut repl = ChatRepl::new(session)
                .with_config(repl_config)
                .with_model(model);
            repl.run().await?;
        }
        Mode::ShowConfig => {}
    }

    Ok(())
}

/// Install the tracing subscriber. The returned guard flushes the log file.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "prague-guide.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(stderr_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(stderr_layer)
                .init();
            None
        }
    }
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        let label = match issue.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        warn!(field = %issue.field, "Configuration {}: {}", label, issue.message);
        eprintln!("config {}: {}", label, issue);
    }
}

fn output_format(format: FileOutputFormat) -> OutputFormat {
    match format {
        FileOutputFormat::Text => OutputFormat::Text,
        FileOutputFormat::Json => OutputFormat::Json,
    }
}

// === Dependency Injection ===
fn build_advice(config: &FileConfig, logger: Arc<dyn ConversationLogger>) -> RequestAdviceUseCase {
    let gateway = GeminiLlmGateway::from_config(&config.gemini)
        .map(|g| Arc::new(g) as Arc<dyn LlmGateway>);

    RequestAdviceUseCase::new(gateway).with_conversation_logger(logger)
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .conversation_log_path()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

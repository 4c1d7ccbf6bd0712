//! Progress reporting while the AI guide is answering

use colored::Colorize;
use guide_application::ChatObserver;
use guide_domain::{ChatMessage, ChatState};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Asking the guide...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Whether the spinner is currently shown
    pub fn is_active(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatObserver for ProgressReporter {
    fn on_message_appended(&self, message: &ChatMessage) {
        // Clear before the reply is printed
        if !message.is_user() {
            self.stop();
        }
    }

    fn on_state_changed(&self, state: ChatState) {
        match state {
            ChatState::Sending => self.start(),
            ChatState::Idle => self.stop(),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ChatObserver for SimpleProgress {
    fn on_state_changed(&self, state: ChatState) {
        if state.is_busy() {
            println!("{} {}", "->".cyan(), "Asking the guide...".dimmed());
        }
    }
}

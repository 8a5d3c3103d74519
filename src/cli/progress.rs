//! Shared CLI progress callback with styled output and a status spinner

use crate::cli::style::{check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;
use storeship::submission::{status_text, Phase, SubmissionProgress};
use storeship::types::{LogEntry, LogLevel, SubmissionStatus};

/// CLI progress callback that prints to stdout with styled output
///
/// While the submission is in flight, a spinner carries the current status
/// line; terminal states replace it with a final checkmark or cross.
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a new CLI progress callback
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionProgress for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Resolving | Phase::Scheduling => {
                println!("{}...", phase.to_string().emphasis());
            }
            Phase::Submitting => {
                let pb = ProgressBar::new_spinner().with_style(spinner_style());
                pb.enable_steady_tick(Duration::from_millis(100));
                *self.spinner.lock().unwrap() = Some(pb);
            }
            Phase::FetchingLogs => {
                println!("{}...", phase.to_string().muted());
            }
            Phase::Complete => {}
        }
    }

    async fn on_status(&self, status: SubmissionStatus) {
        let mut guard = self.spinner.lock().unwrap();

        match status {
            SubmissionStatus::Finished => {
                if let Some(pb) = guard.take() {
                    pb.finish_and_clear();
                }
                println!("{} {}", check(), status_text(status));
            }
            SubmissionStatus::Errored => {
                if let Some(pb) = guard.take() {
                    pb.finish_and_clear();
                }
                eprintln!("{} {}", cross(), status_text(status));
            }
            SubmissionStatus::InQueue | SubmissionStatus::InProgress => {
                if let Some(pb) = guard.as_ref() {
                    pb.set_message(status_text(status));
                } else {
                    println!("{}", status_text(status));
                }
            }
        }
    }

    async fn on_log(&self, entry: &LogEntry) {
        match entry.level {
            LogLevel::Error => eprintln!("{}", entry.message.error()),
            LogLevel::Warn => eprintln!("{}", entry.message.warn()),
            LogLevel::Info => println!("{}", entry.message),
        }
    }

    async fn on_message(&self, message: &str) {
        let guard = self.spinner.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            pb.println(message);
        } else {
            println!("{}", message.muted());
        }
    }
}

//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, CI wrappers, etc.) to
//! receive progress updates while a submission runs.

use crate::types::{LogEntry, SubmissionStatus};
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving the archive source to a URL
    Resolving,
    /// Scheduling the submission job
    Scheduling,
    /// Waiting for the store submission to complete
    Submitting,
    /// Downloading and classifying submission logs
    FetchingLogs,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolving => write!(f, "Resolving archive"),
            Self::Scheduling => write!(f, "Scheduling submission"),
            Self::Submitting => write!(f, "Submitting"),
            Self::FetchingLogs => write!(f, "Fetching submission logs"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
#[async_trait]
pub trait SubmissionProgress: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called on every observed submission status, terminal ones included
    async fn on_status(&self, status: SubmissionStatus);

    /// Called once per classified log entry after a terminal status
    async fn on_log(&self, entry: &LogEntry);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl SubmissionProgress for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_status(&self, _status: SubmissionStatus) {}
    async fn on_log(&self, _entry: &LogEntry) {}
    async fn on_message(&self, _message: &str) {}
}

//! Test data factories for storeship types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use storeship::submission::{AndroidSubmitOptions, Phase, SubmissionProgress};
use storeship::types::{
    AppPlatform, ArchiveSource, ArchiveType, Build, BuildArtifacts, LogEntry, ReleaseStatus,
    ReleaseTrack, SubmissionStatus,
};

/// Create a build with a default artifact URL
pub fn make_build(id: &str) -> Build {
    Build {
        id: id.to_string(),
        artifacts: BuildArtifacts {
            url: format!("https://storage.test/builds/{id}.aab"),
        },
    }
}

/// Create a "latest build" archive source for a test project
pub fn latest_source(slug: &str) -> ArchiveSource {
    ArchiveSource::Latest {
        platform: AppPlatform::Android,
        owner: None,
        slug: slug.to_string(),
    }
}

/// Create submit options around an archive source and key file
pub fn make_submit_options(
    archive_source: ArchiveSource,
    service_account_path: PathBuf,
) -> AndroidSubmitOptions {
    AndroidSubmitOptions {
        archive_source,
        archive_type: ArchiveType::Aab,
        track: ReleaseTrack::Internal,
        release_status: ReleaseStatus::Completed,
        service_account_path,
    }
}

/// NDJSON log body with one entry per severity bucket and one broken line
pub fn sample_log_body() -> &'static str {
    concat!(
        r#"{"level":30,"msg":"uploading archive"}"#,
        "\n",
        r#"{"level":40,"msg":"store responded slowly"}"#,
        "\n",
        "corrupted trailing line\n",
        r#"{"level":50,"msg":"review rejected"}"#,
        "\n",
    )
}

/// Progress callback that records everything it observes
#[derive(Default)]
pub struct RecordingProgress {
    pub phases: Mutex<Vec<Phase>>,
    pub statuses: Mutex<Vec<SubmissionStatus>>,
    pub logs: Mutex<Vec<LogEntry>>,
    pub messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Statuses observed so far, in order
    pub fn observed_statuses(&self) -> Vec<SubmissionStatus> {
        self.statuses.lock().unwrap().clone()
    }

    /// Phases entered so far, in order
    pub fn observed_phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    /// Log entries replayed so far, in order
    pub fn observed_logs(&self) -> Vec<LogEntry> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionProgress for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_status(&self, status: SubmissionStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    async fn on_log(&self, entry: &LogEntry) {
        self.logs.lock().unwrap().push(entry.clone());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

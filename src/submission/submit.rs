//! Submission orchestration
//!
//! Drives one archive through the whole pipeline: prepare the submission
//! config, schedule the remote job, poll it to a terminal state, then
//! fetch and replay its logs.

use crate::api::StoreService;
use crate::archive::resolve_archive_url;
use crate::error::{Error, Result};
use crate::submission::{
    fetch_submission_logs, wait_for_completion, Phase, PollOptions, SubmissionProgress,
};
use crate::types::{
    AndroidSubmissionConfig, AppPlatform, ArchiveSource, ArchiveType, LogEntry, ReleaseStatus,
    ReleaseTrack, Submission, SubmissionStatus,
};
use std::path::PathBuf;

/// Options for one Android store submission
#[derive(Debug, Clone)]
pub struct AndroidSubmitOptions {
    /// Where the archive comes from
    pub archive_source: ArchiveSource,
    /// Archive packaging format
    pub archive_type: ArchiveType,
    /// Target release track
    pub track: ReleaseTrack,
    /// Release status to apply on the track
    pub release_status: ReleaseStatus,
    /// Path to the Google service account key JSON
    pub service_account_path: PathBuf,
}

/// Final state of one submission run
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The submission in its terminal state
    pub submission: Submission,
    /// Classified submitter logs, possibly empty
    pub logs: Vec<LogEntry>,
}

impl SubmissionOutcome {
    /// Whether the store accepted the archive
    pub fn succeeded(&self) -> bool {
        self.submission.status == SubmissionStatus::Finished
    }
}

/// Assemble the submission config the remote service expects
///
/// Resolves the archive source to a URL and reads the service account key.
/// A missing key file is a validation error, caught before anything is
/// scheduled remotely.
pub async fn prepare_android_config(
    service: &dyn StoreService,
    options: &AndroidSubmitOptions,
) -> Result<AndroidSubmissionConfig> {
    if !options.service_account_path.exists() {
        return Err(Error::ServiceAccountNotFound(
            options.service_account_path.clone(),
        ));
    }
    let service_account = tokio::fs::read_to_string(&options.service_account_path).await?;

    let archive_url = resolve_archive_url(service, &options.archive_source).await?;

    Ok(AndroidSubmissionConfig {
        archive_url,
        archive_type: options.archive_type,
        track: options.track,
        release_status: options.release_status,
        service_account,
    })
}

/// Submit one Android archive and wait for the result
///
/// An `ERRORED` terminal status is a normal outcome here - the logs are
/// fetched and replayed through `progress` either way, and the caller
/// decides how to surface the failure.
pub async fn submit_android(
    service: &dyn StoreService,
    options: &AndroidSubmitOptions,
    poll: PollOptions,
    progress: &dyn SubmissionProgress,
) -> Result<SubmissionOutcome> {
    progress.on_phase(Phase::Resolving).await;
    let config = prepare_android_config(service, options).await?;

    progress.on_phase(Phase::Scheduling).await;
    let id = service
        .start_submission(AppPlatform::Android, &config)
        .await?;
    progress
        .on_message(&format!("Scheduled submission {id}"))
        .await;

    progress.on_phase(Phase::Submitting).await;
    let submission = wait_for_completion(service, &id, progress, poll).await?;

    progress.on_phase(Phase::FetchingLogs).await;
    let logs = fetch_submission_logs(service, &submission).await?;
    for entry in &logs {
        progress.on_log(entry).await;
    }

    progress.on_phase(Phase::Complete).await;

    Ok(SubmissionOutcome { submission, logs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_submission(status: SubmissionStatus) -> Submission {
        Submission {
            id: "sub-1".to_string(),
            status,
            submission_info: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_outcome_succeeded_only_on_finished() {
        let finished = SubmissionOutcome {
            submission: make_submission(SubmissionStatus::Finished),
            logs: vec![],
        };
        assert!(finished.succeeded());

        let errored = SubmissionOutcome {
            submission: make_submission(SubmissionStatus::Errored),
            logs: vec![],
        };
        assert!(!errored.succeeded());
    }
}

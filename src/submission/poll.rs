//! Submission status polling
//!
//! A small state machine over the remote job status: keep fetching until a
//! terminal state shows up, with a fixed delay between polls and an
//! optional overall deadline.

use crate::api::StoreService;
use crate::error::{Error, Result};
use crate::submission::SubmissionProgress;
use crate::types::{Submission, SubmissionStatus};
use std::time::{Duration, Instant};

/// Default delay between status fetches
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Polling behavior knobs
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// Delay between consecutive status fetches
    pub interval: Duration,
    /// Give up after this much total wall-clock time, if set
    pub deadline: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            deadline: None,
        }
    }
}

/// Human-readable progress line for an observed status
pub const fn status_text(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::InQueue => {
            "Submitting your app to the store: waiting for an available submitter"
        }
        SubmissionStatus::InProgress => "Submitting your app to the store: submission in progress",
        SubmissionStatus::Finished => "Successfully submitted your app to the store!",
        SubmissionStatus::Errored => {
            "Something went wrong when submitting your app to the store. See logs below."
        }
    }
}

/// Poll a submission until it reaches a terminal state
///
/// Emits the status line for every observation through `progress` and
/// returns the final [`Submission`]. Exceeding `opts.deadline` yields
/// [`Error::TimedOut`]; an `ERRORED` terminal status is returned normally,
/// not as an error.
pub async fn wait_for_completion(
    service: &dyn StoreService,
    id: &str,
    progress: &dyn SubmissionProgress,
    opts: PollOptions,
) -> Result<Submission> {
    let started = Instant::now();

    loop {
        let submission = service.get_submission(id).await?;
        progress.on_status(submission.status).await;

        if submission.status.is_terminal() {
            return Ok(submission);
        }

        if let Some(deadline) = opts.deadline {
            if started.elapsed() >= deadline {
                return Err(Error::TimedOut {
                    id: id.to_string(),
                    waited: started.elapsed(),
                });
            }
        }

        tokio::time::sleep(opts.interval).await;
    }
}

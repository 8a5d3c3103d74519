//! Submission engine
//!
//! Handles the workflow of submitting one archive to a store:
//! 1. Prepare - resolve the archive and assemble the submission config
//! 2. Schedule - start the remote submission job
//! 3. Poll - wait for the job to reach a terminal state
//! 4. Logs - download and classify the job's log stream

mod logs;
mod poll;
mod progress;
mod submit;

pub use logs::{fetch_submission_logs, parse_log_lines};
pub use poll::{status_text, wait_for_completion, PollOptions};
pub use progress::{NoopProgress, Phase, SubmissionProgress};
pub use submit::{
    prepare_android_config, submit_android, AndroidSubmitOptions, SubmissionOutcome,
};

//! Status command - show the current state and logs of a submission

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use storeship::api::create_store_service;
use storeship::error::Result;
use storeship::submission::{fetch_submission_logs, SubmissionProgress};

/// Run the status command
///
/// One-shot: fetches the submission, prints its status line, and replays
/// whatever logs the job has produced so far.
pub async fn run_status(api_url: Option<String>, submission_id: &str) -> Result<()> {
    let service = create_store_service(api_url)?;

    let submission = service.get_submission(submission_id).await?;
    println!(
        "Submission {} is {}",
        submission.id.accent(),
        submission.status.to_string().emphasis()
    );
    if let Some(updated_at) = submission.updated_at {
        println!("  {} {}", "Last update:".muted(), updated_at);
    }

    let logs = fetch_submission_logs(service.as_ref(), &submission).await?;
    if logs.is_empty() {
        println!("{}", "No logs available yet".muted());
        return Ok(());
    }

    let progress = CliProgress::new();
    for entry in &logs {
        progress.on_log(entry).await;
    }

    Ok(())
}

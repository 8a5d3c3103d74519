//! Submission log fetching and classification
//!
//! Submitter logs arrive as newline-delimited JSON, one object per line
//! with an integer `level` and a `msg` string. Partially-written streams
//! are expected; lines that fail to parse are dropped without comment.

use crate::api::StoreService;
use crate::error::Result;
use crate::types::{LogEntry, LogLevel, Submission};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawLogLine {
    level: i64,
    msg: String,
}

/// Download and classify the logs of a completed submission
///
/// A submission without a logs URL yields an empty vec, not an error.
pub async fn fetch_submission_logs(
    service: &dyn StoreService,
    submission: &Submission,
) -> Result<Vec<LogEntry>> {
    let Some(logs_url) = submission
        .submission_info
        .as_ref()
        .and_then(|info| info.logs_url.as_deref())
    else {
        return Ok(Vec::new());
    };

    let raw = service.download_logs(logs_url).await?;
    Ok(parse_log_lines(&raw))
}

/// Classify raw newline-delimited JSON log text into severity buckets
///
/// Output order mirrors input line order. Unparseable lines are skipped.
pub fn parse_log_lines(raw: &str) -> Vec<LogEntry> {
    raw.lines()
        .filter_map(|line| serde_json::from_str::<RawLogLine>(line).ok())
        .map(|line| LogEntry {
            level: LogLevel::from_severity(line.level),
            message: line.msg,
        })
        .collect()
}

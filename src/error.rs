//! Error types for storeship

use std::path::PathBuf;
use std::time::Duration;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the submission pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The "latest build" lookup returned an empty result set
    #[error("couldn't find any builds for this project")]
    NoBuildsFound,

    /// A by-id build lookup returned nothing
    #[error("couldn't find build with id: {0}")]
    BuildNotFound(String),

    /// A local archive path does not point to an existing file
    #[error("archive file does not exist: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    /// The service account key file does not exist
    #[error("service account key file does not exist: {}", .0.display())]
    ServiceAccountNotFound(PathBuf),

    /// A user-supplied archive URL failed to parse
    #[error("invalid archive URL: {0}")]
    InvalidUrl(String),

    /// The submission service returned an unexpected response
    #[error("submission service error: {0}")]
    Api(String),

    /// Transport-level HTTP failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Authentication problem
    #[error("authentication error: {0}")]
    Auth(String),

    /// The poller gave up waiting for a terminal submission status
    #[error("submission {id} did not complete within {}s", .waited.as_secs())]
    TimedOut {
        /// Submission id being polled
        id: String,
        /// Total time spent waiting
        waited: Duration,
    },

    /// The submission reached the ERRORED terminal state
    #[error("submission failed, see logs above")]
    SubmissionFailed,

    /// Filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invariant violation - this should never happen
    #[error("internal error: {0}")]
    Internal(String),
}

//! Core types for storeship

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Target app store platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPlatform {
    /// Google Play
    Android,
    /// Apple App Store
    Ios,
}

impl fmt::Display for AppPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
        }
    }
}

/// Where the archive to submit comes from
///
/// Exactly one variant is active; each carries the fields its resolution
/// strategy needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSource {
    /// Direct URL to an already-hosted archive
    Url {
        /// Downloadable archive URL
        url: String,
    },
    /// Most recent build produced for the project
    Latest {
        /// Platform the build was produced for
        platform: AppPlatform,
        /// Account owning the project, if not the authenticated user
        owner: Option<String>,
        /// Project slug
        slug: String,
    },
    /// Local file that must be uploaded first
    Path {
        /// Path to the archive on disk
        path: PathBuf,
    },
    /// A specific build, looked up by id
    BuildId {
        /// Platform the build was produced for
        platform: AppPlatform,
        /// Build id
        id: String,
        /// Account owning the project, if not the authenticated user
        owner: Option<String>,
        /// Project slug
        slug: String,
    },
}

/// Content category for uploads to remote storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// App archive destined for a store submission
    SubmissionArchive,
    /// Project source tarball
    ProjectSources,
}

impl UploadKind {
    /// Wire name of the upload category
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubmissionArchive => "submission-app-archive",
            Self::ProjectSources => "project-sources",
        }
    }
}

/// A build known to the build service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    /// Build id
    pub id: String,
    /// Artifacts produced by the build
    pub artifacts: BuildArtifacts,
}

/// Artifacts attached to a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildArtifacts {
    /// Downloadable archive URL
    pub url: String,
}

/// Status of a remote submission job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Waiting for an available submitter
    InQueue,
    /// A submitter picked the job up
    InProgress,
    /// Terminal: the store accepted the archive
    Finished,
    /// Terminal: the submission failed
    Errored,
}

impl SubmissionStatus {
    /// Whether no further transitions can occur from this status
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Errored)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InQueue => write!(f, "in queue"),
            Self::InProgress => write!(f, "in progress"),
            Self::Finished => write!(f, "finished"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// A remote submission job, as returned by the submission service
///
/// Created remotely on submit and mutated only remotely; this process
/// observes it read-only while polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Submission id
    pub id: String,
    /// Current job status
    pub status: SubmissionStatus,
    /// Extra details, populated once the job has produced any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_info: Option<SubmissionInfo>,
    /// When the job was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the job last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Details attached to a submission by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInfo {
    /// URL of the job's newline-delimited JSON log stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_url: Option<String>,
}

/// Severity bucket of a classified log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Severity >= 50
    Error,
    /// Severity >= 40
    Warn,
    /// Everything below
    Info,
}

impl LogLevel {
    /// Classify a numeric severity into a bucket
    pub const fn from_severity(severity: i64) -> Self {
        if severity >= 50 {
            Self::Error
        } else if severity >= 40 {
            Self::Warn
        } else {
            Self::Info
        }
    }
}

/// A classified submission log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity bucket
    pub level: LogLevel,
    /// Log message text
    pub message: String,
}

/// Archive packaging format for Android submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    /// Android application package
    Apk,
    /// Android app bundle
    Aab,
}

/// Google Play release track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseTrack {
    /// Public production track
    Production,
    /// Open testing
    Beta,
    /// Closed testing
    Alpha,
    /// Internal testing
    Internal,
}

/// Release status applied once the upload lands on the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReleaseStatus {
    /// Roll out immediately
    Completed,
    /// Leave as a draft release
    Draft,
    /// Halt a previous staged rollout
    Halted,
    /// Staged rollout in progress
    InProgress,
}

/// Everything the submission service needs to submit an Android archive
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSubmissionConfig {
    /// Downloadable URL of the archive to submit
    pub archive_url: String,
    /// Archive packaging format
    pub archive_type: ArchiveType,
    /// Target release track
    pub track: ReleaseTrack,
    /// Release status to apply
    pub release_status: ReleaseStatus,
    /// Google service account key, verbatim JSON
    pub service_account: String,
}

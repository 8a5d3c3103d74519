//! Submit command - submit an app archive to the store

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, hyperlink_url, Stream, Stylize};
use anstream::println;
use std::path::PathBuf;
use std::time::Duration;
use storeship::api::create_store_service;
use storeship::error::{Error, Result};
use storeship::submission::{submit_android, AndroidSubmitOptions, PollOptions};
use storeship::types::{AppPlatform, ArchiveSource, ArchiveType, ReleaseStatus, ReleaseTrack};

/// Parsed inputs for the submit command
///
/// Exactly one of the archive source fields is set; the argument parser
/// enforces the group before this struct is built.
pub struct SubmitArgs {
    /// API base URL override
    pub api_url: Option<String>,
    /// Direct archive URL
    pub url: Option<String>,
    /// Submit the most recent build
    pub latest: bool,
    /// Local archive path
    pub path: Option<PathBuf>,
    /// Existing build id
    pub build_id: Option<String>,
    /// Project owner account
    pub owner: Option<String>,
    /// Project slug
    pub slug: Option<String>,
    /// Service account key file
    pub key: PathBuf,
    /// Archive packaging format
    pub archive_type: ArchiveType,
    /// Target release track
    pub track: ReleaseTrack,
    /// Release status to apply
    pub release_status: ReleaseStatus,
    /// Seconds between status polls
    pub poll_interval: u64,
    /// Overall deadline in seconds, if any
    pub timeout: Option<u64>,
}

/// Run the submit command
pub async fn run_submit(args: SubmitArgs) -> Result<()> {
    let archive_source = build_archive_source(&args)?;

    let service = create_store_service(args.api_url.clone())?;

    let options = AndroidSubmitOptions {
        archive_source,
        archive_type: args.archive_type,
        track: args.track,
        release_status: args.release_status,
        service_account_path: args.key.clone(),
    };

    let poll = PollOptions {
        interval: Duration::from_secs(args.poll_interval),
        deadline: args.timeout.map(Duration::from_secs),
    };

    let progress = CliProgress::new();
    let outcome = submit_android(service.as_ref(), &options, poll, &progress).await?;

    if !outcome.succeeded() {
        return Err(Error::SubmissionFailed);
    }

    println!();
    println!(
        "{} Submission {} complete",
        check(),
        outcome.submission.id.accent()
    );
    if let Some(logs_url) = outcome
        .submission
        .submission_info
        .as_ref()
        .and_then(|info| info.logs_url.as_deref())
    {
        println!(
            "  {} {}",
            "Full logs:".muted(),
            hyperlink_url(Stream::Stdout, logs_url)
        );
    }

    Ok(())
}

/// Build the archive source from the parsed flags
///
/// The argument parser guarantees exactly one source flag; anything else
/// here is an invariant violation.
fn build_archive_source(args: &SubmitArgs) -> Result<ArchiveSource> {
    if let Some(raw) = &args.url {
        let parsed =
            url::Url::parse(raw).map_err(|_| Error::InvalidUrl(raw.clone()))?;
        return Ok(ArchiveSource::Url {
            url: parsed.to_string(),
        });
    }

    if args.latest {
        let slug = require_slug(args, "--latest")?;
        return Ok(ArchiveSource::Latest {
            platform: AppPlatform::Android,
            owner: args.owner.clone(),
            slug,
        });
    }

    if let Some(path) = &args.path {
        return Ok(ArchiveSource::Path { path: path.clone() });
    }

    if let Some(id) = &args.build_id {
        let slug = require_slug(args, "--id")?;
        return Ok(ArchiveSource::BuildId {
            platform: AppPlatform::Android,
            id: id.clone(),
            owner: args.owner.clone(),
            slug,
        });
    }

    Err(Error::Internal(
        "no archive source flag made it past argument parsing".to_string(),
    ))
}

fn require_slug(args: &SubmitArgs, flag: &str) -> Result<String> {
    args.slug
        .clone()
        .ok_or_else(|| Error::Internal(format!("{flag} requires --slug, enforced by the parser")))
}

//! storeship - submit mobile app builds to the app stores
//!
//! CLI binary for the store submission pipeline.

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storeship::types::{ArchiveType, ReleaseStatus, ReleaseTrack};

mod cli;

#[derive(Parser)]
#[command(name = "storeship")]
#[command(about = "Submit mobile app builds to the app stores")]
#[command(version)]
struct Cli {
    /// Submission service API base URL (defaults to production)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an Android app archive to Google Play
    Submit(SubmitCommand),

    /// Show the status and logs of a submission
    Status {
        /// Submission id to inspect
        submission_id: String,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true)))]
struct SubmitCommand {
    /// Archive URL to submit directly
    #[arg(long, group = "source")]
    url: Option<String>,

    /// Submit the most recent build for the project
    #[arg(long, group = "source", requires = "slug")]
    latest: bool,

    /// Path to a local archive to upload and submit
    #[arg(long, group = "source")]
    path: Option<PathBuf>,

    /// Id of an existing build to submit
    #[arg(long = "id", group = "source", requires = "slug")]
    build_id: Option<String>,

    /// Project owner account, if not the authenticated user
    #[arg(long)]
    owner: Option<String>,

    /// Project slug (required with --latest and --id)
    #[arg(long)]
    slug: Option<String>,

    /// Path to the Google service account key JSON
    #[arg(long)]
    key: PathBuf,

    /// Archive packaging format
    #[arg(long = "type", value_enum, default_value = "aab")]
    archive_type: ArchiveTypeArg,

    /// Release track to upload to
    #[arg(long, value_enum, default_value = "internal")]
    track: TrackArg,

    /// Release status applied once the upload lands on the track
    #[arg(long, value_enum, default_value = "completed")]
    release_status: ReleaseStatusArg,

    /// Seconds between status polls
    #[arg(long, default_value_t = 3)]
    poll_interval: u64,

    /// Give up after this many seconds of polling
    #[arg(long)]
    timeout: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ArchiveTypeArg {
    Apk,
    Aab,
}

#[derive(Clone, Copy, ValueEnum)]
enum TrackArg {
    Production,
    Beta,
    Alpha,
    Internal,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReleaseStatusArg {
    Completed,
    Draft,
    Halted,
    InProgress,
}

impl From<ArchiveTypeArg> for ArchiveType {
    fn from(arg: ArchiveTypeArg) -> Self {
        match arg {
            ArchiveTypeArg::Apk => Self::Apk,
            ArchiveTypeArg::Aab => Self::Aab,
        }
    }
}

impl From<TrackArg> for ReleaseTrack {
    fn from(arg: TrackArg) -> Self {
        match arg {
            TrackArg::Production => Self::Production,
            TrackArg::Beta => Self::Beta,
            TrackArg::Alpha => Self::Alpha,
            TrackArg::Internal => Self::Internal,
        }
    }
}

impl From<ReleaseStatusArg> for ReleaseStatus {
    fn from(arg: ReleaseStatusArg) -> Self {
        match arg {
            ReleaseStatusArg::Completed => Self::Completed,
            ReleaseStatusArg::Draft => Self::Draft,
            ReleaseStatusArg::Halted => Self::Halted,
            ReleaseStatusArg::InProgress => Self::InProgress,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit(command) => {
            let args = cli::SubmitArgs {
                api_url: cli.api_url,
                url: command.url,
                latest: command.latest,
                path: command.path,
                build_id: command.build_id,
                owner: command.owner,
                slug: command.slug,
                key: command.key,
                archive_type: command.archive_type.into(),
                track: command.track.into(),
                release_status: command.release_status.into(),
                poll_interval: command.poll_interval,
                timeout: command.timeout,
            };
            cli::run_submit(args).await?;
        }
        Commands::Status { submission_id } => {
            cli::run_status(cli.api_url, &submission_id).await?;
        }
    }

    Ok(())
}

//! Archive source resolution
//!
//! Turns any [`ArchiveSource`] variant into a single downloadable archive
//! URL, uploading local files to remote storage when needed.

use crate::api::StoreService;
use crate::error::{Error, Result};
use crate::types::{ArchiveSource, UploadKind};

/// Resolve an archive source to a downloadable URL
///
/// - `Url` sources are returned as-is.
/// - `Latest` queries the build service capped at one result and fails
///   with [`Error::NoBuildsFound`] on an empty result set.
/// - `Path` uploads the file and returns the stored object's URL; a
///   missing file fails with [`Error::ArchiveNotFound`] before any upload
///   is attempted.
/// - `BuildId` looks the build up directly and fails with
///   [`Error::BuildNotFound`] if the service returns nothing.
pub async fn resolve_archive_url(
    service: &dyn StoreService,
    source: &ArchiveSource,
) -> Result<String> {
    match source {
        ArchiveSource::Url { url } => Ok(url.clone()),
        ArchiveSource::Latest {
            platform,
            owner,
            slug,
        } => {
            let builds = service
                .list_builds(*platform, owner.as_deref(), slug, 1)
                .await?;
            builds
                .into_iter()
                .next()
                .map(|build| build.artifacts.url)
                .ok_or(Error::NoBuildsFound)
        }
        ArchiveSource::Path { path } => {
            if !path.exists() {
                return Err(Error::ArchiveNotFound(path.clone()));
            }
            service
                .upload_archive(UploadKind::SubmissionArchive, path)
                .await
        }
        ArchiveSource::BuildId {
            platform,
            id,
            owner,
            slug,
        } => {
            let build = service
                .get_build_by_id(*platform, id, owner.as_deref(), slug)
                .await?;
            build
                .map(|build| build.artifacts.url)
                .ok_or_else(|| Error::BuildNotFound(id.clone()))
        }
    }
}

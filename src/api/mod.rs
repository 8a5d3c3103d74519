//! Remote collaborators of the submission pipeline
//!
//! Provides a unified interface over the build-lookup service, the archive
//! upload flow, and the submission service REST API.

mod factory;
mod http;

pub use factory::{create_store_service, API_URL_ENV_VAR};
pub use http::{ApiClient, DEFAULT_API_URL};

use crate::error::Result;
use crate::types::{AndroidSubmissionConfig, AppPlatform, Build, Submission, UploadKind};
use async_trait::async_trait;
use std::path::Path;

/// Remote service operations used by the submission pipeline
///
/// This trait abstracts every network collaborator, allowing the same
/// resolution and polling logic to run against the production API or a
/// test double.
#[async_trait]
pub trait StoreService: Send + Sync {
    /// List builds for a project, most recent first, capped at `limit`
    async fn list_builds(
        &self,
        platform: AppPlatform,
        owner: Option<&str>,
        slug: &str,
        limit: usize,
    ) -> Result<Vec<Build>>;

    /// Look up a single build by id; `None` if the service knows no such build
    async fn get_build_by_id(
        &self,
        platform: AppPlatform,
        id: &str,
        owner: Option<&str>,
        slug: &str,
    ) -> Result<Option<Build>>;

    /// Upload a local file to remote storage and return its public URL
    async fn upload_archive(&self, kind: UploadKind, path: &Path) -> Result<String>;

    /// Schedule a submission job; returns the submission id
    async fn start_submission(
        &self,
        platform: AppPlatform,
        config: &AndroidSubmissionConfig,
    ) -> Result<String>;

    /// Fetch the current state of a submission job
    async fn get_submission(&self, id: &str) -> Result<Submission>;

    /// Download raw newline-delimited JSON log text
    async fn download_logs(&self, url: &str) -> Result<String>;
}

//! HTTP implementation of the store service collaborators

use crate::api::StoreService;
use crate::error::{Error, Result};
use crate::types::{AndroidSubmissionConfig, AppPlatform, Build, Submission, UploadKind};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Production API base URL
pub const DEFAULT_API_URL: &str = "https://api.storeship.dev/v2";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Store service client backed by reqwest
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartSubmissionPayload<'a> {
    platform: AppPlatform,
    config: &'a AndroidSubmissionConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartSubmissionResponse {
    submission_id: String,
}

#[derive(Serialize)]
struct UploadSessionPayload<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    checksum: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadSessionResponse {
    presigned_url: PresignedPost,
}

/// A presigned POST grant for one object location
#[derive(Deserialize)]
struct PresignedPost {
    url: String,
    fields: HashMap<String, String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: Option<String>, token: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn project_query(
        platform: AppPlatform,
        owner: Option<&str>,
        slug: &str,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("platform", platform.to_string()),
            ("slug", slug.to_string()),
        ];
        if let Some(owner) = owner {
            query.push(("owner", owner.to_string()));
        }
        query
    }
}

#[async_trait]
impl StoreService for ApiClient {
    async fn list_builds(
        &self,
        platform: AppPlatform,
        owner: Option<&str>,
        slug: &str,
        limit: usize,
    ) -> Result<Vec<Build>> {
        let url = self.api_url("/builds");
        debug!(%platform, slug, limit, "listing builds");

        let mut query = Self::project_query(platform, owner, slug);
        query.push(("limit", limit.to_string()));

        let builds: Vec<Build> = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(builds)
    }

    async fn get_build_by_id(
        &self,
        platform: AppPlatform,
        id: &str,
        owner: Option<&str>,
        slug: &str,
    ) -> Result<Option<Build>> {
        let url = self.api_url(&format!("/builds/{id}"));
        debug!(%platform, id, "fetching build by id");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&Self::project_query(platform, owner, slug))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let build: Build = response
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(Some(build))
    }

    async fn upload_archive(&self, kind: UploadKind, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let checksum = md5_hex(&bytes);
        debug!(kind = kind.as_str(), %checksum, "requesting upload session");

        let session: UploadSessionResponse = self
            .client
            .post(self.api_url("/upload-sessions"))
            .bearer_auth(&self.token)
            .json(&UploadSessionPayload {
                kind: kind.as_str(),
                checksum,
            })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        let presigned = session.presigned_url;
        let key = presigned
            .fields
            .get("key")
            .cloned()
            .ok_or_else(|| Error::Api("upload session response missing object key".to_string()))?;

        let file_name = path
            .file_name()
            .map_or_else(|| "archive".to_string(), |n| n.to_string_lossy().into_owned());

        let mut form = Form::new();
        for (name, value) in presigned.fields {
            form = form.text(name, value);
        }
        form = form.part("file", Part::bytes(bytes).file_name(file_name));

        self.client
            .post(&presigned.url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(format!("archive upload failed: {e}")))?;

        Ok(format!("{}/{key}", presigned.url.trim_end_matches('/')))
    }

    async fn start_submission(
        &self,
        platform: AppPlatform,
        config: &AndroidSubmissionConfig,
    ) -> Result<String> {
        let url = self.api_url("/submissions");
        debug!(%platform, "scheduling submission");

        let response: StartSubmissionResponse = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&StartSubmissionPayload { platform, config })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(response.submission_id)
    }

    async fn get_submission(&self, id: &str) -> Result<Submission> {
        let url = self.api_url(&format!("/submissions/{id}"));
        debug!(id, "fetching submission status");

        let submission: Submission = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(e.to_string()))?
            .json()
            .await?;

        Ok(submission)
    }

    async fn download_logs(&self, url: &str) -> Result<String> {
        debug!(url, "downloading submission logs");

        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Api(format!("log download failed: {e}")))?
            .text()
            .await?;

        Ok(text)
    }
}

/// Lowercase hex md5 digest, used for content-addressed upload sessions
fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

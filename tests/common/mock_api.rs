//! Mock store service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use storeship::api::StoreService;
use storeship::error::{Error, Result};
use storeship::types::{
    AndroidSubmissionConfig, AppPlatform, Build, Submission, SubmissionInfo, SubmissionStatus,
    UploadKind,
};

/// Call record for `list_builds`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBuildsCall {
    pub platform: AppPlatform,
    pub owner: Option<String>,
    pub slug: String,
    pub limit: usize,
}

/// Call record for `upload_archive`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub kind: &'static str,
    pub path: PathBuf,
}

/// Call record for `start_submission`
#[derive(Debug, Clone)]
pub struct StartSubmissionCall {
    pub platform: AppPlatform,
    pub config: AndroidSubmissionConfig,
}

/// Simple mock store service for testing
///
/// This manually implements `StoreService` rather than using a mocking
/// crate, keeping test behavior explicit.
///
/// Features:
/// - Scripted submission status sequences (last status is sticky)
/// - Call tracking for verification
/// - Configurable builds, logs, and upload results
/// - Error injection for failure path testing
pub struct MockStoreService {
    builds: Mutex<Vec<Build>>,
    builds_by_id: Mutex<HashMap<String, Build>>,
    status_sequence: Mutex<VecDeque<SubmissionStatus>>,
    submission_info: Mutex<Option<SubmissionInfo>>,
    logs_body: Mutex<String>,
    uploaded_url: String,
    // Call tracking
    list_builds_calls: Mutex<Vec<ListBuildsCall>>,
    get_build_calls: Mutex<Vec<String>>,
    upload_calls: Mutex<Vec<UploadCall>>,
    start_calls: Mutex<Vec<StartSubmissionCall>>,
    get_submission_calls: Mutex<Vec<String>>,
    download_logs_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_start: Mutex<Option<String>>,
    error_on_get_submission: Mutex<Option<String>>,
}

impl Default for MockStoreService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStoreService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self {
            builds: Mutex::new(Vec::new()),
            builds_by_id: Mutex::new(HashMap::new()),
            status_sequence: Mutex::new(VecDeque::new()),
            submission_info: Mutex::new(None),
            logs_body: Mutex::new(String::new()),
            uploaded_url: "https://storage.test/uploads/archive.aab".to_string(),
            list_builds_calls: Mutex::new(Vec::new()),
            get_build_calls: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            start_calls: Mutex::new(Vec::new()),
            get_submission_calls: Mutex::new(Vec::new()),
            download_logs_calls: Mutex::new(Vec::new()),
            error_on_start: Mutex::new(None),
            error_on_get_submission: Mutex::new(None),
        }
    }

    // === Configuration methods ===

    /// Set the builds returned by `list_builds`
    pub fn set_builds(&self, builds: Vec<Build>) {
        *self.builds.lock().unwrap() = builds;
    }

    /// Set the build returned by `get_build_by_id` for one id
    pub fn set_build_by_id(&self, build: Build) {
        self.builds_by_id
            .lock()
            .unwrap()
            .insert(build.id.clone(), build);
    }

    /// Script the statuses observed by consecutive `get_submission` calls;
    /// the last entry repeats forever
    pub fn set_status_sequence(&self, statuses: &[SubmissionStatus]) {
        *self.status_sequence.lock().unwrap() = statuses.iter().copied().collect();
    }

    /// Attach submission info (logs URL) to every returned submission
    pub fn set_logs_url(&self, url: &str) {
        *self.submission_info.lock().unwrap() = Some(SubmissionInfo {
            logs_url: Some(url.to_string()),
        });
    }

    /// Set the raw NDJSON body served by `download_logs`
    pub fn set_logs_body(&self, body: &str) {
        *self.logs_body.lock().unwrap() = body.to_string();
    }

    // === Error injection methods ===

    /// Make `start_submission` return an error
    pub fn fail_start(&self, msg: &str) {
        *self.error_on_start.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_submission` return an error
    pub fn fail_get_submission(&self, msg: &str) {
        *self.error_on_get_submission.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `list_builds` calls
    pub fn get_list_builds_calls(&self) -> Vec<ListBuildsCall> {
        self.list_builds_calls.lock().unwrap().clone()
    }

    /// Get all ids passed to `get_build_by_id`
    pub fn get_build_calls(&self) -> Vec<String> {
        self.get_build_calls.lock().unwrap().clone()
    }

    /// Get all `upload_archive` calls
    pub fn get_upload_calls(&self) -> Vec<UploadCall> {
        self.upload_calls.lock().unwrap().clone()
    }

    /// Get all `start_submission` calls
    pub fn get_start_calls(&self) -> Vec<StartSubmissionCall> {
        self.start_calls.lock().unwrap().clone()
    }

    /// Number of `get_submission` calls observed
    pub fn get_submission_call_count(&self) -> usize {
        self.get_submission_calls.lock().unwrap().len()
    }

    /// Get all URLs passed to `download_logs`
    pub fn get_download_logs_calls(&self) -> Vec<String> {
        self.download_logs_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreService for MockStoreService {
    async fn list_builds(
        &self,
        platform: AppPlatform,
        owner: Option<&str>,
        slug: &str,
        limit: usize,
    ) -> Result<Vec<Build>> {
        self.list_builds_calls.lock().unwrap().push(ListBuildsCall {
            platform,
            owner: owner.map(ToString::to_string),
            slug: slug.to_string(),
            limit,
        });

        let builds = self.builds.lock().unwrap();
        Ok(builds.iter().take(limit).cloned().collect())
    }

    async fn get_build_by_id(
        &self,
        _platform: AppPlatform,
        id: &str,
        _owner: Option<&str>,
        _slug: &str,
    ) -> Result<Option<Build>> {
        self.get_build_calls.lock().unwrap().push(id.to_string());
        Ok(self.builds_by_id.lock().unwrap().get(id).cloned())
    }

    async fn upload_archive(&self, kind: UploadKind, path: &Path) -> Result<String> {
        self.upload_calls.lock().unwrap().push(UploadCall {
            kind: kind.as_str(),
            path: path.to_path_buf(),
        });
        Ok(self.uploaded_url.clone())
    }

    async fn start_submission(
        &self,
        platform: AppPlatform,
        config: &AndroidSubmissionConfig,
    ) -> Result<String> {
        self.start_calls.lock().unwrap().push(StartSubmissionCall {
            platform,
            config: config.clone(),
        });

        if let Some(msg) = self.error_on_start.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        Ok("sub-1".to_string())
    }

    async fn get_submission(&self, id: &str) -> Result<Submission> {
        self.get_submission_calls
            .lock()
            .unwrap()
            .push(id.to_string());

        if let Some(msg) = self.error_on_get_submission.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let mut sequence = self.status_sequence.lock().unwrap();
        let status = if sequence.len() > 1 {
            sequence.pop_front().expect("sequence is non-empty")
        } else {
            *sequence
                .front()
                .expect("status sequence must be configured before polling")
        };

        Ok(Submission {
            id: id.to_string(),
            status,
            submission_info: self.submission_info.lock().unwrap().clone(),
            created_at: None,
            updated_at: None,
        })
    }

    async fn download_logs(&self, url: &str) -> Result<String> {
        self.download_logs_calls
            .lock()
            .unwrap()
            .push(url.to_string());
        Ok(self.logs_body.lock().unwrap().clone())
    }
}

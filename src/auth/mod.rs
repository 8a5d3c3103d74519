//! Authentication for the submission service
//!
//! Supports environment variables and the persisted session file written
//! by `storeship login` tooling.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Environment variable holding an access token
pub const TOKEN_ENV_VAR: &str = "STORESHIP_TOKEN";

/// Source of the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the `STORESHIP_TOKEN` environment variable
    EnvVar,
    /// Token from the persisted session file
    SessionFile,
}

/// Resolved authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token sent as a bearer token on API requests
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    access_token: String,
}

/// Resolve authentication for the submission service
///
/// Priority:
/// 1. `STORESHIP_TOKEN` environment variable
/// 2. `~/.config/storeship/auth.json`
pub fn resolve_auth() -> Result<AuthConfig> {
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(AuthConfig {
                token,
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(path) = session_file_path() {
        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let session: SessionFile = serde_json::from_str(&raw)
                .map_err(|e| Error::Auth(format!("malformed session file {}: {e}", path.display())))?;
            return Ok(AuthConfig {
                token: session.access_token,
                source: AuthSource::SessionFile,
            });
        }
    }

    Err(Error::Auth(format!(
        "no credentials found. Set {TOKEN_ENV_VAR} or log in to create ~/.config/storeship/auth.json"
    )))
}

fn session_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("storeship").join("auth.json"))
}

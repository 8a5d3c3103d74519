//! Store service factory
//!
//! Creates the production API client from resolved credentials.

use crate::api::{ApiClient, StoreService};
use crate::auth::resolve_auth;
use crate::error::Result;
use std::env;

/// Environment variable overriding the API base URL
pub const API_URL_ENV_VAR: &str = "STORESHIP_API_URL";

/// Create a store service from CLI/environment configuration
///
/// Base URL priority: explicit `api_url` argument, `STORESHIP_API_URL`,
/// then the production default.
pub fn create_store_service(api_url: Option<String>) -> Result<Box<dyn StoreService>> {
    let auth = resolve_auth()?;
    let base_url = api_url.or_else(|| env::var(API_URL_ENV_VAR).ok());

    Ok(Box::new(ApiClient::new(base_url, auth.token)))
}

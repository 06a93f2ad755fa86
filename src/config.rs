use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, DEV_FRONTEND_ORIGIN, MATCH_ALL_PATHS, method};
use crate::origin::AllowedOrigins;
use crate::path_pattern::{PathPattern, PatternError};
use crate::policy::{CorsPolicy, ValidationError};
use crate::util::{dedup_ignore_case, split_comma_list};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::debug;

pub const ENV_PATH_PATTERN: &str = "CORS_PATH_PATTERN";
pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "CORS_MAX_AGE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid CORS path pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("invalid CORS policy: {0}")]
    Validation(#[from] ValidationError),
}

/// Environment-specific CORS settings.
///
/// Missing fields fall back to the local development policy, so an empty
/// environment reproduces [`CorsPolicy::development`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub path_pattern: String,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            path_pattern: MATCH_ALL_PATHS.to_string(),
            allowed_origins: vec![DEV_FRONTEND_ORIGIN.to_string()],
            allowed_methods: [
                method::GET,
                method::POST,
                method::PUT,
                method::DELETE,
                method::OPTIONS,
            ]
            .map(String::from)
            .to_vec(),
            allowed_headers: vec!["*".to_string()],
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PATH_PATTERN) {
            config.path_pattern = value.trim().to_string();
        }
        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            config.allowed_origins = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            config.allowed_methods = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            config.allowed_headers = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_EXPOSED_HEADERS) {
            config.exposed_headers = parse_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            config.allow_credentials = parse_bool(ENV_ALLOW_CREDENTIALS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_AGE) {
            config.max_age = parse_max_age(&value)?;
        }

        debug!(?config, "loaded CORS configuration");
        Ok(config)
    }

    /// Builds and validates the policy described by this configuration.
    pub fn to_policy(&self) -> Result<CorsPolicy, ConfigError> {
        let policy = CorsPolicy {
            path_pattern: PathPattern::new(&self.path_pattern)?,
            allowed_origins: AllowedOrigins::list(&self.allowed_origins),
            allowed_methods: AllowedMethods::list(&self.allowed_methods),
            allowed_headers: AllowedHeaders::list(&self.allowed_headers),
            exposed_headers: dedup_ignore_case(&self.exposed_headers),
            allow_credentials: self.allow_credentials,
            max_age: self.max_age,
        };
        policy.validate()?;
        Ok(policy)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    split_comma_list(value).map(str::to_string).collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// An empty value disables the `Access-Control-Max-Age` header.
fn parse_max_age(value: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key: ENV_MAX_AGE,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

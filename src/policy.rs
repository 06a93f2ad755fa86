use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, DEV_FRONTEND_ORIGIN, method};
use crate::origin::AllowedOrigins;
use crate::path_pattern::PathPattern;
use crate::util::{eq_ignore_case, is_http_token};
use thiserror::Error;
use url::Url;

/// Declarative CORS rules for the paths matched by `path_pattern`.
///
/// Construct once at startup, hand it to [`crate::PolicyProvider::new`] and
/// treat it as read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    pub path_pattern: PathPattern,
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allow_credentials cannot be combined with a wildcard origin; list the allowed origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("`{0}` is not a valid origin; expected scheme://host[:port]")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("allowed headers list cannot contain \"*\"; use AllowedHeaders::Any instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("exposed headers cannot contain \"*\"; list the exposed headers explicitly")]
    ExposedHeadersCannotContainWildcard,
}

impl CorsPolicy {
    /// Policy for the local frontend dev server: every path, credentials on.
    pub fn development() -> Self {
        Self {
            path_pattern: PathPattern::match_all(),
            allowed_origins: AllowedOrigins::list([DEV_FRONTEND_ORIGIN]),
            allowed_methods: AllowedMethods::list([
                method::GET,
                method::POST,
                method::PUT,
                method::DELETE,
                method::OPTIONS,
            ]),
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.allowed_origins {
            AllowedOrigins::Any if self.allow_credentials => {
                return Err(ValidationError::CredentialsRequireSpecificOrigin);
            }
            AllowedOrigins::Any => {}
            AllowedOrigins::List(values) => {
                if self.allow_credentials && values.iter().any(|value| value == "*") {
                    return Err(ValidationError::CredentialsRequireSpecificOrigin);
                }
                if let Some(invalid) = values.iter().find(|value| !is_serialized_origin(value)) {
                    return Err(ValidationError::InvalidOrigin(invalid.clone()));
                }
            }
        }

        if let AllowedMethods::List(values) = &self.allowed_methods
            && let Some(invalid) = values.iter().find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let AllowedHeaders::List(values) = &self.allowed_headers {
            if values.iter().any(|value| value == "*") {
                return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
            }
            if let Some(invalid) = values.iter().find(|value| !is_http_token(value)) {
                return Err(ValidationError::InvalidHeaderName(invalid.clone()));
            }
        }

        if self.exposed_headers.iter().any(|value| value.trim() == "*") {
            return Err(ValidationError::ExposedHeadersCannotContainWildcard);
        }
        if let Some(invalid) = self
            .exposed_headers
            .iter()
            .find(|value| !is_http_token(value.trim()))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        Ok(())
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            path_pattern: PathPattern::match_all(),
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: Vec::new(),
            allow_credentials: false,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

/// True when `value` is exactly the ASCII serialization of a tuple origin.
fn is_serialized_origin(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            let origin = url.origin();
            origin.is_tuple() && eq_ignore_case(&origin.ascii_serialization(), value)
        }
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

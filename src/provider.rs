use crate::config::{ConfigError, CorsConfig};
use crate::policy::{CorsPolicy, ValidationError};
use tracing::info;

/// Owns the validated, read-only [`CorsPolicy`] consulted on every request.
///
/// Build it once during startup and register it with a [`crate::CorsRegistry`];
/// the policy cannot change afterwards, so it can be shared freely across
/// request tasks.
#[derive(Debug, Clone)]
pub struct PolicyProvider {
    policy: CorsPolicy,
}

impl PolicyProvider {
    pub fn new(policy: CorsPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self::install(policy))
    }

    /// Provider for [`CorsPolicy::development`], which always validates.
    pub fn development() -> Self {
        Self::install(CorsPolicy::development())
    }

    pub fn from_config(config: &CorsConfig) -> Result<Self, ConfigError> {
        let policy = config.to_policy()?;
        Ok(Self::install(policy))
    }

    fn install(policy: CorsPolicy) -> Self {
        info!(
            path = %policy.path_pattern,
            origins = ?policy.allowed_origins,
            methods = %policy.allowed_methods.header_value().unwrap_or_default(),
            credentials = policy.allow_credentials,
            "installed CORS policy"
        );
        Self { policy }
    }

    /// The installed policy. Every call returns the same record.
    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }
}

impl AsRef<CorsPolicy> for PolicyProvider {
    fn as_ref(&self) -> &CorsPolicy {
        &self.policy
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

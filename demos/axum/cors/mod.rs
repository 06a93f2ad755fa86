use std::sync::Arc;

use spark_cors::{ConfigError, Cors, CorsConfig, CorsRegistry, PolicyProvider};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

/// Reads `CORS_*` variables (and `.env`), falling back to the development policy.
pub fn build_state() -> Result<AppState, ConfigError> {
    let config = CorsConfig::from_env()?;
    let provider = PolicyProvider::from_config(&config)?;

    let mut registry = CorsRegistry::new();
    registry.register(provider);

    Ok(AppState {
        cors: Arc::new(Cors::new(registry)),
        greeting: "Welcome to the sales dashboard API",
    })
}

pub mod middleware;

pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod config;
mod context;
mod cors;
mod header_builder;
mod headers;
mod origin;
mod path_pattern;
mod policy;
mod provider;
mod registry;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{
    ConfigError, CorsConfig, ENV_ALLOW_CREDENTIALS, ENV_ALLOWED_HEADERS, ENV_ALLOWED_METHODS,
    ENV_ALLOWED_ORIGINS, ENV_EXPOSED_HEADERS, ENV_MAX_AGE, ENV_PATH_PATTERN,
};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use origin::{AllowedOrigins, OriginDecision, is_same_origin};
pub use path_pattern::{PathPattern, PatternError};
pub use policy::{CorsPolicy, ValidationError};
pub use provider::PolicyProvider;
pub use registry::CorsRegistry;
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};

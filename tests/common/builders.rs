#![allow(dead_code)]

use spark_cors::constants::method;
use spark_cors::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsPolicy, PathPattern,
    PolicyProvider, RequestContext,
};

/// Starts from the development policy and overrides selected fields.
pub struct CorsBuilder {
    policy: CorsPolicy,
}

impl Default for CorsBuilder {
    fn default() -> Self {
        Self {
            policy: CorsPolicy::development(),
        }
    }
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_pattern(mut self, pattern: &str) -> Self {
        self.policy.path_pattern = PathPattern::new(pattern).expect("valid path pattern");
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_origins = AllowedOrigins::list(origins);
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.policy.allowed_origins = AllowedOrigins::Any;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.allowed_methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.policy.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.policy.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: Option<u64>) -> Self {
        self.policy.max_age = value;
        self
    }

    pub fn provider(self) -> PolicyProvider {
        PolicyProvider::new(self.policy).expect("valid CORS policy")
    }

    pub fn build(self) -> Cors {
        Cors::from_provider(self.provider())
    }
}

/// Owns the request parts so tests can pass `String`s and `&str`s alike.
pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            path: "/".into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(&self, cors: &Cors) -> CorsDecision {
        cors.check(&RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        })
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}

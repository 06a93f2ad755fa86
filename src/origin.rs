use crate::util::{dedup_ignore_case, eq_ignore_case};
use url::Url;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origins permitted to receive CORS headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Wildcard `*`. Cannot be combined with credentials.
    Any,
    /// Exact `scheme://host[:port]` values, compared case-insensitively.
    List(Vec<String>),
}

/// Outcome of matching a request origin against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    Disallow,
    Skip,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an exact-match list. Trailing slashes are stripped, duplicates
    /// dropped, and a lone `*` collapses into [`AllowedOrigins::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deduped = dedup_ignore_case(
            values
                .into_iter()
                .map(|value| value.into().trim().trim_end_matches('/').to_string()),
        );

        if deduped.len() == 1 && deduped[0] == "*" {
            return Self::Any;
        }

        Self::List(deduped)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin.filter(|origin| !origin.is_empty()) else {
            return OriginDecision::Skip;
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any => OriginDecision::Any,
            Self::List(values) => {
                if values
                    .iter()
                    .any(|allowed| eq_ignore_case(allowed, origin))
                {
                    OriginDecision::Exact(origin.to_string())
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }

    /// Whether the response depends on the request origin and needs `Vary: Origin`.
    pub fn varies_by_origin(&self) -> bool {
        !self.is_any()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedOrigins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

/// Whether `origin` names the server itself, given the scheme the request
/// arrived on and its `Host` header value.
///
/// Scheme, host and port must all agree; default ports are implied. Browsers
/// send `Origin` on same-origin `POST`, `PUT` and `DELETE`, and hosts skip
/// CORS evaluation for those.
pub fn is_same_origin(origin: &str, scheme: &str, host: &str) -> bool {
    let (Ok(request_origin), Ok(server)) = (
        Url::parse(origin.trim()),
        Url::parse(&format!("{}://{}", scheme.trim(), host.trim())),
    ) else {
        return false;
    };
    let request_origin = request_origin.origin();
    request_origin.is_tuple() && request_origin == server.origin()
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;

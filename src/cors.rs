use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;
use crate::provider::PolicyProvider;
use crate::registry::CorsRegistry;
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use tracing::{debug, trace};

/// Evaluates requests against the policies in a [`CorsRegistry`].
///
/// Immutable once built; wrap it in an `Arc` to share it with request tasks.
#[derive(Debug, Clone)]
pub struct Cors {
    registry: CorsRegistry,
}

impl Cors {
    pub fn new(registry: CorsRegistry) -> Self {
        Self { registry }
    }

    pub fn from_provider(provider: PolicyProvider) -> Self {
        Self::new(CorsRegistry::from(provider))
    }

    pub fn policy_for(&self, path: &str) -> Option<&CorsPolicy> {
        self.registry.find(path)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.origin.is_none_or(str::is_empty) {
            return CorsDecision::NotApplicable;
        }

        let Some(policy) = self.registry.find(request.path) else {
            trace!(path = request.path, "no CORS mapping for path");
            return CorsDecision::NotApplicable;
        };

        match preflight_method(request) {
            Some(requested_method) => Self::process_preflight(policy, request, requested_method),
            None => Self::process_simple(policy, request),
        }
    }

    fn process_preflight(
        policy: &CorsPolicy,
        request: &RequestContext<'_>,
        requested_method: &str,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(policy);

        let mut headers = match builder.build_origin_headers(request.origin) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                return Self::reject_preflight(
                    policy,
                    request,
                    headers,
                    PreflightRejectionReason::OriginNotAllowed,
                );
            }
            OriginOutcome::Allow(headers) => headers,
        };

        if !policy.allowed_methods.allows_method(requested_method) {
            return Self::reject_preflight(
                policy,
                request,
                vary_headers(policy),
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            );
        }

        if !policy
            .allowed_headers
            .allows_headers(request.access_control_request_headers)
        {
            return Self::reject_preflight(
                policy,
                request,
                vary_headers(policy),
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: request
                        .access_control_request_headers
                        .unwrap_or_default()
                        .to_string(),
                },
            );
        }

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        trace!(
            origin = request.origin.unwrap_or_default(),
            path = request.path,
            requested_method,
            "CORS preflight accepted"
        );
        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        }
    }

    fn process_simple(policy: &CorsPolicy, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(policy);

        let mut headers = match builder.build_origin_headers(request.origin) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                return Self::reject_simple(
                    request,
                    headers,
                    SimpleRejectionReason::OriginNotAllowed,
                );
            }
            OriginOutcome::Allow(headers) => headers,
        };

        if !policy.allowed_methods.allows_method(request.method) {
            return Self::reject_simple(
                request,
                vary_headers(policy),
                SimpleRejectionReason::MethodNotAllowed {
                    method: request.method.to_string(),
                },
            );
        }

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        trace!(
            origin = request.origin.unwrap_or_default(),
            path = request.path,
            method = request.method,
            "CORS request accepted"
        );
        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn reject_preflight(
        policy: &CorsPolicy,
        request: &RequestContext<'_>,
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        debug!(
            origin = request.origin.unwrap_or_default(),
            path = request.path,
            mapping = %policy.path_pattern,
            ?reason,
            "CORS preflight rejected"
        );
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }

    fn reject_simple(
        request: &RequestContext<'_>,
        headers: HeaderCollection,
        reason: SimpleRejectionReason,
    ) -> CorsDecision {
        debug!(
            origin = request.origin.unwrap_or_default(),
            path = request.path,
            ?reason,
            "CORS request rejected"
        );
        CorsDecision::SimpleRejected(SimpleRejection {
            headers: headers.into_headers(),
            reason,
        })
    }
}

/// The requested method when `request` is a preflight: `OPTIONS` carrying a
/// non-empty `Access-Control-Request-Method`. Any other `OPTIONS` is an actual request.
fn preflight_method<'a>(request: &RequestContext<'a>) -> Option<&'a str> {
    if !request.method.trim().eq_ignore_ascii_case(method::OPTIONS) {
        return None;
    }
    request
        .access_control_request_method
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Headers carried by a rejection: `Vary: Origin` when the answer depends on it.
fn vary_headers(policy: &CorsPolicy) -> HeaderCollection {
    let mut headers = HeaderCollection::new();
    if policy.allowed_origins.varies_by_origin() {
        headers.add_vary(header::ORIGIN);
    }
    headers
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;

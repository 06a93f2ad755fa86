use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::policy::CorsPolicy;

pub(crate) enum OriginOutcome {
    Skip,
    Disallow(HeaderCollection),
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_origin_headers(&self, request_origin: Option<&str>) -> OriginOutcome {
        let varies = self.policy.allowed_origins.varies_by_origin();
        match self.policy.allowed_origins.resolve(request_origin) {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Exact(value) => {
                let mut headers = HeaderCollection::with_estimate(2);
                if varies {
                    headers.add_vary(header::ORIGIN);
                }
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::with_estimate(1);
                if varies {
                    headers.add_vary(header::ORIGIN);
                }
                OriginOutcome::Disallow(headers)
            }
            OriginDecision::Skip => OriginOutcome::Skip,
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(seconds) = self.policy.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        let entries = self
            .policy
            .exposed_headers
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>();

        if !entries.is_empty() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, entries.join(","));
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

use crate::headers::Headers;

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    PreflightAccepted { headers: Headers },
    PreflightRejected(PreflightRejection),
    SimpleAccepted { headers: Headers },
    SimpleRejected(SimpleRejection),
    /// Not a cross-origin request, or no policy covers the path.
    NotApplicable,
}

impl CorsDecision {
    /// Headers to write on the response, if any.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers } | Self::SimpleAccepted { headers } => Some(headers),
            Self::PreflightRejected(rejection) => Some(&rejection.headers),
            Self::SimpleRejected(rejection) => Some(&rejection.headers),
            Self::NotApplicable => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Self::PreflightAccepted { .. } | Self::SimpleAccepted { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { method: String },
}

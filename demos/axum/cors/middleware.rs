use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::HOST},
    middleware::Next,
    response::{IntoResponse, Response},
};
use spark_cors::{
    CorsDecision, Headers, PreflightRejectionReason, RequestContext, SimpleRejectionReason,
    constants::header, is_same_origin,
};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    if owned_ctx.is_same_origin() {
        return next.run(request).await;
    }
    let context = owned_ctx.as_request_context();

    match state.cors.check(&context) {
        CorsDecision::PreflightAccepted { headers } => {
            header_response(StatusCode::NO_CONTENT, &headers, Body::empty())
        }
        CorsDecision::PreflightRejected(rejection) => header_response(
            StatusCode::FORBIDDEN,
            &rejection.headers,
            Body::from(rejection_message(&rejection.reason)),
        ),
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::SimpleRejected(rejection) => header_response(
            StatusCode::FORBIDDEN,
            &rejection.headers,
            Body::from(simple_rejection_message(&rejection.reason)),
        ),
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn header_response(status: StatusCode, headers: &Headers, body: Body) -> Response {
    let mut response = (status, body).into_response();
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn rejection_message(reason: &PreflightRejectionReason) -> String {
    match reason {
        PreflightRejectionReason::OriginNotAllowed => {
            "Preflight rejected: origin not allowed".into()
        }
        PreflightRejectionReason::MethodNotAllowed { requested_method } => {
            format!("Preflight rejected: method '{requested_method}' not allowed")
        }
        PreflightRejectionReason::HeadersNotAllowed { requested_headers } => {
            format!("Preflight rejected: headers '{requested_headers}' not allowed")
        }
    }
}

fn simple_rejection_message(reason: &SimpleRejectionReason) -> String {
    match reason {
        SimpleRejectionReason::OriginNotAllowed => {
            "Cross-origin request rejected: origin not allowed".into()
        }
        SimpleRejectionReason::MethodNotAllowed { method } => {
            format!("Cross-origin request rejected: method '{method}' not allowed")
        }
    }
}

struct OwnedRequestContext {
    scheme: String,
    host: Option<String>,
    method: String,
    path: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        // Behind a TLS-terminating proxy the URI carries no scheme.
        let scheme = request
            .uri()
            .scheme_str()
            .map(str::to_string)
            .or_else(|| header_value(headers, "x-forwarded-proto"))
            .unwrap_or_else(|| "http".to_string());

        Self {
            scheme,
            host: header_value(headers, HOST.as_str()),
            method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn is_same_origin(&self) -> bool {
        match (&self.origin, &self.host) {
            (Some(origin), Some(host)) => is_same_origin(origin, &self.scheme, host),
            _ => false,
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

use crate::util::{dedup_ignore_case, split_comma_list};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every request header is allowed and preflights answer "*"
    #[default]
    Any,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deduped = dedup_ignore_case(values);
        if deduped.len() == 1 && deduped[0] == "*" {
            return Self::Any;
        }
        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Checks every name in an `Access-Control-Request-Headers` value.
    pub fn allows_headers(&self, request_headers: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_comma_list(request_headers.unwrap_or_default()).all(
                |header| {
                    allowed
                        .iter()
                        .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                },
            ),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;

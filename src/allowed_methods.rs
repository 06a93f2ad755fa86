use crate::constants::method;
use crate::util::dedup_ignore_case;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emit the wildcard `*` and accept any requested method.
    Any,
    /// Emit a comma-separated list. Membership checks ignore ASCII case.
    List(Vec<String>),
}

impl AllowedMethods {
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

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        if requested.is_empty() {
            return false;
        }
        match self {
            Self::Any => true,
            Self::List(values) => values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(requested)),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;

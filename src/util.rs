/// Characters besides ASCII alphanumerics allowed in an RFC 9110 `token`.
const TOKEN_SYMBOLS: &[u8] = b"!#$%&'*+-.^_`|~";

/// Case-insensitive comparison. Non-ASCII input falls back to Unicode lowercasing.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Method names and header field names must be tokens.
pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || TOKEN_SYMBOLS.contains(&byte))
}

pub(crate) fn split_comma_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Trims, drops blanks and keeps the first spelling of case-insensitive duplicates.
pub(crate) fn dedup_ignore_case<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().fold(Vec::new(), |mut kept, value| {
        let value = value.into();
        let trimmed = value.trim();
        if !trimmed.is_empty() && !kept.iter().any(|seen: &String| eq_ignore_case(seen, trimmed)) {
            kept.push(trimmed.to_string());
        }
        kept
    })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

#![allow(dead_code)]

use spark_cors::Headers;
use spark_cors::constants::header;
use std::collections::HashSet;

/// Case-insensitive lookup; emitted names use canonical casing but callers may not.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .or_else(|| {
            headers
                .iter()
                .find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value))
        })
        .map(String::as_str)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// True when any `Access-Control-*` response header is present.
pub fn has_any_cors_header(headers: &Headers) -> bool {
    const PREFIX: &str = "access-control-";
    headers.keys().any(|name| {
        name.len() >= PREFIX.len()
            && name.as_bytes()[..PREFIX.len()].eq_ignore_ascii_case(PREFIX.as_bytes())
    })
}

pub fn vary_values(headers: &Headers) -> HashSet<&str> {
    let Some(vary) = header_value(headers, header::VARY) else {
        return HashSet::new();
    };
    vary.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

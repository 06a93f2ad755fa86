use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(&value);
        } else {
            self.headers.insert(name.to_string(), value);
        }
    }

    /// Appends to `Vary`, skipping names already present in any case.
    pub(crate) fn add_vary(&mut self, value: &str) {
        let incoming: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if incoming.is_empty() {
            return;
        }

        let entry = self.headers.entry(header::VARY.to_string()).or_default();
        for name in incoming {
            let present = entry
                .split(',')
                .map(str::trim)
                .any(|existing| existing.eq_ignore_ascii_case(name));
            if present {
                continue;
            }
            if !entry.is_empty() {
                entry.push_str(", ");
            }
            entry.push_str(name);
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

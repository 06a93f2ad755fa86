use crate::constants::MATCH_ALL_PATHS;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 2_048;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("path pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),
    #[error("path pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("failed to compile path pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling path pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
}

/// Ant-style request path matcher (`/**`, `/api/**`, `/users/*/avatar`, `/v?/items`).
///
/// `**` spans any number of segments, `*` stays inside one segment and `?`
/// matches a single non-separator character.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    matcher: PathMatcher,
}

#[derive(Clone)]
enum PathMatcher {
    All,
    Regex(Regex),
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, PATTERN_COMPILE_BUDGET)
    }

    pub fn match_all() -> Self {
        Self {
            source: MATCH_ALL_PATHS.to_string(),
            matcher: PathMatcher::All,
        }
    }

    fn compile(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }
        if pattern == MATCH_ALL_PATHS {
            return Ok(Self::match_all());
        }

        let started = Instant::now();
        let regex = Regex::new(&translate(pattern))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self {
            source: pattern.to_string(),
            matcher: PathMatcher::Regex(regex),
        })
    }

    #[cfg(test)]
    pub(crate) fn new_with_budget(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        Self::compile(pattern, budget)
    }

    /// Tests `path` against the pattern, ignoring any `?query` suffix.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        match &self.matcher {
            PathMatcher::All => true,
            PathMatcher::Regex(regex) => regex.is_match(path),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self.matcher, PathMatcher::All)
    }
}

fn translate(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2 + 2);
    regex.push('^');
    for segment in pattern[1..].split('/') {
        if segment == "**" {
            regex.push_str("(?:/[^/]*)*");
            continue;
        }
        regex.push('/');
        for ch in segment.chars() {
            match ch {
                '*' => regex.push_str("[^/]*"),
                '?' => regex.push_str("[^/]"),
                // `\<` and `\>` are word-boundary assertions, so those stay bare.
                ch if ch.is_ascii_punctuation() && ch != '<' && ch != '>' => {
                    regex.push('\\');
                    regex.push(ch);
                }
                ch => regex.push(ch),
            }
        }
    }
    regex.push('$');
    regex
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::match_all()
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;

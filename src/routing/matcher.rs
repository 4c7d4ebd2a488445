//! Route matching logic.
//!
//! # Responsibilities
//! - Evaluate a request path against a stored pattern
//! - One matcher per match type (literal, glob, regex, flask)
//! - Optional case-insensitive comparison
//!
//! # Design Decisions
//! - Path is coerced to a leading slash before matching
//! - Glob, regex and flask patterns must match the whole path
//! - A pattern that fails to compile never matches; errors are not raised here
//!   because validation already happened when the alias was written
//! - Literal comparison retries without trailing slashes on mismatch

use std::borrow::Cow;

use regex::Regex;

use crate::pattern::glob::compile_glob;
use crate::pattern::normalize::compile_regex;
use crate::pattern::{MatchType, RouteTemplate};

/// Trait for matching request paths against a compiled pattern.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path satisfies this pattern.
    fn matches(&self, path: &str) -> bool;
}

/// Exact path comparison.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    expected: String,
    ignore_case: bool,
}

impl LiteralMatcher {
    pub fn new(pattern: impl Into<String>, ignore_case: bool) -> Self {
        let pattern = pattern.into();
        Self {
            expected: if ignore_case { pattern.to_lowercase() } else { pattern },
            ignore_case,
        }
    }
}

impl PathMatcher for LiteralMatcher {
    fn matches(&self, path: &str) -> bool {
        let path = with_leading_slash(path);
        let candidate = if self.ignore_case {
            Cow::Owned(path.to_lowercase())
        } else {
            path
        };
        if candidate == self.expected {
            return true;
        }
        candidate.trim_end_matches('/') == self.expected.trim_end_matches('/')
    }
}

/// Shell-style wildcard match.
#[derive(Debug, Clone)]
pub struct GlobPathMatcher {
    glob: Regex,
}

impl GlobPathMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Option<Self> {
        compile_glob(pattern, ignore_case)
            .ok()
            .map(|glob| Self { glob })
    }
}

impl PathMatcher for GlobPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.glob.is_match(&*with_leading_slash(path))
    }
}

/// Full-match regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Option<Self> {
        compile_regex(pattern, ignore_case)
            .ok()
            .map(|regex| Self { regex })
    }
}

impl PathMatcher for RegexMatcher {
    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(&with_leading_slash(path))
    }
}

/// Flask-style path template.
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    template: RouteTemplate,
}

impl TemplateMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Option<Self> {
        RouteTemplate::compile(pattern, ignore_case)
            .ok()
            .map(|template| Self { template })
    }
}

impl PathMatcher for TemplateMatcher {
    fn matches(&self, path: &str) -> bool {
        self.template.is_match(&with_leading_slash(path))
    }
}

/// Stands in for a pattern that no longer compiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverMatcher;

impl PathMatcher for NeverMatcher {
    fn matches(&self, _path: &str) -> bool {
        false
    }
}

/// Build the matcher for a stored pattern.
pub fn compile_matcher(
    match_type: MatchType,
    pattern: &str,
    ignore_case: bool,
) -> Box<dyn PathMatcher> {
    let compiled: Option<Box<dyn PathMatcher>> = match match_type {
        MatchType::Literal => Some(Box::new(LiteralMatcher::new(pattern, ignore_case))),
        MatchType::Glob => GlobPathMatcher::new(pattern, ignore_case)
            .map(|m| Box::new(m) as Box<dyn PathMatcher>),
        MatchType::Regex => {
            RegexMatcher::new(pattern, ignore_case).map(|m| Box::new(m) as Box<dyn PathMatcher>)
        }
        MatchType::Flask => TemplateMatcher::new(pattern, ignore_case)
            .map(|m| Box::new(m) as Box<dyn PathMatcher>),
    };
    compiled.unwrap_or_else(|| {
        tracing::debug!(%match_type, pattern, "Stored pattern no longer compiles");
        Box::new(NeverMatcher)
    })
}

/// Check whether `path` satisfies `pattern`.
pub fn matches_path(match_type: MatchType, pattern: &str, path: &str, ignore_case: bool) -> bool {
    compile_matcher(match_type, pattern, ignore_case).matches(path)
}

/// Same as [`matches_path`] with the match type given as a token.
/// Unknown tokens never match.
pub fn matches_path_str(match_type: &str, pattern: &str, path: &str, ignore_case: bool) -> bool {
    match match_type.parse::<MatchType>() {
        Ok(mt) => matches_path(mt, pattern, path, ignore_case),
        Err(_) => false,
    }
}

fn with_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

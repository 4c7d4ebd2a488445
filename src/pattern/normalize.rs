//! Pattern canonicalization and validation.
//!
//! # Responsibilities
//! - Produce the canonical stored form of a pattern per match type
//! - Reject structurally invalid patterns at authoring time
//! - Share the glob/regex compile step with the path matcher
//!
//! # Design Decisions
//! - Literal: exactly one leading slash, no trailing slash (except root)
//! - Glob and flask: leading slash enforced, syntax kept verbatim
//! - Regex: stored verbatim, compiled only to check it
//! - Every canonical form normalizes to itself

use regex::{Regex, RegexBuilder};

use crate::pattern::glob::compile_glob;
use crate::pattern::template::RouteTemplate;
use crate::pattern::types::{MatchType, PatternError};

/// Normalize a pattern for storage.
///
/// `fallback_name` is used when a literal pattern is empty, so that
/// `" -> /target"` on an alias called `docs` becomes `/docs`.
pub fn normalise_pattern(
    match_type: MatchType,
    pattern: &str,
    fallback_name: Option<&str>,
) -> Result<String, PatternError> {
    match match_type {
        MatchType::Literal => normalise_literal(pattern, fallback_name),
        MatchType::Glob => {
            let glob = ensure_leading_slash(non_empty(pattern, MatchType::Glob)?);
            compile_glob(&glob, false).map_err(|e| PatternError::InvalidGlob(e.to_string()))?;
            Ok(glob)
        }
        MatchType::Regex => {
            non_empty(pattern, MatchType::Regex)?;
            compile_regex(pattern, false).map_err(|e| PatternError::InvalidRegex(e.to_string()))?;
            Ok(pattern.to_string())
        }
        MatchType::Flask => {
            let template = ensure_leading_slash(non_empty(pattern, MatchType::Flask)?);
            RouteTemplate::parse(&template)?;
            Ok(template)
        }
    }
}

/// Same as [`normalise_pattern`], with the match type given as a token.
pub fn normalise_pattern_str(
    match_type: &str,
    pattern: &str,
    fallback_name: Option<&str>,
) -> Result<String, PatternError> {
    normalise_pattern(match_type.parse()?, pattern, fallback_name)
}

fn normalise_literal(pattern: &str, fallback_name: Option<&str>) -> Result<String, PatternError> {
    let mut raw = pattern.trim();
    if raw.is_empty() {
        raw = fallback_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(PatternError::Empty(MatchType::Literal))?;
    }
    if raw.contains('\n') || raw.contains('\r') {
        return Err(PatternError::ContainsNewline);
    }
    Ok(canonical_literal(raw))
}

/// One leading slash, no trailing slash, root stays `/`.
pub(crate) fn canonical_literal(raw: &str) -> String {
    let body = raw.trim_start_matches('/').trim_end_matches('/');
    format!("/{body}")
}

fn non_empty(pattern: &str, match_type: MatchType) -> Result<&str, PatternError> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        Err(PatternError::Empty(match_type))
    } else {
        Ok(trimmed)
    }
}

pub(crate) fn ensure_leading_slash(pattern: &str) -> String {
    if pattern.starts_with('/') {
        pattern.to_string()
    } else {
        format!("/{pattern}")
    }
}

/// Compile a regex anchored at both ends.
pub(crate) fn compile_regex(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
        .case_insensitive(ignore_case)
        .build()
}

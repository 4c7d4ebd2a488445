//! Match type and pattern error definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Algorithm used to normalize and evaluate a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Exact path comparison.
    Literal,
    /// Shell-style wildcard (`*`, `?`, `[...]`).
    Glob,
    /// Regular expression, full match.
    Regex,
    /// Path template with `<converter:name>` placeholders.
    Flask,
}

impl MatchType {
    /// All variants, in priority order.
    pub const ALL: [MatchType; 4] = [
        MatchType::Literal,
        MatchType::Flask,
        MatchType::Glob,
        MatchType::Regex,
    ];

    /// Lowercase token used in definitions and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Literal => "literal",
            MatchType::Glob => "glob",
            MatchType::Regex => "regex",
            MatchType::Flask => "flask",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(MatchType::Literal),
            "glob" => Ok(MatchType::Glob),
            "regex" => Ok(MatchType::Regex),
            "flask" => Ok(MatchType::Flask),
            _ => Err(PatternError::UnknownMatchType(s.to_string())),
        }
    }
}

/// Errors raised while normalizing a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern is empty and no alias name was available to fall back on.
    #[error("Pattern cannot be empty for {0} aliases.")]
    Empty(MatchType),

    /// Literal patterns are a single path.
    #[error("Literal patterns cannot span multiple lines.")]
    ContainsNewline,

    /// Regular expression failed to compile.
    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    /// Glob could not be translated into a matcher.
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Path template failed to parse.
    #[error("Invalid route pattern: {0}")]
    InvalidTemplate(String),

    /// Type token outside literal/glob/regex/flask.
    #[error("Unknown match type '{0}'.")]
    UnknownMatchType(String),
}

//! Open-redirect guard for alias targets.
//!
//! # Responsibilities
//! - Reject empty targets
//! - Reject protocol-relative targets (`//host/path`)
//! - Reject anything carrying a scheme or network location
//!
//! # Design Decisions
//! - The `url` crate decides what counts as absolute: a target is in-app only
//!   when parsing fails with "relative URL without a base"
//! - Accepted targets pass through untouched (query and fragment included)

use thiserror::Error;
use url::{ParseError, Url};

/// Reasons a redirect target is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("Target path cannot be empty.")]
    Empty,

    /// Browsers resolve `//host` against the current scheme.
    #[error("Target path must stay within this application.")]
    ProtocolRelative,

    /// Target names a scheme (`https:`, `mailto:`, `javascript:` ...).
    #[error("Target path must stay within this application.")]
    External,
}

/// Validate a redirect target and return it trimmed.
pub fn validate_target_path(target: &str) -> Result<String, TargetError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(TargetError::Empty);
    }
    if target.starts_with("//") {
        return Err(TargetError::ProtocolRelative);
    }
    match Url::parse(target) {
        Err(ParseError::RelativeUrlWithoutBase) => Ok(target.to_string()),
        // Parsed, or carries a scheme the parser then rejected (`http://`).
        _ => Err(TargetError::External),
    }
}

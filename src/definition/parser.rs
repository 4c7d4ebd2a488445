//! Primary-line definition parser.
//!
//! # Responsibilities
//! - Find the first mapping line of a definition
//! - Resolve match type and flags from the options bracket
//! - Normalize the pattern and validate the target
//!
//! # Design Decisions
//! - Only the first mapping line is read; later lines belong to the summarizer
//! - Errors are returned eagerly, the caller decides how to report them

use serde::Serialize;

use crate::definition::error::AliasDefinitionError;
use crate::definition::grammar::{is_blank_or_comment, split_mapping, strip_inline_comment, SEPARATOR};
use crate::pattern::{normalise_pattern, MatchType};
use crate::security::validate_target_path;

/// Result of parsing the primary line of a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAliasDefinition {
    pub match_type: MatchType,
    /// Canonical pattern, see [`normalise_pattern`].
    pub match_pattern: String,
    /// Validated in-app target.
    pub target_path: String,
    pub ignore_case: bool,
    /// Pattern as written, before canonicalization.
    pub pattern_text: String,
}

/// Parse the first mapping line of `text`.
pub fn parse_alias_definition(
    text: &str,
    alias_name: Option<&str>,
) -> Result<ParsedAliasDefinition, AliasDefinitionError> {
    for line in text.lines() {
        if is_blank_or_comment(line) {
            continue;
        }
        let content = strip_inline_comment(line.trim());
        if !content.contains(SEPARATOR) {
            continue;
        }
        return parse_mapping_line(content, alias_name);
    }
    Err(AliasDefinitionError::MissingSeparator)
}

/// Parse one comment-free mapping line.
pub(crate) fn parse_mapping_line(
    line: &str,
    alias_name: Option<&str>,
) -> Result<ParsedAliasDefinition, AliasDefinitionError> {
    let parts = split_mapping(line)?;
    let match_type = parts.options.match_type_or_default();
    let match_pattern = normalise_pattern(match_type, &parts.pattern, alias_name)?;
    let target_path = validate_target_path(&parts.target)?;

    Ok(ParsedAliasDefinition {
        match_type,
        match_pattern,
        target_path,
        ignore_case: parts.options.ignore_case,
        pattern_text: parts.pattern,
    })
}

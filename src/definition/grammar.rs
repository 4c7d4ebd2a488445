//! Line-level grammar shared by the primary-line parser and the summarizer.
//!
//! ```text
//! <pattern> -> <target> [<opt1>, <opt2>, ...]   # comment
//! ```
//!
//! Everything here is syntactic: patterns and targets come back as raw
//! trimmed text and are validated by the callers.

use crate::definition::error::AliasDefinitionError;
use crate::pattern::MatchType;

/// Mapping separator between pattern and target.
pub const SEPARATOR: &str = "->";

/// Columns a tab advances to when measuring indentation.
pub const TAB_WIDTH: usize = 2;

/// A mapping line split into its raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingParts {
    pub pattern: String,
    pub target: String,
    pub options: LineOptions,
}

/// Flags from the `[...]` bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOptions {
    /// Explicit match type, if one was given.
    pub match_type: Option<MatchType>,
    pub ignore_case: bool,
}

impl LineOptions {
    pub fn match_type_or_default(&self) -> MatchType {
        self.match_type.unwrap_or(MatchType::Literal)
    }
}

pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Drop a `#` comment that follows whitespace.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut prev_ws = false;
    for (idx, ch) in line.char_indices() {
        if ch == '#' && prev_ws {
            return line[..idx].trim_end();
        }
        prev_ws = ch.is_whitespace();
    }
    line
}

/// True for lines that the parsers treat as a mapping.
pub fn is_mapping_line(line: &str) -> bool {
    !is_blank_or_comment(line) && strip_inline_comment(line.trim()).contains(SEPARATOR)
}

/// Expand tabs to the next multiple of `width` columns.
pub fn expand_tabs(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = width - (column % width);
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Nesting depth of a physical line.
pub fn line_depth(line: &str) -> usize {
    let expanded = expand_tabs(line, TAB_WIDTH);
    let indent = expanded.len() - expanded.trim_start_matches(' ').len();
    indent / 2
}

/// Split a comment-free mapping line into pattern, target and options.
pub fn split_mapping(line: &str) -> Result<MappingParts, AliasDefinitionError> {
    let (left, right) = line
        .split_once(SEPARATOR)
        .ok_or(AliasDefinitionError::MissingSeparator)?;

    let (target, options) = match right.find('[') {
        Some(open) => {
            let inner = &right[open + 1..];
            let close = inner
                .find(']')
                .ok_or(AliasDefinitionError::UnterminatedOptions)?;
            let trailing = inner[close + 1..].trim();
            if !trailing.is_empty() {
                return Err(AliasDefinitionError::TrailingText(trailing.to_string()));
            }
            (&right[..open], parse_options(&inner[..close])?)
        }
        None => (right, LineOptions::default()),
    };

    let target = target.trim();
    if target.is_empty() {
        return Err(AliasDefinitionError::MissingTarget);
    }

    Ok(MappingParts {
        pattern: left.trim().to_string(),
        target: target.to_string(),
        options,
    })
}

/// Parse the comma-separated contents of an options bracket.
pub fn parse_options(raw: &str) -> Result<LineOptions, AliasDefinitionError> {
    let mut options = LineOptions::default();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.to_ascii_lowercase().as_str() {
            "ignore-case" | "ignorecase" => options.ignore_case = true,
            lowered => {
                let match_type = lowered
                    .parse::<MatchType>()
                    .map_err(|_| AliasDefinitionError::UnknownOption(token.to_string()))?;
                match options.match_type {
                    Some(existing) if existing != match_type => {
                        return Err(AliasDefinitionError::ConflictingMatchTypes);
                    }
                    _ => options.match_type = Some(match_type),
                }
            }
        }
    }
    Ok(options)
}

//! Hierarchical line summarizer.
//!
//! # Responsibilities
//! - Describe every physical line of a definition
//! - Derive nested alias paths from indentation
//! - Capture per-line parse errors instead of failing
//!
//! # Design Decisions
//! - Depth = leading spaces / 2, tabs expanded to width 2
//! - Literal lines compose onto their parent's segments
//! - Glob, regex and flask lines pass the parent's segments through
//! - A line that fails to parse leaves the nesting state untouched
//!
//! ```text
//! docs -> /documentation              alias_path = docs
//!   api -> /docs/api/overview.html    alias_path = docs/api
//!     v2 -> /docs/api/v2              alias_path = docs/api/v2
//!   *.pdf -> /files [glob]            alias_path = *.pdf
//! ```

use serde::{Serialize, Serializer};

use crate::definition::error::AliasDefinitionError;
use crate::definition::grammar::{
    expand_tabs, is_blank_or_comment, line_depth, strip_inline_comment, SEPARATOR, TAB_WIDTH,
};
use crate::definition::parser::parse_mapping_line;
use crate::pattern::MatchType;

/// What the summarizer knows about one physical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionLineSummary {
    /// 1-based line number.
    pub line_number: usize,
    /// Line as written.
    pub text: String,
    pub is_mapping: bool,
    pub match_type: Option<MatchType>,
    pub match_pattern: Option<String>,
    pub ignore_case: bool,
    pub target_path: Option<String>,
    #[serde(serialize_with = "serialize_error")]
    pub parse_error: Option<AliasDefinitionError>,
    /// Slash-joined alias path without a leading slash.
    pub alias_path: Option<String>,
    pub depth: usize,
}

impl DefinitionLineSummary {
    fn plain(line_number: usize, text: &str, depth: usize) -> Self {
        Self {
            line_number,
            text: text.to_string(),
            is_mapping: false,
            match_type: None,
            match_pattern: None,
            ignore_case: false,
            target_path: None,
            parse_error: None,
            alias_path: None,
            depth,
        }
    }

    /// A mapping line that parsed cleanly.
    pub fn is_valid_mapping(&self) -> bool {
        self.is_mapping && self.parse_error.is_none()
    }
}

fn serialize_error<S: Serializer>(
    error: &Option<AliasDefinitionError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Split a path into non-empty segments.
pub(crate) fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Summarize every line of a definition.
pub fn summarize_definition_lines(
    text: &str,
    alias_name: Option<&str>,
) -> Vec<DefinitionLineSummary> {
    let root_segments = alias_name.map(path_segments).unwrap_or_default();
    // stack[d] holds the segments accumulated by the latest line at depth d.
    let mut stack: Vec<Vec<String>> = Vec::new();
    let mut summaries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let expanded = expand_tabs(raw, TAB_WIDTH);
        let depth = line_depth(raw);
        let mut summary = DefinitionLineSummary::plain(idx + 1, raw, depth);

        if is_blank_or_comment(&expanded) {
            summaries.push(summary);
            continue;
        }
        let content = strip_inline_comment(expanded.trim());
        if !content.contains(SEPARATOR) {
            summaries.push(summary);
            continue;
        }
        summary.is_mapping = true;

        let parsed = match parse_mapping_line(content, alias_name) {
            Ok(parsed) => parsed,
            Err(err) => {
                summary.parse_error = Some(err);
                summaries.push(summary);
                continue;
            }
        };

        let parent = if depth == 0 {
            Vec::new()
        } else {
            stack
                .get(depth - 1)
                .cloned()
                .unwrap_or_else(|| root_segments.clone())
        };

        let (alias_path, match_pattern, segments) = if parsed.match_type == MatchType::Literal {
            let mut own = path_segments(&parsed.match_pattern);
            if own.is_empty() {
                own = root_segments.clone();
            }
            let mut full = parent;
            full.extend(own);
            let alias_path = full.join("/");
            let pattern = format!("/{alias_path}");
            (alias_path, pattern, full)
        } else {
            let alias_path = parsed.match_pattern.trim_start_matches('/').to_string();
            (alias_path, parsed.match_pattern, parent)
        };
        set_depth(&mut stack, depth, segments);

        summary.match_type = Some(parsed.match_type);
        summary.match_pattern = Some(match_pattern);
        summary.ignore_case = parsed.ignore_case;
        summary.target_path = Some(parsed.target_path);
        summary.alias_path = Some(alias_path);
        summaries.push(summary);
    }

    summaries
}

/// Store `segments` at `depth` and forget anything deeper.
fn set_depth(stack: &mut Vec<Vec<String>>, depth: usize, segments: Vec<String>) {
    stack.truncate(depth);
    while stack.len() < depth {
        let filler = stack.last().cloned().unwrap_or_default();
        stack.push(filler);
    }
    stack.push(segments);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(summaries: &[DefinitionLineSummary]) -> Vec<&DefinitionLineSummary> {
        summaries.iter().filter(|s| s.is_mapping).collect()
    }

    #[test]
    fn test_nested_literal_composes() {
        let text = "docs -> /documentation\n  api -> /docs/api/overview.html";
        let summaries = summarize_definition_lines(text, Some("docs"));
        let entries = mapping(&summaries);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].alias_path.as_deref(), Some("docs"));
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[1].alias_path.as_deref(), Some("docs/api"));
        assert_eq!(entries[1].match_pattern.as_deref(), Some("/docs/api"));
        assert_eq!(entries[1].depth, 1);
        assert_eq!(
            entries[1].target_path.as_deref(),
            Some("/docs/api/overview.html")
        );
    }

    #[test]
    fn test_three_levels_and_sibling_reset() {
        let text = "docs -> /d\n  api -> /a\n    v2 -> /v2\n  guide -> /g\nblog -> /b\n  feed -> /f";
        let summaries = summarize_definition_lines(text, Some("docs"));
        let paths: Vec<_> = summaries
            .iter()
            .map(|s| s.alias_path.clone().unwrap_or_default())
            .collect();
        assert_eq!(
            paths,
            vec!["docs", "docs/api", "docs/api/v2", "docs/guide", "blog", "blog/feed"]
        );
    }

    #[test]
    fn test_non_literal_passes_parent_through() {
        let text = "docs -> /d\n  *.pdf -> /files [glob]\n    api -> /a";
        let summaries = summarize_definition_lines(text, Some("docs"));
        assert_eq!(summaries[1].alias_path.as_deref(), Some("*.pdf"));
        assert_eq!(summaries[1].match_pattern.as_deref(), Some("/*.pdf"));
        assert_eq!(summaries[1].match_type, Some(MatchType::Glob));
        // depth-2 literal composes onto the glob's pass-through (docs)
        assert_eq!(summaries[2].alias_path.as_deref(), Some("docs/api"));
    }

    #[test]
    fn test_non_literal_truncates_deeper_entries() {
        let text = "docs -> /d\n  api -> /a\n    v2 -> /v2\n  .* -> /r [regex]\n      deep -> /x";
        let summaries = summarize_definition_lines(text, Some("docs"));
        // stack[2] was dropped by the regex line, so the depth-3 line
        // composes onto the alias name.
        assert_eq!(summaries[4].depth, 3);
        assert_eq!(summaries[4].alias_path.as_deref(), Some("docs/deep"));
    }

    #[test]
    fn test_indented_first_line_uses_alias_name() {
        let summaries = summarize_definition_lines("  api -> /a", Some("docs"));
        assert_eq!(summaries[0].alias_path.as_deref(), Some("docs/api"));
    }

    #[test]
    fn test_empty_literal_pattern_falls_back() {
        let summaries = summarize_definition_lines(" -> /latest-release", Some("latest"));
        assert_eq!(summaries[0].alias_path.as_deref(), Some("latest"));
        assert_eq!(summaries[0].match_pattern.as_deref(), Some("/latest"));
    }

    #[test]
    fn test_root_literal_resolves_to_alias_name() {
        let text = "docs -> /d\n  / -> /root";
        let summaries = summarize_definition_lines(text, Some("docs"));
        assert_eq!(summaries[1].alias_path.as_deref(), Some("docs/docs"));
    }

    #[test]
    fn test_errors_are_captured_per_line() {
        let text = "docs -> /d\n  bad -> https://evil.example\n  ok -> /ok";
        let summaries = summarize_definition_lines(text, Some("docs"));
        assert!(summaries[1].is_mapping);
        assert!(summaries[1].parse_error.as_ref().unwrap().is_external_target());
        assert!(summaries[1].alias_path.is_none());
        assert!(summaries[2].is_valid_mapping());
        assert_eq!(summaries[2].alias_path.as_deref(), Some("docs/ok"));
    }

    #[test]
    fn test_non_mapping_lines_are_kept() {
        let text = "# heading\n\nprose line\n  docs -> /d # trailing";
        let summaries = summarize_definition_lines(text, None);
        assert_eq!(summaries.len(), 4);
        assert!(!summaries[0].is_mapping);
        assert!(!summaries[1].is_mapping);
        assert!(!summaries[2].is_mapping);
        assert_eq!(summaries[2].text, "prose line");
        assert_eq!(summaries[3].line_number, 4);
        assert_eq!(summaries[3].target_path.as_deref(), Some("/d"));
        assert!(summaries[0].match_type.is_none());
    }

    #[test]
    fn test_tabs_count_as_two_spaces() {
        let text = "docs -> /d\n\tapi -> /a";
        let summaries = summarize_definition_lines(text, Some("docs"));
        assert_eq!(summaries[1].depth, 1);
        assert_eq!(summaries[1].alias_path.as_deref(), Some("docs/api"));
    }

    #[test]
    fn test_serializes_error_as_message() {
        let summaries = summarize_definition_lines("a -> /b [glob, regex]", None);
        let json = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(
            json["parse_error"],
            "Specify only one match type per alias definition."
        );
    }
}

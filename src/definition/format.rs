//! Canonical-form helpers for editing UIs.
//!
//! These render a primary line from structured fields and splice it into
//! existing definition text without disturbing the rest of it.

use crate::definition::grammar::is_mapping_line;
use crate::pattern::MatchType;

/// Render `<pattern> -> <target> [<opts>]`.
///
/// For literal aliases with a name the name is shown as the pattern. The
/// bracket is omitted when there are no options to show.
pub fn format_primary_alias_line(
    match_type: MatchType,
    pattern: &str,
    target: &str,
    ignore_case: bool,
    alias_name: Option<&str>,
) -> String {
    let name = alias_name.map(str::trim).filter(|n| !n.is_empty());
    let shown = match (match_type, name) {
        (MatchType::Literal, Some(name)) => name.to_string(),
        (MatchType::Literal, None) => match pattern.trim().trim_start_matches('/') {
            "" => "/".to_string(),
            relative => relative.to_string(),
        },
        _ => pattern.trim().to_string(),
    };

    let mut options = Vec::new();
    if match_type != MatchType::Literal {
        options.push(match_type.as_str());
    }
    if ignore_case {
        options.push("ignore-case");
    }

    let mut line = format!("{shown} -> {}", target.trim());
    if !options.is_empty() {
        line.push_str(&format!(" [{}]", options.join(", ")));
    }
    line
}

/// Prepend `primary_line` unless the definition already has a mapping line.
pub fn ensure_primary_line(definition: &str, primary_line: &str) -> String {
    if definition.lines().any(is_mapping_line) {
        return definition.to_string();
    }
    let rest = definition.trim_start_matches(['\n', '\r']);
    if rest.trim().is_empty() {
        primary_line.to_string()
    } else {
        format!("{primary_line}\n\n{rest}")
    }
}

/// Replace the first mapping line, keeping its indentation.
pub fn replace_primary_definition_line(definition: &str, primary_line: &str) -> String {
    let mut lines: Vec<String> = definition.split('\n').map(str::to_string).collect();
    let Some(index) = lines.iter().position(|l| is_mapping_line(l)) else {
        return ensure_primary_line(definition, primary_line);
    };

    let old = &lines[index];
    let indent_len = old.len() - old.trim_start().len();
    let carriage = if old.ends_with('\r') { "\r" } else { "" };
    lines[index] = format!("{}{}{carriage}", &old[..indent_len], primary_line.trim());
    lines.join("\n")
}

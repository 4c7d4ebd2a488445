//! Shell-style glob translation.
//!
//! Globs follow `fnmatch` rules: `*` matches any run of characters, `/`
//! included, `?` matches one character, and `[...]` / `[!...]` are character
//! sets. Everything else is literal, braces and backslashes included. A `[`
//! without a closing `]` is an ordinary character.

use regex::{Regex, RegexBuilder};

/// Translate a glob into an unanchored regex body.
pub fn translate_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&escape_char(c)),
        }
    }
    out
}

/// Compile a glob into a regex that must match the whole input.
pub(crate) fn compile_glob(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\A(?s:{})\z", translate_glob(pattern)))
        .case_insensitive(ignore_case)
        .build()
}

/// Index of the `]` closing a set whose body starts at `start`.
///
/// A `]` directly after `[` or `[!` is a member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars
        .get(j..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

fn translate_class(body: &[char]) -> String {
    let (negated, body) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut k = 0;
    while k < body.len() {
        if k + 2 < body.len() && body[k + 1] == '-' {
            let (lo, hi) = (body[k], body[k + 2]);
            // Reversed ranges are empty.
            if lo <= hi {
                items.push_str(&escape_char(lo));
                items.push('-');
                items.push_str(&escape_char(hi));
            }
            k += 3;
        } else {
            items.push_str(&escape_char(body[k]));
            k += 1;
        }
    }

    match (negated, items.is_empty()) {
        (false, true) => "[a&&b]".to_string(),
        (true, true) => ".".to_string(),
        (false, false) => format!("[{items}]"),
        (true, false) => format!("[^{items}]"),
    }
}

fn escape_char(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn glob_matches(pattern: &str, path: &str) -> bool {
        compile_glob(pattern, false).unwrap().is_match(path)
    }

    #[test]
    fn test_translation() {
        assert_eq!(translate_glob("/blog-*"), r"/blog\-.*");
        assert_eq!(translate_glob("/a**b?"), "/a.*b.");
        assert_eq!(translate_glob("/v[!0-9]"), "/v[^0-9]");
        assert_eq!(translate_glob("/x{a,b}"), r"/x\{a,b\}");
    }

    #[parameterized(
        braces_are_literal = { "/api/{v}/*", "/api/{v}/x", true },
        braces_not_alternation = { "/api/{v,w}/*", "/api/v/x", false },
        caret_is_member = { "/v[^0-9]", "/v^", true },
        caret_set_keeps_range = { "/v[^0-9]", "/v7", true },
        caret_set_rejects_other = { "/v[^0-9]", "/vx", false },
        bang_negates = { "/v[!0-9]", "/vx", true },
        bang_negates_digit = { "/v[!0-9]", "/v7", false },
        unclosed_class_is_literal = { "/page[1", "/page[1", true },
        unclosed_brace_is_literal = { "/x{", "/x{", true },
        backslash_is_literal = { r"/a\b", r"/a\b", true },
        bracket_first_is_member = { "/[]]", "/]", true },
        negated_bracket_first = { "/[!]]", "/]", false },
        dash_at_edge = { "/[a-]", "/-", true },
        reversed_range_is_empty = { "/[z-a]", "/m", false },
        star_crosses_slash = { "/files/*", "/files/a/b.pdf", true },
        dot_is_literal = { "/*.pdf", "/xpdf", false },
    )]
    fn shell_glob_semantics(pattern: &str, path: &str, expected: bool) {
        assert_eq!(glob_matches(pattern, path), expected);
    }

    #[test]
    fn test_ignore_case() {
        assert!(compile_glob("/Blog-*", true).unwrap().is_match("/BLOG-1"));
        assert!(!compile_glob("/Blog-*", false).unwrap().is_match("/BLOG-1"));
    }
}

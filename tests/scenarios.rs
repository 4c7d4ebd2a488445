//! End-to-end behavior of the alias definition language.

use alias_router::definition::{
    ensure_primary_line, format_primary_alias_line, parse_alias_definition,
    replace_primary_definition_line, summarize_definition_lines,
};
use alias_router::pattern::{normalise_pattern, MatchType};
use alias_router::routing::{collect_alias_routes, matches_path, Alias, AliasSource};

#[test]
fn test_simple_literal_definition() {
    let parsed = parse_alias_definition("docs -> /documentation", Some("docs")).unwrap();
    assert_eq!(parsed.match_type, MatchType::Literal);
    assert_eq!(parsed.match_pattern, "/docs");
    assert_eq!(parsed.target_path, "/documentation");
    assert!(!parsed.ignore_case);
}

#[test]
fn test_nested_definition() {
    let text = "docs -> /documentation\n  api -> /docs/api/overview.html";
    let summaries = summarize_definition_lines(text, Some("docs"));
    let entries: Vec<_> = summaries.iter().filter(|s| s.is_mapping).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].alias_path.as_deref(), Some("docs"));
    assert_eq!(entries[1].alias_path.as_deref(), Some("docs/api"));
    assert_eq!(entries[1].match_pattern.as_deref(), Some("/docs/api"));
}

#[test]
fn test_glob_ignore_case_definition() {
    let parsed = parse_alias_definition("blog-* -> /posts [glob, ignore-case]", None).unwrap();
    assert_eq!(parsed.match_type, MatchType::Glob);
    assert!(parsed.ignore_case);
    assert_eq!(parsed.match_pattern, "/blog-*");
    assert!(matches_path(MatchType::Glob, "/blog-*", "/BLOG-2024", true));
}

#[test]
fn test_external_target_rejected_everywhere() {
    let err = parse_alias_definition("docs -> https://example.com", Some("docs")).unwrap_err();
    assert!(err.to_string().contains("stay within this application"));

    let rules = collect_alias_routes(&Alias::new("docs", "docs -> https://example.com"));
    assert!(rules.is_empty());
}

#[test]
fn test_conflicting_options() {
    let err = parse_alias_definition("docs -> /documentation [glob, regex]", None).unwrap_err();
    assert!(err.to_string().contains("only one match type"));
}

#[test]
fn test_empty_definition_fallback() {
    let rules = collect_alias_routes(&Alias::new("latest", ""));
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].match_type, MatchType::Literal);
    assert_eq!(rules[0].match_pattern, "/latest");
    assert_eq!(rules[0].target_path, "/latest");
}

#[test]
fn test_legacy_alias_routes_to_itself() {
    let rules = AliasSource::Legacy {
        name: "old-home".into(),
    }
    .routes();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].target_path, "/old-home");
}

#[test]
fn test_format_then_parse_round_trip() {
    let cases = [
        (MatchType::Literal, "/docs", "/documentation", false, Some("docs")),
        (MatchType::Literal, "/docs/api", "/api?x=1#top", true, None),
        (MatchType::Glob, "/blog-*", "/posts", true, Some("blog")),
        (MatchType::Regex, "/v[0-9]+", "/versions", false, None),
        (MatchType::Flask, "/post/<int:id>", "/posts/show", false, Some("post")),
    ];
    for (mt, pattern, target, ignore_case, name) in cases {
        let line = format_primary_alias_line(mt, pattern, target, ignore_case, name);
        let parsed = parse_alias_definition(&line, name).unwrap();
        assert_eq!(parsed.match_type, mt, "{line}");
        assert_eq!(parsed.target_path, target, "{line}");
        assert_eq!(parsed.ignore_case, ignore_case, "{line}");
        assert_eq!(
            parsed.match_pattern,
            normalise_pattern(mt, pattern, name).unwrap(),
            "{line}"
        );
    }
}

#[test]
fn test_editing_workflow() {
    let notes = "Shortcuts for the docs site.";
    let primary = format_primary_alias_line(MatchType::Literal, "/docs", "/documentation", false, Some("docs"));
    let definition = ensure_primary_line(notes, &primary);
    assert_eq!(definition, "docs -> /documentation\n\nShortcuts for the docs site.");

    let with_child = format!("{definition}\n  api -> /api");
    let updated_line =
        format_primary_alias_line(MatchType::Literal, "/docs", "/manual", true, Some("docs"));
    let updated = replace_primary_definition_line(&with_child, &updated_line);
    assert!(updated.starts_with("docs -> /manual [ignore-case]\n"));

    let rules = collect_alias_routes(&Alias::new("docs", updated));
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].target_path, "/manual");
    assert!(rules[0].matches("/DOCS"));
    assert_eq!(rules[1].alias_path, "docs/api");
}

//! Loading an alias file and evaluating paths against it.

use alias_router::config::load_config;
use alias_router::pattern::MatchType;
use alias_router::routing::RouteTable;

mod common;

#[test]
fn test_sample_file_loads_and_validates() {
    let file = common::alias_file(common::SAMPLE_ALIASES);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.aliases.len(), 6);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_route_table_from_file() {
    let file = common::alias_file(common::SAMPLE_ALIASES);
    let config = load_config(file.path()).unwrap();
    let sources = config.sources();
    let table = RouteTable::from_aliases(&sources);

    // docs: 4 rules, blog: 1, post: 1, catch-all: 1, latest: 1, old-home: 1
    assert_eq!(table.len(), 9);

    let hits = table.candidates("/docs/api/v2");
    assert_eq!(hits[0].match_type, MatchType::Literal);
    assert_eq!(hits[0].target_path, "/docs/api/v2");
    assert_eq!(hits[0].alias_path, "docs/api/v2");
    assert_eq!(hits.last().unwrap().match_type, MatchType::Regex);

    let hits = table.candidates("/Blog-2024");
    assert_eq!(hits[0].target_path, "/posts");

    let hits = table.candidates("/post/17");
    assert_eq!(hits[0].match_type, MatchType::Flask);

    let hits = table.candidates("/latest/");
    assert_eq!(hits[0].target_path, "/latest");

    let hits = table.candidates("/old-home");
    assert_eq!(hits[0].target_path, "/old-home");
}

#[test]
fn test_glob_line_nested_under_docs() {
    let file = common::alias_file(common::SAMPLE_ALIASES);
    let config = load_config(file.path()).unwrap();
    let sources = config.sources();
    let table = RouteTable::from_aliases(&sources);

    let hits = table.candidates("/guide.pdf");
    assert_eq!(hits[0].match_type, MatchType::Glob);
    assert_eq!(hits[0].target_path, "/files/docs");
    let source = hits[0].source.as_ref().unwrap();
    assert_eq!(source.depth, 1);
}

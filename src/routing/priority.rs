//! Tie-break ranking across match types.
//!
//! Literal patterns are the most specific, regexes the least. Within one
//! match type a longer pattern ranks first.

use crate::pattern::MatchType;

/// Rank assigned to match-type tokens that are not recognized.
pub const UNKNOWN_PRIORITY: u8 = 4;

/// Sort key: lower sorts first.
pub type SortKey = (u8, isize);

/// Fixed priority of a match type.
pub fn match_type_priority(match_type: MatchType) -> u8 {
    match match_type {
        MatchType::Literal => 0,
        MatchType::Flask => 1,
        MatchType::Glob => 2,
        MatchType::Regex => 3,
    }
}

/// `(priority, -length)` for a pattern.
pub fn alias_sort_key(match_type: MatchType, pattern: &str) -> SortKey {
    (match_type_priority(match_type), -(pattern.chars().count() as isize))
}

/// Same as [`alias_sort_key`] for a raw type token.
pub fn alias_sort_key_str(match_type: &str, pattern: &str) -> SortKey {
    let priority = match_type
        .parse::<MatchType>()
        .map(match_type_priority)
        .unwrap_or(UNKNOWN_PRIORITY);
    (priority, -(pattern.chars().count() as isize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_order() {
        let literal = alias_sort_key(MatchType::Literal, "/a-very-long-literal-path");
        let flask = alias_sort_key(MatchType::Flask, "/<x>");
        let glob = alias_sort_key(MatchType::Glob, "/*");
        let regex = alias_sort_key(MatchType::Regex, ".*");
        let unknown = alias_sort_key_str("prefix", "/");
        assert!(literal < flask);
        assert!(flask < glob);
        assert!(glob < regex);
        assert!(regex < unknown);
    }

    #[test]
    fn test_longer_pattern_first() {
        assert!(alias_sort_key(MatchType::Glob, "/docs/*") < alias_sort_key(MatchType::Glob, "/*"));
        assert_eq!(alias_sort_key(MatchType::Literal, "/docs"), (0, -5));
    }

    #[test]
    fn test_sort_candidates() {
        let mut rules = vec![
            (MatchType::Regex, ".*"),
            (MatchType::Glob, "/d*"),
            (MatchType::Literal, "/d"),
            (MatchType::Glob, "/docs*"),
        ];
        rules.sort_by_key(|(mt, p)| alias_sort_key(*mt, p));
        assert_eq!(
            rules,
            vec![
                (MatchType::Literal, "/d"),
                (MatchType::Glob, "/docs*"),
                (MatchType::Glob, "/d*"),
                (MatchType::Regex, ".*"),
            ]
        );
    }
}

//! Route table over many aliases.
//!
//! # Responsibilities
//! - Store compiled rules for a set of aliases
//! - Return every rule matching a path, ranked by priority
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Patterns compiled once, at construction
//! - Ranking only: the caller picks the winner from the ranked candidates
//! - Stable sort, so equal keys keep declaration order

use crate::routing::collector::{AliasRouteRule, AliasSource};
use crate::routing::matcher::{compile_matcher, PathMatcher};
use crate::routing::priority::{alias_sort_key, SortKey};

#[derive(Debug)]
struct CompiledRule {
    rule: AliasRouteRule,
    matcher: Box<dyn PathMatcher>,
    key: SortKey,
}

/// Ranked, precompiled rules for a set of aliases.
#[derive(Debug, Default)]
pub struct RouteTable {
    rules: Vec<CompiledRule>,
}

impl RouteTable {
    /// Build a table from already-collected rules.
    pub fn new(rules: impl IntoIterator<Item = AliasRouteRule>) -> Self {
        let mut rules: Vec<CompiledRule> = rules
            .into_iter()
            .map(|rule| CompiledRule {
                matcher: compile_matcher(rule.match_type, &rule.match_pattern, rule.ignore_case),
                key: alias_sort_key(rule.match_type, &rule.match_pattern),
                rule,
            })
            .collect();
        rules.sort_by_key(|r| r.key);
        tracing::debug!(rules = rules.len(), "Route table built");
        Self { rules }
    }

    /// Collect and compile the rules of every alias.
    pub fn from_aliases<'a>(aliases: impl IntoIterator<Item = &'a AliasSource>) -> Self {
        Self::new(aliases.into_iter().flat_map(AliasSource::routes))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in ranking order.
    pub fn rules(&self) -> impl Iterator<Item = &AliasRouteRule> {
        self.rules.iter().map(|r| &r.rule)
    }

    /// Rules matching `path`, most specific first.
    pub fn candidates(&self, path: &str) -> Vec<&AliasRouteRule> {
        self.rules
            .iter()
            .filter(|r| r.matcher.matches(path))
            .map(|r| &r.rule)
            .collect()
    }
}

//! Route collection for a single alias.
//!
//! # Responsibilities
//! - Turn an alias (name + definition text) into concrete route rules
//! - Drop duplicate rules, first occurrence wins
//! - Fall back to a self-referential rule for empty or legacy aliases
//!
//! # Design Decisions
//! - Never fails: a router can always ask for the rules of any stored alias
//! - A target refused as external yields no rules at all; it is never turned
//!   into a working self-route
//! - Legacy records are tagged when loaded (`AliasSource::Legacy`) instead of
//!   being detected by shape at collection time

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::definition::summary::path_segments;
use crate::definition::{parse_alias_definition, summarize_definition_lines, DefinitionLineSummary};
use crate::pattern::{normalise_pattern, MatchType};
use crate::routing::matcher::matches_path;

/// Read access to a stored alias.
pub trait AliasRecord {
    fn name(&self) -> &str;
    fn definition(&self) -> Option<&str>;
}

/// An alias as stored: a name plus free-text definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    #[serde(default)]
    pub definition: Option<String>,
}

impl Alias {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: Some(definition.into()),
        }
    }
}

impl AliasRecord for Alias {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

/// How an alias record was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasSource {
    /// Record with a free-text definition.
    Modern(Alias),
    /// Record from the fixed-column schema; routes to itself.
    Legacy { name: String },
}

impl AliasSource {
    pub fn name(&self) -> &str {
        match self {
            AliasSource::Modern(alias) => &alias.name,
            AliasSource::Legacy { name } => name,
        }
    }

    /// Route rules for this alias.
    pub fn routes(&self) -> Vec<AliasRouteRule> {
        match self {
            AliasSource::Modern(alias) => collect_alias_routes(alias),
            AliasSource::Legacy { name } => self_route(name).into_iter().collect(),
        }
    }
}

/// One concrete pattern → target pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRouteRule {
    pub alias_path: String,
    pub match_type: MatchType,
    pub match_pattern: String,
    pub target_path: String,
    pub ignore_case: bool,
    /// Originating line, set for nested rules only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DefinitionLineSummary>,
}

impl AliasRouteRule {
    /// Check whether a request path hits this rule.
    pub fn matches(&self, path: &str) -> bool {
        matches_path(self.match_type, &self.match_pattern, path, self.ignore_case)
    }

    fn identity(&self) -> (MatchType, String, String, bool) {
        (
            self.match_type,
            self.match_pattern.clone(),
            self.target_path.clone(),
            self.ignore_case,
        )
    }
}

/// Collect the route rules for an alias.
pub fn collect_alias_routes<A: AliasRecord + ?Sized>(alias: &A) -> Vec<AliasRouteRule> {
    let name = alias.name().trim();
    let alias_name = (!name.is_empty()).then_some(name);
    let definition = alias.definition().unwrap_or_default();

    let mut rules: Vec<AliasRouteRule> = Vec::new();
    let mut seen = HashSet::new();

    for summary in summarize_definition_lines(definition, alias_name) {
        if !summary.is_valid_mapping() {
            continue;
        }
        let (Some(match_type), Some(match_pattern), Some(target_path)) = (
            summary.match_type,
            summary.match_pattern.clone(),
            summary.target_path.clone(),
        ) else {
            continue;
        };
        let nested = summary.depth > 0;
        let alias_path = if nested {
            summary.alias_path.clone().unwrap_or_default()
        } else {
            name.to_string()
        };

        let rule = AliasRouteRule {
            alias_path,
            match_type,
            match_pattern,
            target_path,
            ignore_case: summary.ignore_case,
            source: nested.then_some(summary),
        };
        if seen.insert(rule.identity()) {
            rules.push(rule);
        }
    }

    if !rules.is_empty() {
        return rules;
    }
    fallback_routes(name, definition)
}

/// Rules for a definition whose lines produced nothing usable.
fn fallback_routes(name: &str, definition: &str) -> Vec<AliasRouteRule> {
    if definition.trim().is_empty() {
        tracing::debug!(alias = name, "Empty definition, using self route");
        return self_route(name).into_iter().collect();
    }

    let alias_name = (!name.is_empty()).then_some(name);
    match parse_alias_definition(definition, alias_name) {
        Ok(parsed) => {
            let alias_path = if !name.is_empty() {
                name.to_string()
            } else {
                path_segments(&parsed.match_pattern)
                    .last()
                    .cloned()
                    .unwrap_or_default()
            };
            vec![AliasRouteRule {
                alias_path,
                match_type: parsed.match_type,
                match_pattern: parsed.match_pattern,
                target_path: parsed.target_path,
                ignore_case: parsed.ignore_case,
                source: None,
            }]
        }
        Err(err) if err.is_external_target() => {
            tracing::debug!(alias = name, error = %err, "External target refused, no routes");
            Vec::new()
        }
        Err(err) => {
            tracing::debug!(alias = name, error = %err, "Unparsable definition, using self route");
            self_route(name).into_iter().collect()
        }
    }
}

/// `name -> /name`, when the name is usable.
fn self_route(name: &str) -> Option<AliasRouteRule> {
    let name = name.trim();
    let pattern = normalise_pattern(MatchType::Literal, name, None).ok()?;
    Some(AliasRouteRule {
        alias_path: name.to_string(),
        match_type: MatchType::Literal,
        target_path: pattern.clone(),
        match_pattern: pattern,
        ignore_case: false,
        source: None,
    })
}

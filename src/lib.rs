//! URL alias definitions: a small DSL for redirect rules and the engine that
//! compiles definitions into route rules and evaluates paths against them.
//!
//! # Architecture Overview
//!
//! ```text
//!   alias file / persistence          definition text
//!   ─────────────────────────▶ config ───────────────▶ definition
//!                              (schema,               (grammar, parser,
//!                               validation)            summary, format)
//!                                                          │
//!                                                          ▼
//!        request path  ────────────────────────────▶   routing
//!                                                  (collector, matcher,
//!                                                   priority, router)
//!                                                          │
//!                                                          ▼
//!                                             ranked AliasRouteRule list
//!
//!   Cross-cutting: pattern (normalize, template), security (redirect guard),
//!                  observability (logging)
//! ```
//!
//! ```
//! use alias_router::routing::{collect_alias_routes, Alias};
//!
//! let alias = Alias::new("docs", "docs -> /documentation\n  api -> /docs/api/overview.html");
//! let rules = collect_alias_routes(&alias);
//! assert_eq!(rules[1].alias_path, "docs/api");
//! assert!(rules[1].matches("/docs/api/"));
//! ```

pub mod config;
pub mod definition;
pub mod observability;
pub mod pattern;
pub mod routing;
pub mod security;

pub use definition::{parse_alias_definition, summarize_definition_lines, AliasDefinitionError};
pub use pattern::{normalise_pattern, MatchType, PatternError};
pub use routing::{alias_sort_key, collect_alias_routes, matches_path, AliasRouteRule, RouteTable};

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Alias (name + definition)
//!     → collector.rs (definition → de-duplicated AliasRouteRule list)
//!     → router.rs (compile matchers, rank by priority)
//!
//! Incoming path:
//!     → matcher.rs (evaluate each rule's pattern)
//!     → priority.rs (order the hits)
//!     → ranked candidates for the external router
//! ```
//!
//! # Design Decisions
//! - Rules are recomputed from the definition text, never cached on the alias
//! - Deterministic: same input always yields the same ranked list
//! - This layer ranks; choosing the winner belongs to the caller

pub mod collector;
pub mod matcher;
pub mod priority;
pub mod router;

pub use collector::{collect_alias_routes, Alias, AliasRecord, AliasRouteRule, AliasSource};
pub use matcher::{matches_path, matches_path_str, PathMatcher};
pub use priority::{alias_sort_key, alias_sort_key_str};
pub use router::RouteTable;

//! Pattern subsystem.
//!
//! # Data Flow
//! ```text
//! raw pattern text + MatchType
//!     → normalize.rs (canonicalize & validate)
//!     → canonical pattern string (stored on route rules)
//!
//! Globs:
//!     "/blog-*"
//!     → glob.rs (shell-glob rules → anchored regex)
//!
//! Flask-style templates:
//!     "/user/<int:id>"
//!     → template.rs (parse placeholders, compile anchored regex)
//!     → RouteTemplate (matched by routing::matcher)
//! ```
//!
//! # Design Decisions
//! - Patterns are stored as text, compiled again at match time
//! - Validation happens once, at authoring time
//! - Canonical forms are idempotent

pub mod glob;
pub mod normalize;
pub mod template;
pub mod types;

pub use normalize::{normalise_pattern, normalise_pattern_str};
pub use template::{RouteTemplate, TemplateMatch};
pub use types::{MatchType, PatternError};

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! library code (collector fallbacks, config loading, table builds)
//!     → tracing events with structured fields
//!     → logging.rs (subscriber installed by the binary)
//!     → stderr, pretty or JSON
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the binary's job
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;

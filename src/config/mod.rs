//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! alias file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, every definition line)
//!     → AliasRouterConfig (validated, immutable)
//!     → sources() → AliasSource per record
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Legacy records are tagged here, at the loading boundary

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{AliasConfig, AliasRouterConfig, LogFormat, LoggingConfig};
pub use validation::{validate_config, ValidationError};

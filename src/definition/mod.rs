//! Alias definition language.
//!
//! # Data Flow
//! ```text
//! definition text (free-form, multi-line)
//!     → grammar.rs (comments, separator, options bracket)
//!     → parser.rs (first mapping line → ParsedAliasDefinition)
//!     → summary.rs (every line → DefinitionLineSummary, nested alias paths)
//!
//! Editing UIs:
//!     structured fields → format.rs → canonical primary line
//! ```
//!
//! # Design Decisions
//! - The primary-line parser fails eagerly; the summarizer never fails
//! - Options are tokenized by an explicit function returning `Result`
//! - Nesting state lives only for the duration of one summarize call

pub mod error;
pub mod format;
pub mod grammar;
pub mod parser;
pub mod summary;

pub use error::AliasDefinitionError;
pub use format::{ensure_primary_line, format_primary_alias_line, replace_primary_definition_line};
pub use parser::{parse_alias_definition, ParsedAliasDefinition};
pub use summary::{summarize_definition_lines, DefinitionLineSummary};

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Report malformed definition lines with alias name and line number
//! - Detect duplicate or unnamed aliases
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AliasRouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AliasRouterConfig;
use crate::definition::summarize_definition_lines;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("alias #{0} has an empty name")]
    EmptyName(usize),

    #[error("alias '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("legacy alias '{0}' cannot carry a definition")]
    LegacyWithDefinition(String),

    #[error("alias '{alias}' line {line}: {message}")]
    InvalidLine {
        alias: String,
        line: usize,
        message: String,
    },

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AliasRouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if EnvFilter::try_new(&config.logging.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    let mut seen = HashSet::new();
    for (index, alias) in config.aliases.iter().enumerate() {
        let name = alias.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName(index));
            continue;
        }
        if !seen.insert(name.to_string()) {
            errors.push(ValidationError::DuplicateName(name.to_string()));
        }

        let definition = alias.definition.as_deref().unwrap_or_default();
        if alias.legacy {
            if !definition.trim().is_empty() {
                errors.push(ValidationError::LegacyWithDefinition(name.to_string()));
            }
            continue;
        }

        for summary in summarize_definition_lines(definition, Some(name)) {
            if let Some(err) = summary.parse_error {
                errors.push(ValidationError::InvalidLine {
                    alias: name.to_string(),
                    line: summary.line_number,
                    message: err.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

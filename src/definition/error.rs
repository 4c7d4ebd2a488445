//! Definition parse errors.

use thiserror::Error;

use crate::pattern::PatternError;
use crate::security::TargetError;

/// Errors raised while parsing a `<pattern> -> <target> [options]` line.
///
/// Each variant is a distinct reason, so callers branch on the variant and
/// never on the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasDefinitionError {
    /// No line in the text contains `->`.
    #[error("Alias definition must contain a line of the form '<pattern> -> <target>'.")]
    MissingSeparator,

    #[error("Alias definition is missing a target path after '->'.")]
    MissingTarget,

    #[error("Options bracket is missing a closing ']'.")]
    UnterminatedOptions,

    #[error("Unexpected text after the options bracket: '{0}'.")]
    TrailingText(String),

    #[error("Unknown alias option '{0}'. Use literal, glob, regex, flask or ignore-case.")]
    UnknownOption(String),

    #[error("Specify only one match type per alias definition.")]
    ConflictingMatchTypes,

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl AliasDefinitionError {
    /// True when the target was refused for leaving the application.
    pub fn is_external_target(&self) -> bool {
        matches!(
            self,
            AliasDefinitionError::Target(TargetError::External | TargetError::ProtocolRelative)
        )
    }
}

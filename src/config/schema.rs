//! Configuration schema definitions.
//!
//! An alias file lists aliases the way a persistence layer would hand them
//! over: a name and the raw definition text. All types derive Serde traits
//! for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::{Alias, AliasSource};

/// Root configuration for the alias router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AliasRouterConfig {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// Alias records, in declaration order.
    pub aliases: Vec<AliasConfig>,
}

impl AliasRouterConfig {
    /// Tag every alias record as modern or legacy.
    pub fn sources(&self) -> Vec<AliasSource> {
        self.aliases.iter().map(AliasConfig::to_source).collect()
    }

    /// Find an alias by name.
    pub fn alias(&self, name: &str) -> Option<&AliasConfig> {
        self.aliases.iter().find(|a| a.name.trim() == name.trim())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "alias_router=debug").
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A single alias record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AliasConfig {
    /// Alias name, also the root of nested alias paths.
    pub name: String,

    /// Free-text definition in the alias DSL.
    #[serde(default)]
    pub definition: Option<String>,

    /// Record migrated from the fixed-column schema.
    #[serde(default)]
    pub legacy: bool,
}

impl AliasConfig {
    pub fn to_source(&self) -> AliasSource {
        if self.legacy {
            AliasSource::Legacy {
                name: self.name.clone(),
            }
        } else {
            AliasSource::Modern(Alias {
                name: self.name.clone(),
                definition: self.definition.clone(),
            })
        }
    }
}

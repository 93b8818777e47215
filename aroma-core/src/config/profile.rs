//! The analysis profile: declared groups, rank tokens, interpretation
//! thresholds.
//!
//! The profile is an immutable value injected into each component at
//! construction. There is no ambient global configuration and no runtime
//! reconfiguration; the compiled defaults are the production table.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{GroupName, Rank};

/// Immutable configuration for one analyzer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisProfile {
    /// Declared oil groups, in display order. Closed set: a dictionary entry
    /// naming any other group is dropped from aggregation.
    pub groups: Vec<GroupName>,
    /// Accepted rank cell tokens, verbatim.
    pub rank_tokens: Vec<String>,
    /// A neutral zone larger than this reads as acceptance, smaller as
    /// tension.
    pub neutral_zone_threshold: u32,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self {
            groups: vec![
                GroupName::from("Citrus"),
                GroupName::from("Coniferous"),
                GroupName::from("Spice"),
                GroupName::from("Floral"),
                GroupName::from("Woody-Herbal"),
            ],
            rank_tokens: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            neutral_zone_threshold: 3,
        }
    }
}

impl AnalysisProfile {
    /// Build a profile from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let profile: AnalysisProfile =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validate the profile values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "groups".to_string(),
                message: "at least one group must be declared".to_string(),
            });
        }
        for (i, group) in self.groups.iter().enumerate() {
            if self.groups[..i].contains(group) {
                return Err(ConfigError::ValidationFailed {
                    field: "groups".to_string(),
                    message: format!("group \"{group}\" is declared twice"),
                });
            }
        }
        if self.rank_tokens.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "rank_tokens".to_string(),
                message: "at least one rank token must be accepted".to_string(),
            });
        }
        for token in &self.rank_tokens {
            if Rank::parse_token(token).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "rank_tokens".to_string(),
                    message: format!("\"{token}\" is not a valid rank token"),
                });
            }
        }
        Ok(())
    }

    /// Whether `group` is one of the declared groups.
    pub fn is_declared_group(&self, group: &GroupName) -> bool {
        self.groups.contains(group)
    }

    /// Whether `token` is an accepted rank cell value.
    pub fn is_rank_token(&self, token: &str) -> bool {
        self.rank_tokens.iter().any(|t| t == token)
    }
}

//! Calculator configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User id `multiply` acts as when the caller does not name one.
pub const DEFAULT_USER: &str = "user1";

/// Error loading a [`CalculatorConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: default_user must not be empty")]
    EmptyDefaultUser,
}

/// Defaults applied by the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Identity passed to the permission validator by `multiply`
    pub default_user: String,
    /// Users granted by the bundled `AllowList` validator
    pub allowed_users: Vec<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_user: DEFAULT_USER.to_string(),
            allowed_users: vec![DEFAULT_USER.to_string()],
        }
    }
}

impl CalculatorConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_user.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultUser);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.default_user, "user1");
    }

    #[test]
    fn overrides_are_applied() {
        let config = CalculatorConfig::from_json_str(
            r#"{"default_user": "alice", "allowed_users": ["alice", "bob"]}"#,
        )
        .unwrap();
        assert_eq!(config.default_user, "alice");
        assert_eq!(config.allowed_users, vec!["alice", "bob"]);
    }

    #[test]
    fn rejects_malformed_and_empty_user() {
        assert!(matches!(
            CalculatorConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CalculatorConfig::from_json_str(r#"{"default_user": "  "}"#),
            Err(ConfigError::EmptyDefaultUser)
        ));
    }
}

//! Permission validation for gated operations.
//!
//! The calculator never decides on its own who may multiply; it asks a
//! [`PermissionValidator`] with a human-readable description of the operation
//! and the acting user.

use crate::config::CalculatorConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Failure of the validator itself, as opposed to a denial
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The validator could not be reached
    #[error("permission service unavailable: {0}")]
    Unavailable(String),

    /// The validator was reached but could not reach a decision
    #[error("permission check failed: {0}")]
    Failed(String),
}

/// A trait for permission validators.
/// Validators are consulted once per gated call and must be thread-safe.
pub trait PermissionValidator: Send + Sync {
    /// Returns whether `user` may perform `operation`.
    ///
    /// `operation` is a description such as `"2 * 4"`.
    fn validate(&self, operation: &str, user: &str) -> Result<bool, ValidationError>;
}

impl<F> PermissionValidator for F
where
    F: Fn(&str, &str) -> Result<bool, ValidationError> + Send + Sync,
{
    fn validate(&self, operation: &str, user: &str) -> Result<bool, ValidationError> {
        self(operation, user)
    }
}

/// Grants every operation to a fixed set of users and denies everyone else.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    users: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { users: users.into_iter().map(Into::into).collect() }
    }

    /// Builds the list from `allowed_users`.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.allowed_users.iter().cloned())
    }

    pub fn allow(&mut self, user: impl Into<String>) {
        self.users.insert(user.into());
    }

    pub fn contains(&self, user: &str) -> bool {
        self.users.contains(user)
    }
}

impl PermissionValidator for AllowList {
    fn validate(&self, _operation: &str, user: &str) -> Result<bool, ValidationError> {
        Ok(self.contains(user))
    }
}

//! Error types for calculator operations.
//!
//! Three kinds surface from the arithmetic itself: [`CalcError::Type`] for
//! operands of the wrong type (and, by convention, a zero divisor),
//! [`CalcError::Value`] for results that are mathematically undefined, and
//! [`CalcError::InvalidPermissions`] when multiplication is denied. A failing
//! permission validator is passed through as [`CalcError::PermissionCheck`].

use crate::permissions::ValidationError;
use reckon_types::Operand;
use std::fmt;
use thiserror::Error;

/// Error returned by calculator operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Wrong operand type, wrong argument count, or a zero divisor
    #[error("Type error in {operation}: {message}")]
    Type { operation: &'static str, message: String },

    /// Correctly typed input outside the operation's domain
    #[error("Value error in {operation}: {message}")]
    Value { operation: &'static str, message: String },

    /// The permission validator denied the operation
    #[error("User '{user}' is not allowed to perform '{description}'")]
    InvalidPermissions { user: String, description: String },

    /// The permission validator itself failed
    #[error("Permission check failed: {0}")]
    PermissionCheck(#[from] ValidationError),
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Coarse classification of a [`CalcError`], for matching and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
    InvalidPermissions,
    PermissionCheck,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "TYPE"),
            ErrorKind::Value => write!(f, "VALUE"),
            ErrorKind::InvalidPermissions => write!(f, "INVALID_PERMISSIONS"),
            ErrorKind::PermissionCheck => write!(f, "PERMISSION_CHECK"),
        }
    }
}

impl CalcError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Type { .. } => ErrorKind::Type,
            CalcError::Value { .. } => ErrorKind::Value,
            CalcError::InvalidPermissions { .. } => ErrorKind::InvalidPermissions,
            CalcError::PermissionCheck(_) => ErrorKind::PermissionCheck,
        }
    }

    /// Name of the operation that failed, when known
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            CalcError::Type { operation, .. } | CalcError::Value { operation, .. } => {
                Some(*operation)
            }
            CalcError::InvalidPermissions { .. } | CalcError::PermissionCheck(_) => {
                Some("multiply")
            }
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

/// Convenience constructors
impl CalcError {
    /// An operand that is not of the accepted type
    pub fn unsupported_operand(operation: &'static str, operand: &Operand) -> Self {
        Self::Type {
            operation,
            message: format!("unsupported operand type '{}'", operand.type_name()),
        }
    }

    /// A divisor equal to zero, reported as a type error
    pub fn zero_divisor(operation: &'static str) -> Self {
        Self::Type { operation, message: "division by zero".to_string() }
    }

    /// A call with the wrong number of arguments
    pub fn arity(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::Type {
            operation,
            message: format!("expected {expected} argument(s), got {actual}"),
        }
    }

    /// A correctly typed input outside the operation's domain
    pub fn domain(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Value { operation, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_operations() {
        let err = CalcError::unsupported_operand("add", &Operand::Null);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.operation(), Some("add"));
        assert_eq!(err.to_string(), "Type error in add: unsupported operand type 'null'");

        let err = CalcError::domain("sqrt", "math domain error");
        assert!(err.is_value_error());
        assert!(!err.is_type_error());

        let err = CalcError::from(ValidationError::Unavailable("offline".into()));
        assert_eq!(err.kind(), ErrorKind::PermissionCheck);
        assert_eq!(err.operation(), Some("multiply"));
    }

    #[test]
    fn zero_divisor_is_a_type_error() {
        assert!(CalcError::zero_divisor("divide").is_type_error());
    }
}

//! The reckon calculator.
//!
//! This crate provides [`Calculator`], a stateless set of arithmetic operations
//! over dynamically typed [`Operand`]s. Every operation checks its inputs at the
//! entry point and either returns a [`Number`] or a [`CalcError`] naming what
//! went wrong. Multiplication is gated by an injected [`PermissionValidator`].

pub mod arithmetic;
pub mod calculator;
pub mod config;
pub mod error;
pub mod operation;
pub mod permissions;

pub use calculator::Calculator;
pub use config::{CalculatorConfig, ConfigError};
pub use error::{CalcError, CalcResult, ErrorKind};
pub use operation::{Operation, UnknownOperation};
pub use permissions::{AllowList, PermissionValidator, ValidationError};
pub use reckon_types::{Number, Operand};

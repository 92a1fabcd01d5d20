//! Reckon Types
//!
//! This crate defines the value types shared by the reckon crates: the dynamic
//! [`Operand`] callers hand to the calculator, and the [`Number`] it hands back.
//! Keeping them here lets callers build operands without pulling in the
//! calculator itself.

#![deny(missing_docs)]

mod number;
mod operand;

pub use number::Number;
pub use operand::Operand;

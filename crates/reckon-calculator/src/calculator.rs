use crate::arithmetic;
use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};
use crate::operation::Operation;
use crate::permissions::PermissionValidator;
use reckon_types::{Number, Operand};
use std::fmt;
use tracing::{debug, warn};

/// A stateless calculator.
///
/// Every operation accepts dynamically typed operands, validates them at the
/// entry point and returns either a [`Number`] or a [`CalcError`]. The only
/// collaborator is the permission validator consulted by [`multiply`].
///
/// [`multiply`]: Calculator::multiply
pub struct Calculator {
    validator: Box<dyn PermissionValidator>,
    config: CalculatorConfig,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Extracts a numeric operand or fails with a type error naming its type.
fn numeric(operation: &'static str, operand: &Operand) -> CalcResult<Number> {
    operand.as_number().ok_or_else(|| CalcError::unsupported_operand(operation, operand))
}

impl Calculator {
    pub fn new(validator: impl PermissionValidator + 'static) -> Self {
        Self::with_config(validator, CalculatorConfig::default())
    }

    pub fn with_config(
        validator: impl PermissionValidator + 'static,
        config: CalculatorConfig,
    ) -> Self {
        Self { validator: Box::new(validator), config }
    }

    /// Sum of two numbers.
    pub fn add(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::add(numeric("add", &a)?, numeric("add", &b)?);
        debug!(operation = "add", %a, %b, %result, "computed");
        Ok(result)
    }

    /// Difference `a - b`. Mixed integer/float input yields a float.
    #[doc(alias = "substract")]
    pub fn subtract(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let result = arithmetic::subtract(numeric("subtract", &a)?, numeric("subtract", &b)?);
        debug!(operation = "subtract", %a, %b, %result, "computed");
        Ok(result)
    }

    /// True division `a / b`, always a float.
    ///
    /// A zero divisor, `-0.0` included, is reported as a type error rather
    /// than a value error.
    pub fn divide(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let dividend = numeric("divide", &a)?;
        let divisor = numeric("divide", &b)?;
        if divisor.is_zero() {
            return Err(CalcError::zero_divisor("divide"));
        }
        let result = arithmetic::divide(dividend, divisor);
        debug!(operation = "divide", %a, %b, %result, "computed");
        Ok(result)
    }

    /// Product of two numbers, acting as the configured default user.
    pub fn multiply(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> CalcResult<Number> {
        self.multiply_as(a, b, &self.config.default_user)
    }

    /// Product of two numbers, acting as `user`.
    ///
    /// The validator is asked exactly once, with the description `"<a> * <b>"`,
    /// before the operands are inspected. A denial yields
    /// [`CalcError::InvalidPermissions`]; a validator failure is passed through
    /// as [`CalcError::PermissionCheck`].
    pub fn multiply_as(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
        user: &str,
    ) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let description = format!("{a} * {b}");

        debug!(operation = "multiply", %description, user, "checking permissions");
        let allowed = self.validator.validate(&description, user).map_err(|e| {
            warn!(operation = "multiply", %description, user, error = %e, "permission check failed");
            CalcError::from(e)
        })?;
        if !allowed {
            warn!(operation = "multiply", %description, user, "permission denied");
            return Err(CalcError::InvalidPermissions { user: user.to_string(), description });
        }

        let result = arithmetic::multiply(numeric("multiply", &a)?, numeric("multiply", &b)?);
        debug!(operation = "multiply", %description, user, %result, "computed");
        Ok(result)
    }

    /// `base` raised to `exponent`.
    pub fn power(
        &self,
        base: impl Into<Operand>,
        exponent: impl Into<Operand>,
    ) -> CalcResult<Number> {
        let (base, exponent) = (base.into(), exponent.into());
        let result = arithmetic::power(numeric("power", &base)?, numeric("power", &exponent)?)?;
        debug!(operation = "power", %base, %exponent, %result, "computed");
        Ok(result)
    }

    /// Square root. Negative input is a value error.
    pub fn sqrt(&self, x: impl Into<Operand>) -> CalcResult<Number> {
        let x = x.into();
        let result = arithmetic::sqrt(numeric("sqrt", &x)?)?;
        debug!(operation = "sqrt", %x, %result, "computed");
        Ok(result)
    }

    /// Base-10 logarithm. Zero and negative input are value errors.
    pub fn log10(&self, x: impl Into<Operand>) -> CalcResult<Number> {
        let x = x.into();
        let result = arithmetic::log10(numeric("log10", &x)?)?;
        debug!(operation = "log10", %x, %result, "computed");
        Ok(result)
    }

    /// Parity of an integer. Anything else, integral floats included, is a
    /// type error.
    pub fn is_even(n: impl Into<Operand>) -> CalcResult<bool> {
        let n = n.into();
        let value = n.as_integer().ok_or_else(|| CalcError::unsupported_operand("is_even", &n))?;
        Ok(value % 2 == 0)
    }

    /// Runs `operation` over positional arguments.
    ///
    /// `multiply` acts as the configured default user. A wrong number of
    /// arguments is a type error.
    pub fn evaluate(&self, operation: Operation, args: &[Operand]) -> CalcResult<Operand> {
        let expected = operation.arity();
        if args.len() != expected {
            return Err(CalcError::arity(operation.name(), expected, args.len()));
        }

        let arg = |i: usize| args[i].clone();
        let result = match operation {
            Operation::Add => self.add(arg(0), arg(1))?,
            Operation::Subtract => self.subtract(arg(0), arg(1))?,
            Operation::Multiply => self.multiply(arg(0), arg(1))?,
            Operation::Divide => self.divide(arg(0), arg(1))?,
            Operation::Power => self.power(arg(0), arg(1))?,
            Operation::Sqrt => self.sqrt(arg(0))?,
            Operation::Log10 => self.log10(arg(0))?,
            Operation::IsEven => return Self::is_even(arg(0)).map(Operand::Boolean),
        };
        Ok(result.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::AllowList;

    fn calc() -> Calculator {
        Calculator::new(AllowList::new(["user1"]))
    }

    #[test]
    fn evaluate_dispatches_by_operation() {
        let calc = calc();
        assert_eq!(
            calc.evaluate(Operation::Add, &[2.into(), 3.into()]).unwrap(),
            Operand::Integer(5)
        );
        assert_eq!(
            calc.evaluate(Operation::Divide, &[3.into(), 2.into()]).unwrap(),
            Operand::Float(1.5)
        );
        assert_eq!(
            calc.evaluate(Operation::Multiply, &[6.into(), 7.into()]).unwrap(),
            Operand::Integer(42)
        );
        assert_eq!(
            calc.evaluate(Operation::IsEven, &[4.into()]).unwrap(),
            Operand::Boolean(true)
        );
    }

    #[test]
    fn evaluate_rejects_wrong_arity() {
        let err = calc().evaluate(Operation::Sqrt, &[1.into(), 2.into()]).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.operation(), Some("sqrt"));

        let err = calc().evaluate(Operation::Power, &[]).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn default_user_comes_from_config() {
        let config = CalculatorConfig {
            default_user: "bob".to_string(),
            ..CalculatorConfig::default()
        };
        let calc = Calculator::with_config(AllowList::new(["user1"]), config);
        let err = calc.multiply(2, 2).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidPermissions { user: "bob".to_string(), description: "2 * 2".to_string() }
        );
    }

    #[test]
    fn debug_omits_validator() {
        let rendered = format!("{:?}", calc());
        assert!(rendered.starts_with("Calculator"));
        assert!(rendered.contains("user1"));
    }
}

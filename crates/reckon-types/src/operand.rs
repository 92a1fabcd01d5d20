use crate::number::{Number, format_float};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A dynamically typed value supplied to a calculator operation.
///
/// Operations accept anything convertible into an `Operand` and decide at the
/// entry point whether the value is acceptable; only `Integer` and `Float`
/// count as numeric. Serialized as plain JSON, matching `From<serde_json::Value>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Operand {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean. Not numeric.
    Boolean(bool),
    /// A string. Not numeric, even when it spells a number.
    String(String),
    /// A list of operands.
    Array(Vec<Operand>),
    /// A keyed collection of operands.
    Object(HashMap<String, Operand>),
    /// The absent value.
    Null,
}

impl Operand {
    /// Numeric view of this operand, or `None` for every non-numeric variant.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Operand::Integer(i) => Some(Number::Integer(*i)),
            Operand::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Integer value, if this is an `Integer`. Integral floats are rejected.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Operand::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Null)
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Boolean(_) => "boolean",
            Operand::String(_) => "string",
            Operand::Array(_) => "array",
            Operand::Object(_) => "object",
            Operand::Null => "null",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(i) => write!(f, "{i}"),
            Operand::Float(fl) => f.write_str(&format_float(*fl)),
            Operand::Boolean(b) => write!(f, "{b}"),
            Operand::String(s) => write!(f, "\"{s}\""),
            Operand::Array(arr) => {
                let items: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Operand::Object(obj) => {
                let mut pairs: Vec<String> =
                    obj.iter().map(|(k, v)| format!("\"{k}\": {v}")).collect();
                pairs.sort();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Operand::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Boolean(value)
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::String(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::String(value.to_string())
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(i) => Operand::Integer(i),
            Number::Float(f) => Operand::Float(f),
        }
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Null, Into::into)
    }
}

impl From<serde_json::Value> for Operand {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Operand::Null,
            Value::Bool(b) => Operand::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Operand::Integer(i),
                None => n.as_f64().map_or(Operand::Null, Operand::Float),
            },
            Value::String(s) => Operand::String(s),
            Value::Array(arr) => Operand::Array(arr.into_iter().map(Operand::from).collect()),
            Value::Object(obj) => {
                Operand::Object(obj.into_iter().map(|(k, v)| (k, Operand::from(v))).collect())
            }
        }
    }
}

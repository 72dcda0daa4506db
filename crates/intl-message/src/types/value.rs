use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A runtime value bound to a placeholder name when formatting a message.
///
/// Numbers drive plural selection, strings drive select and gender
/// selection, and every variant can be substituted into plain placeholders.
///
/// # Example
///
/// ```
/// use intl_message::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
///
/// assert_eq!(count.as_number(), Some(42));
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret this value as a number.
    ///
    /// Numbers are returned unchanged. Strings are parsed as an integer
    /// first, then as a float, so `"010"` becomes `10`. Returns `None` for
    /// strings that are not numeric.
    pub fn to_numeric(&self) -> Option<Value> {
        match self {
            Value::Number(_) | Value::Float(_) => Some(self.clone()),
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::Number)
                .or_else(|_| s.parse::<f64>().map(Value::Float))
                .ok(),
        }
    }

    /// Subtract a plural offset from a numeric value.
    ///
    /// Strings are returned unchanged; callers convert with
    /// [`Value::to_numeric`] first.
    pub fn minus_offset(&self, offset: i64) -> Value {
        match self {
            Value::Number(n) => Value::Number(n.saturating_sub(offset)),
            Value::Float(f) => Value::Float(f - offset as f64),
            Value::String(_) => self.clone(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

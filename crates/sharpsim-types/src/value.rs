//! Runtime values held by bindings, object fields and array slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text printed for an array slot that was never assigned.
pub const NULL_TEXT: &str = "null";

/// A primitive value.
///
/// Integers and floating-point numbers share one representation; the
/// simulator never distinguishes `int` from `double`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Returns the numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as an array index, if it is a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        self.as_number().and_then(to_index)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Convert a number to an array index if it is a non-negative integer.
pub fn to_index(n: f64) -> Option<usize> {
    (n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64).then_some(n as usize)
}

/// Render a number the way the console shows it.
///
/// Integral values drop the fractional part, `-0` prints as `0`, and
/// non-finite values use their long names.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        // f64's Display is already shortest-round-trip and omits `.0`.
        format!("{n}")
    }
}

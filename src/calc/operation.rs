//! Supported arithmetic operations.

use serde::{Deserialize, Serialize};

/// An operation exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    /// Compute `num1 + num2` or `num1 - num2`.
    ///
    /// Overflow follows IEEE 754 and yields an infinity.
    pub fn apply(self, num1: f64, num2: f64) -> f64 {
        match self {
            Operation::Addition => num1 + num2,
            Operation::Subtraction => num1 - num2,
        }
    }

    /// Name used in the JSON envelope and as a metrics label.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

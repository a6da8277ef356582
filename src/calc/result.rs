//! The JSON envelope returned by the operation endpoints.

use serde::{Deserialize, Serialize};

use crate::calc::Operation;
use crate::format::Formatter;

/// Outcome of one operation request.
///
/// Built once per request and never mutated; fields serialize in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OperationResult {
    pub operation: Operation,
    pub num1: f64,
    pub num2: f64,
    pub result: String,
}

impl OperationResult {
    /// Apply `operation` to the operands and format the outcome.
    pub fn compute(operation: Operation, num1: f64, num2: f64, formatter: &Formatter) -> Self {
        let value = operation.apply(num1, num2);
        Self {
            operation,
            num1,
            num2,
            result: formatter.format(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NotationRule;

    #[test]
    fn test_envelope_shape() {
        let result =
            OperationResult::compute(Operation::Addition, 1.5, 2.5, &Formatter::default());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"operation":"addition","num1":1.5,"num2":2.5,"result":"4"}"#
        );
    }

    #[test]
    fn test_uses_formatter_rule() {
        let magnitude = Formatter::default();
        let length = Formatter::new(NotationRule::Length);

        let (num1, num2) = (0.00000000003, 0.00000000001);

        let small = OperationResult::compute(Operation::Subtraction, num1, num2, &magnitude);
        assert_eq!(small.result, "2.00e-11");

        let small = OperationResult::compute(Operation::Subtraction, num1, num2, &length);
        assert_eq!(small.result, "0");
    }
}

//! Operation endpoints.
//!
//! Each handler is a plain async function over immutable [`AppState`]:
//! extract operands, compute, format, respond.

use axum::{extract::State, Json};

use crate::calc::{Operation, OperationResult};
use crate::http::form::Operands;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `POST /add/`
pub async fn add(State(state): State<AppState>, operands: Operands) -> Json<OperationResult> {
    Json(evaluate(&state, Operation::Addition, operands))
}

/// `POST /subtract/`
pub async fn subtract(State(state): State<AppState>, operands: Operands) -> Json<OperationResult> {
    Json(evaluate(&state, Operation::Subtraction, operands))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

fn evaluate(state: &AppState, operation: Operation, operands: Operands) -> OperationResult {
    let Operands { num1, num2 } = operands;
    let result = OperationResult::compute(operation, num1, num2, &state.formatter);

    if state.formatter.is_scientific(operation.apply(num1, num2)) {
        metrics::record_scientific_result(operation.as_str());
    }

    tracing::debug!(
        operation = %operation,
        rule = %state.formatter.rule(),
        num1,
        num2,
        result = %result.result,
        "Computed result"
    );
    result
}

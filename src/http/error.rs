//! API error responses.
//!
//! Validation failures render as
//! `{"detail": [{"loc": ["body", "num1"], "msg": "...", "type": "..."}]}`
//! with status 422; other rejections render as `{"detail": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Why a single input field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    NotANumber,
    NotFinite,
}

impl FieldErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::NotANumber => "float_parsing",
            FieldErrorKind::NotFinite => "finite_number",
        }
    }

    fn message(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "Field required",
            FieldErrorKind::NotANumber => {
                "Input should be a valid number, unable to parse string as a number"
            }
            FieldErrorKind::NotFinite => "Input should be a finite number",
        }
    }
}

/// One entry of a validation error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: [&'static str; 2],
    pub msg: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            loc: ["body", field],
            msg: kind.message(),
            kind: kind.as_str(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.loc[1]
    }
}

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more input fields failed to parse.
    #[error("request validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The body itself was refused before any field was read.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(json!({ "detail": errors }))).into_response()
            }
            ApiError::Rejected { message, .. } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_validation_body() {
        let error = ApiError::Validation(vec![FieldError::new("num1", FieldErrorKind::NotANumber)]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["detail"][0]["loc"], json!(["body", "num1"]));
        assert_eq!(value["detail"][0]["type"], "float_parsing");
    }

    #[tokio::test]
    async fn test_rejected_body() {
        let error = ApiError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "Failed to buffer the request body".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to buffer the request body");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["detail"], "Failed to buffer the request body");
    }
}

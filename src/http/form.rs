//! Operand extraction from form bodies.
//!
//! # Responsibilities
//! - Read `num1` / `num2` from url-encoded or multipart bodies
//! - Parse each into a finite `f64`, never defaulting a bad value
//! - Report every failing field in one validation error

use axum::extract::rejection::FormRejection;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{header, HeaderMap, StatusCode},
    Form,
};

use crate::http::error::{ApiError, FieldError, FieldErrorKind};
use crate::observability::metrics;

pub const NUM1: &str = "num1";
pub const NUM2: &str = "num2";

/// The two validated inputs of an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

impl Operands {
    /// Build operands from raw `(name, value)` pairs.
    ///
    /// The first occurrence of a field wins. Both fields are checked even
    /// when the first one fails.
    pub fn from_fields(fields: &[(String, String)]) -> Result<Self, ApiError> {
        let num1 = parse_operand(NUM1, fields);
        let num2 = parse_operand(NUM2, fields);

        match (num1, num2) {
            (Ok(num1), Ok(num2)) => Ok(Self { num1, num2 }),
            (num1, num2) => {
                let errors: Vec<FieldError> =
                    [num1.err(), num2.err()].into_iter().flatten().collect();
                for error in &errors {
                    metrics::record_validation_failure(error.field(), error.kind);
                }
                Err(ApiError::Validation(errors))
            }
        }
    }
}

fn parse_operand(field: &'static str, fields: &[(String, String)]) -> Result<f64, FieldError> {
    let raw = fields
        .iter()
        .find(|(name, _)| name == field)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| FieldError::new(field, FieldErrorKind::Missing))?;

    let value: f64 = raw
        .parse()
        .map_err(|_| FieldError::new(field, FieldErrorKind::NotANumber))?;

    if !value.is_finite() {
        return Err(FieldError::new(field, FieldErrorKind::NotFinite));
    }
    Ok(value)
}

impl<S> FromRequest<S> for Operands
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = if is_multipart(req.headers()) {
            multipart_fields(req, state).await?
        } else {
            urlencoded_fields(req, state).await?
        };
        Self::from_fields(&fields)
    }
}

/// Media types are case-insensitive; parameters such as the boundary are ignored.
fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("multipart/form-data"))
}

fn rejected(status: StatusCode, message: String) -> ApiError {
    ApiError::Rejected { status, message }
}

async fn urlencoded_fields<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, ApiError>
where
    S: Send + Sync,
{
    match Form::<Vec<(String, String)>>::from_request(req, state).await {
        Ok(Form(fields)) => Ok(fields),
        // No form content type at all: every field is simply missing.
        Err(FormRejection::InvalidFormContentType(_)) => Ok(Vec::new()),
        Err(rejection) => Err(rejected(rejection.status(), rejection.body_text())),
    }
}

async fn multipart_fields<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name != NUM1 && name != NUM2 {
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        fields.push((name, value));
    }
    Ok(fields)
}

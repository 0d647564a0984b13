use poem::{IntoResponse, Response, error::ResponseError, http::StatusCode, web::Json};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    TooShort,
    TooLong,
    InvalidEmail,
    Invalid,
    Missing,
    InvalidType,
    InvalidPayload,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    fn from_rule(field: String, rule: &ValidationError) -> Self {
        let kind = match &*rule.code {
            "email" => ViolationKind::InvalidEmail,
            "length" if is_too_short(rule) => ViolationKind::TooShort,
            "length" => ViolationKind::TooLong,
            _ => ViolationKind::Invalid,
        };
        let message = rule
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| rule.code.to_string());
        Self::new(field, kind, message)
    }
}

fn is_too_short(rule: &ValidationError) -> bool {
    let len = rule
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|v| v.chars().count() as u64);
    let min = rule.params.get("min").and_then(Value::as_u64);
    matches!((len, min), (Some(len), Some(min)) if len < min)
}

/// Renders as `422 {"detail": [{"field", "kind", "message"}, ...]}`,
/// ordered by field path.
#[derive(Debug, Clone, Error, Serialize)]
#[error("request failed validation")]
pub struct ValidationProblem {
    pub detail: Vec<FieldViolation>,
}

impl ValidationProblem {
    pub fn new(mut detail: Vec<FieldViolation>) -> Self {
        detail.sort_by(|a, b| a.field.cmp(&b.field));
        Self { detail }
    }
}

impl From<&ValidationErrors> for ValidationProblem {
    fn from(errors: &ValidationErrors) -> Self {
        Self::new(violations(errors))
    }
}

impl ResponseError for ValidationProblem {
    fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn as_response(&self) -> Response {
        Json(self.clone())
            .with_status(self.status())
            .into_response()
    }
}

/// Flattens nested rule failures into dotted paths such as `by.email`.
pub fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(rules) => {
                out.extend(rules.iter().map(|rule| FieldViolation::from_rule(path.clone(), rule)));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}.{index}"), out);
                }
            }
        }
    }
}

pub fn domain_error(err: DomainError) -> poem::Error {
    match err {
        DomainError::Validation(errors) => ValidationProblem::from(&errors).into(),
        DomainError::NotFound(what) => {
            poem::Error::from_string(format!("{what} not found"), StatusCode::NOT_FOUND)
        }
        DomainError::AlreadyExists(what) => {
            poem::Error::from_string(format!("{what} already exists"), StatusCode::CONFLICT)
        }
        DomainError::InvalidCredentials => {
            poem::Error::from_string("invalid email or password", StatusCode::UNAUTHORIZED)
        }
        DomainError::Other(source) => {
            error!(error = ?source, "storage failure");
            poem::Error::from_string(
                "internal storage error",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

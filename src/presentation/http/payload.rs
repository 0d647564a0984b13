//! JSON request bodies that report every broken field at once.
//!
//! poem-openapi's `Json<T>` stops at the first missing field or type
//! mismatch. [`JsonBody`] keeps the same OpenAPI schema but decodes the
//! object field by field, then runs the `validator` rules over whatever
//! decoded, so one 422 response lists structural and constraint failures
//! together.

use chrono::{DateTime, NaiveDateTime, Utc};
use poem::{FromRequest, Request, RequestBody};
use poem_openapi::{
    payload::{Json, ParsePayload, Payload},
    registry::{MetaSchemaRef, Registry},
    types::Type,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::presentation::http::errors::{
    FieldViolation, ValidationProblem, ViolationKind, violations,
};

pub struct JsonBody<T>(pub T);

/// A request object that can be read out of a JSON map one field at a time.
pub trait FromFields: Sized {
    /// Fields that fail to decode are reported to `fields` and replaced by
    /// placeholders.
    fn from_fields(fields: &mut Fields<'_>) -> Self;

    /// Constraint checks on the decoded value.
    fn check(&self) -> Result<(), ValidationErrors>;
}

pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    prefix: String,
    problems: &'a mut Vec<FieldViolation>,
}

impl<'a> Fields<'a> {
    fn new(object: &'a Map<String, Value>, problems: &'a mut Vec<FieldViolation>) -> Self {
        Self {
            object,
            prefix: String::new(),
            problems,
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.prefix)
        }
    }

    fn report(&mut self, name: &str, kind: ViolationKind, message: impl Into<String>) {
        let field = self.path(name);
        self.problems.push(FieldViolation::new(field, kind, message));
    }

    pub fn required<T: DeserializeOwned + Default>(&mut self, name: &str) -> T {
        let object = self.object;
        match object.get(name) {
            None | Some(Value::Null) => {
                self.report(name, ViolationKind::Missing, "field required");
                T::default()
            }
            Some(value) => self.decode(name, value).unwrap_or_default(),
        }
    }

    pub fn optional<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        let object = self.object;
        match object.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.decode(name, value),
        }
    }

    /// ISO 8601 date-time. A value without an offset is read as UTC.
    pub fn timestamp(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let object = self.object;
        match object.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => {
                let parsed = parse_timestamp(raw);
                if parsed.is_none() {
                    self.report(name, ViolationKind::InvalidType, "expected an ISO 8601 date-time");
                }
                parsed
            }
            Some(_) => {
                self.report(name, ViolationKind::InvalidType, "expected an ISO 8601 date-time");
                None
            }
        }
    }

    pub fn nested<T: FromFields + Default>(&mut self, name: &str) -> T {
        let object = self.object;
        match object.get(name) {
            None | Some(Value::Null) => {
                self.report(name, ViolationKind::Missing, "field required");
                T::default()
            }
            Some(Value::Object(inner)) => {
                let prefix = self.path(name);
                T::from_fields(&mut Fields {
                    object: inner,
                    prefix,
                    problems: &mut *self.problems,
                })
            }
            Some(_) => {
                self.report(name, ViolationKind::InvalidType, "expected an object");
                T::default()
            }
        }
    }

    fn decode<T: DeserializeOwned>(&mut self, name: &str, value: &Value) -> Option<T> {
        match T::deserialize(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                self.report(name, ViolationKind::InvalidType, err.to_string());
                None
            }
        }
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|at| at.and_utc()))
}

/// Decodes `data` into `T`. Without structural problems the value is
/// returned as is and constraint checks are left to the use case.
pub fn decode<T: FromFields>(data: &[u8]) -> Result<T, ValidationProblem> {
    let object = match serde_json::from_slice::<Value>(data) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            return Err(ValidationProblem::new(vec![FieldViolation::new(
                "body",
                ViolationKind::InvalidPayload,
                "expected a JSON object",
            )]));
        }
        Err(err) => {
            return Err(ValidationProblem::new(vec![FieldViolation::new(
                "body",
                ViolationKind::InvalidPayload,
                err.to_string(),
            )]));
        }
    };

    let mut problems = Vec::new();
    let value = T::from_fields(&mut Fields::new(&object, &mut problems));
    if problems.is_empty() {
        return Ok(value);
    }

    if let Err(errors) = value.check() {
        let broken: Vec<String> = problems.iter().map(|p| p.field.clone()).collect();
        problems.extend(
            violations(&errors)
                .into_iter()
                .filter(|v| !broken.iter().any(|b| covers(b, &v.field))),
        );
    }
    Err(ValidationProblem::new(problems))
}

/// Placeholders stand in for broken fields, so their rule failures are noise.
fn covers(broken: &str, field: &str) -> bool {
    field == broken
        || field
            .strip_prefix(broken)
            .is_some_and(|rest| rest.starts_with('.'))
}

impl<T: Type> Payload for JsonBody<T> {
    const CONTENT_TYPE: &'static str = "application/json; charset=utf-8";

    fn check_content_type(content_type: &str) -> bool {
        <Json<T> as Payload>::check_content_type(content_type)
    }

    fn schema_ref() -> MetaSchemaRef {
        T::schema_ref()
    }

    fn register(registry: &mut Registry) {
        T::register(registry);
    }
}

impl<T: FromFields + Send> ParsePayload for JsonBody<T> {
    const IS_REQUIRED: bool = true;

    async fn from_request(request: &Request, body: &mut RequestBody) -> poem::Result<Self> {
        let data = Vec::<u8>::from_request(request, body).await?;
        Ok(Self(decode(&data)?))
    }
}

poem_openapi::impl_apirequest_for_payload!(JsonBody<T>, T: Type + FromFields);

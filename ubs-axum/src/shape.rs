//! Request shape validation.
//!
//! Request bodies are read as raw JSON and checked field by field, so that a
//! malformed request is answered with every problem at once, each located by
//! its path, rather than with the first error a deserializer runs into.

use crate::error::ApiError;
use aide::{OperationInput, generate::GenContext, openapi::Operation};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value};
use ubs_core::models::{DateTime, NewBooking, Stay};

/// One problem with the shape of a request.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Issue {
    /// What is wrong
    pub message: String,
    /// Where it is wrong: the field names leading to the offending value
    pub path: Vec<String>,
}

impl Issue {
    pub(crate) fn new(message: impl Into<String>, path: &[&str]) -> Self {
        Self {
            message: message.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Types that can be checked out of an arbitrary JSON value.
pub(crate) trait FromShape: Sized {
    fn from_shape(value: &Value) -> Result<Self, Vec<Issue>>;
}

/// An extractor for JSON bodies validated by [`FromShape`].
///
/// An empty body counts as an empty object. The content type is not
/// inspected.
pub(crate) struct Shaped<T>(pub T);

impl<S: Send + Sync, T: FromShape> FromRequest<S> for Shaped<T> {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::shape(err.body_text(), &[]))?;

        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|err| ApiError::shape(format!("Invalid JSON: {err}"), &[]))?
        };

        T::from_shape(&value).map(Shaped).map_err(ApiError::Shape)
    }
}

// Documented as the JSON body it is validated into
impl<T: JsonSchema> OperationInput for Shaped<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::Json::<T>::operation_input(ctx, operation);
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accumulates issues while picking fields out of a JSON object.
pub(crate) struct Fields<'a> {
    object: Option<&'a Map<String, Value>>,
    issues: Vec<Issue>,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        match value {
            Value::Object(object) => Self {
                object: Some(object),
                issues: Vec::new(),
            },
            other => Self {
                object: None,
                issues: vec![Issue::new(
                    format!("Expected object, received {}", kind(other)),
                    &[],
                )],
            },
        }
    }

    fn field(&mut self, name: &str) -> Option<&'a Value> {
        let object = self.object?;
        let value = object.get(name);
        if value.is_none() {
            self.issues.push(Issue::new("Required", &[name]));
        }
        value
    }

    fn invalid(&mut self, name: &str, message: impl Into<String>) {
        self.issues.push(Issue::new(message, &[name]));
    }

    /// A required string field.
    pub fn string(&mut self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.invalid(name, format!("Expected string, received {}", kind(other)));
                None
            }
        }
    }

    /// A required date field: an RFC3339 datetime or a `YYYY-MM-DD` date.
    pub fn date(&mut self, name: &str) -> Option<DateTime> {
        let raw = self.string(name)?;
        match raw.parse() {
            Ok(date) => Some(date),
            Err(_) => {
                self.invalid(name, "Invalid date");
                None
            }
        }
    }

    /// A required whole number greater than zero.
    pub fn positive_integer(&mut self, name: &str) -> Option<u32> {
        let number = match self.field(name)? {
            Value::Number(number) => number,
            other => {
                self.invalid(name, format!("Expected number, received {}", kind(other)));
                return None;
            }
        };

        // Whole floats such as `2.0` count as integers
        let Some(n) = number.as_f64() else {
            self.invalid(name, "Invalid number");
            return None;
        };
        if n.fract() != 0.0 {
            self.invalid(name, "Expected integer, received float");
            None
        } else if n <= 0.0 {
            self.invalid(name, "Number must be greater than 0");
            None
        } else if n > f64::from(u32::MAX) {
            self.invalid(
                name,
                format!("Number must be less than or equal to {}", u32::MAX),
            );
            None
        } else {
            Some(n as u32)
        }
    }

    /// Every issue found, or the value built from the fields.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, Vec<Issue>> {
        match value {
            Some(value) if self.issues.is_empty() => Ok(value),
            _ => Err(self.issues),
        }
    }
}

impl FromShape for NewBooking {
    fn from_shape(value: &Value) -> Result<Self, Vec<Issue>> {
        let mut fields = Fields::new(value);
        let guest_name = fields.string("guestName");
        let unit_id = fields.string("unitID");
        let check_in_date = fields.date("checkInDate");
        let number_of_nights = fields.positive_integer("numberOfNights");

        let stay = match (check_in_date, number_of_nights) {
            (Some(check_in_date), Some(nights)) => match Stay::new(check_in_date, nights) {
                Ok(stay) => Some(stay),
                Err(err) => {
                    fields.invalid("numberOfNights", err.to_string());
                    None
                }
            },
            _ => None,
        };

        let booking = match (guest_name, unit_id, stay) {
            (Some(guest_name), Some(unit_id), Some(stay)) => Some(NewBooking {
                guest_name,
                unit_id,
                stay,
            }),
            _ => None,
        };
        fields.finish(booking)
    }
}

/// The body of an extension request.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtendRequest {
    /// How many nights to add to the stay
    pub extend_by: u32,
}

impl FromShape for ExtendRequest {
    fn from_shape(value: &Value) -> Result<Self, Vec<Issue>> {
        let mut fields = Fields::new(value);
        let extend_by = fields.positive_integer("extendBy");
        fields.finish(extend_by.map(|extend_by| Self { extend_by }))
    }
}

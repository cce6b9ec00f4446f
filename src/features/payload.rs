use crate::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

/// JSON body of a create request, checked field by field by the handler.
///
/// Absent, malformed or empty bodies are refused up front with "Request must be JSON".
/// A non-empty body that isn't an object carries no fields at all.
#[derive(Debug)]
pub struct JsonPayload {
    fields: Map<String, Value>,
}

impl JsonPayload {
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        if is_empty_value(&value) {
            return Err(ApiError::MalformedBody);
        }

        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(Self { fields })
    }

    /// Reports only the first missing field, in the order given.
    pub fn require(&self, fields: &[&'static str]) -> Result<(), ApiError> {
        match fields.iter().find(|field| !self.fields.contains_key(**field)) {
            Some(missing) => Err(ApiError::MissingField(*missing)),
            None => Ok(()),
        }
    }

    pub fn text(&self, field: &'static str) -> Result<String, ApiError> {
        match self.fields.get(field) {
            Some(Value::String(text)) => Ok(text.to_owned()),
            Some(_) => Err(ApiError::rejected(format!("{} must be a string", field))),
            None => Err(ApiError::MissingField(field)),
        }
    }

    /// Accepts JSON integers and whole-valued floats such as `10.0`.
    pub fn integer(&self, field: &'static str) -> Result<i64, ApiError> {
        match self.fields.get(field).map(whole_number) {
            Some(Some(number)) => Ok(number),
            Some(None) => Err(ApiError::rejected(format!("{} must be an integer", field))),
            None => Err(ApiError::MissingField(field)),
        }
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    if let Some(number) = value.as_i64() {
        return Some(number);
    }

    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let float = value.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

// null, false, 0, "", [] and {} all count as "no data"
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|_| ApiError::MalformedBody)?;

        Self::from_value(value)
    }
}

//! Inbound payload parsing.
//!
//! Bodies are taken as raw JSON and picked apart field by field: required
//! keys must be present with the right type, unknown keys are ignored, and
//! a client-supplied `id` is never read. Everything fails validation before
//! any store call. Create and replacement payloads differ only in the two
//! reference keys: a create may leave them out, a replacement must spell
//! out the full field set and clears a reference with an explicit null.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{MovieFields, NameFields};

impl MovieFields {
    /// Parse a create payload. `genre_id` and `director_id` may be absent.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        Self::parse(body, false)
    }

    /// Parse a replacement payload. Every field, references included, must
    /// be present; `null` is the only way to clear a reference.
    pub fn from_replacement_json(body: &Value) -> Result<Self, AppError> {
        Self::parse(body, true)
    }

    fn parse(body: &Value, references_required: bool) -> Result<Self, AppError> {
        let map = as_object(body)?;
        Ok(Self {
            title: require_string(map, "title")?,
            description: require_string(map, "description")?,
            trailer: require_string(map, "trailer")?,
            year: require_int(map, "year")?,
            rating: require_float(map, "rating")?,
            genre_id: reference_int(map, "genre_id", references_required)?,
            director_id: reference_int(map, "director_id", references_required)?,
        })
    }
}

impl NameFields {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let map = as_object(body)?;
        Ok(Self {
            name: require_string(map, "name")?,
        })
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))
}

fn require_string(map: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::Validation(format!("{key} must be a string"))),
        None => Err(missing(key)),
    }
}

fn require_int(map: &Map<String, Value>, key: &str) -> Result<i32, AppError> {
    match map.get(key) {
        Some(value) => int_value(key, value),
        None => Err(missing(key)),
    }
}

fn require_float(map: &Map<String, Value>, key: &str) -> Result<f64, AppError> {
    match map.get(key) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| AppError::Validation(format!("{key} must be a number"))),
        None => Err(missing(key)),
    }
}

/// Null always means "no reference". Absence means the same only when the
/// key is not required; a replacement demands every key.
fn reference_int(
    map: &Map<String, Value>,
    key: &str,
    required: bool,
) -> Result<Option<i32>, AppError> {
    match map.get(key) {
        None if required => Err(missing(key)),
        None | Some(Value::Null) => Ok(None),
        Some(value) => int_value(key, value).map(Some),
    }
}

fn int_value(key: &str, value: &Value) -> Result<i32, AppError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::Validation(format!("{key} must be an integer")))
}

fn missing(key: &str) -> AppError {
    AppError::Validation(format!("{key} is required"))
}

//! Typed reader over a loose JSON payload
//!
//! Request shapes are built from JSON through [`Fields`], which reports
//! missing values as `RequiredField` and type mismatches as `InvalidFormat`
//! ("invalid type: ...") naming the offending field. `null` is treated the
//! same as an absent field.

use serde_json::{Map, Value};

use super::common::{self, Timestamp, WireEnum};
use super::error::ValidationError;
use super::rules;

/// Read-only view of a JSON object payload
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap a payload; anything but a JSON object is rejected
    pub fn new(body: &'a Value) -> Result<Self, ValidationError> {
        body.as_object()
            .map(|map| Self { map })
            .ok_or_else(|| ValidationError::invalid_type("body", "object"))
    }

    /// Raw value, with `null` folded into `None`
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|value| !value.is_null())
    }

    /// Whether the field is present and non-null
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    // === strings ===

    /// Optional string
    pub fn str(&self, name: &str) -> Result<Option<&'a str>, ValidationError> {
        self.raw(name)
            .map(|value| value.as_str().ok_or_else(|| ValidationError::invalid_type(name, "string")))
            .transpose()
    }

    /// Required string
    pub fn required_str(&self, name: &str) -> Result<&'a str, ValidationError> {
        self.str(name)?.ok_or_else(|| ValidationError::required(name))
    }

    /// Optional owned string
    pub fn string(&self, name: &str) -> Result<Option<String>, ValidationError> {
        Ok(self.str(name)?.map(str::to_owned))
    }

    /// Required owned string
    pub fn required_string(&self, name: &str) -> Result<String, ValidationError> {
        self.required_str(name).map(str::to_owned)
    }

    // === numbers ===

    /// Optional number (integer or float)
    pub fn number(&self, name: &str) -> Result<Option<f64>, ValidationError> {
        self.raw(name)
            .map(|value| value.as_f64().ok_or_else(|| ValidationError::invalid_type(name, "number")))
            .transpose()
    }

    /// Required number (integer or float)
    pub fn required_number(&self, name: &str) -> Result<f64, ValidationError> {
        self.number(name)?.ok_or_else(|| ValidationError::required(name))
    }

    /// Optional integer; whole floats such as `5.0` are accepted, `5.5` is not
    pub fn integer(&self, name: &str) -> Result<Option<i64>, ValidationError> {
        self.raw(name)
            .map(|value| as_integer(value).ok_or_else(|| ValidationError::invalid_type(name, "integer")))
            .transpose()
    }

    /// Required integer
    pub fn required_integer(&self, name: &str) -> Result<i64, ValidationError> {
        self.integer(name)?.ok_or_else(|| ValidationError::required(name))
    }

    // === others ===

    /// Optional boolean
    pub fn bool(&self, name: &str) -> Result<Option<bool>, ValidationError> {
        self.raw(name)
            .map(|value| value.as_bool().ok_or_else(|| ValidationError::invalid_type(name, "boolean")))
            .transpose()
    }

    /// Optional RFC 3339 timestamp
    pub fn timestamp(&self, name: &str) -> Result<Option<Timestamp>, ValidationError> {
        self.str(name)?
            .map(|raw| {
                common::parse_timestamp(raw).ok_or_else(|| {
                    ValidationError::invalid_format(name, "must be an ISO 8601 / RFC 3339 timestamp")
                })
            })
            .transpose()
    }

    /// Optional member of a closed wire set
    pub fn wire<E: WireEnum>(&self, name: &str) -> Result<Option<E>, ValidationError> {
        self.str(name)?.map(|raw| rules::member::<E>(name, raw)).transpose()
    }

    /// Required member of a closed wire set
    pub fn required_wire<E: WireEnum>(&self, name: &str) -> Result<E, ValidationError> {
        let raw = self.required_str(name)?;
        rules::member::<E>(name, raw)
    }

    /// Optional array of strings
    pub fn strings(&self, name: &str) -> Result<Option<Vec<String>>, ValidationError> {
        let Some(value) = self.raw(name) else {
            return Ok(None);
        };
        let items = value.as_array().ok_or_else(|| ValidationError::invalid_type(name, "array"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ValidationError::invalid_type(name, "array of strings"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    let float = value.as_f64()?;
    if float.fract() != 0.0 || float.abs() >= 9.0e15 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let int = float as i64;
    Some(int)
}

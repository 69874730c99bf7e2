//! Request shapes and the validation entry points
//!
//! Every request body or query object is a typed value implementing
//! [`Request`]. Validation happens in two steps: [`Request::from_fields`]
//! reads the payload (required fields and JSON types), then
//! [`Request::validate`] checks value rules and cross-field rules.
//! Both steps stop at the first violation.

use serde_json::Value;

use super::error::ValidationError;
use super::fields::Fields;

/// A typed request payload with field rules
pub trait Request: Sized {
    /// Build the typed value from a JSON object, checking presence and types
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError>;

    /// Check the value rules of an already-typed payload
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Read and validate a JSON payload into its typed request shape
pub fn parse<R: Request>(body: &Value) -> Result<R, ValidationError> {
    let fields = Fields::new(body)?;
    let request = R::from_fields(&fields)?;
    request.validate()?;
    Ok(request)
}

/// Validate a JSON payload, discarding the typed value
///
/// This is the function stored in endpoint descriptors.
pub fn check<R: Request>(body: &Value) -> Result<(), ValidationError> {
    parse::<R>(body).map(drop)
}

//! Field rule vocabulary
//!
//! Small pure checks shared by the resource validators. Each returns the
//! first violation as a [`ValidationError`]; none of them know which
//! resource they are checking.

use super::common::{self, Timestamp, WireEnum};
use super::error::ValidationError;

/// Character count, not byte count
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Inclusive `[min, max]` character bounds
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = char_len(value);
    if len < min {
        return Err(ValidationError::length(
            field,
            format!("must be at least {min} characters (got {len})"),
        ));
    }
    if len > max {
        return Err(ValidationError::length(
            field,
            format!("must be at most {max} characters (got {len})"),
        ));
    }
    Ok(())
}

/// Upper character bound only
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    length(field, value, 0, max)
}

/// Like [`length`], but whitespace-only strings count as empty
pub fn trimmed_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if min > 0 && value.trim().is_empty() {
        return Err(ValidationError::length(field, "must not be blank"));
    }
    length(field, value, min, max)
}

/// Inclusive `[min, max]` numeric bounds
pub fn range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < min || value > max {
        return Err(ValidationError::range(
            field,
            format!("must be between {min} and {max} (got {value})"),
        ));
    }
    Ok(())
}

/// Inclusive `[min, max]` integer bounds
pub fn int_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::range(
            field,
            format!("must be between {min} and {max} (got {value})"),
        ));
    }
    Ok(())
}

/// Strictly greater than zero
pub fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ValidationError::range(field, format!("must be greater than 0 (got {value})")));
    }
    Ok(())
}

/// Zero or more
pub fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < 0.0 {
        return Err(ValidationError::range(field, format!("must be 0 or more (got {value})")));
    }
    Ok(())
}

/// Integer lower bound only
pub fn at_least(field: &str, value: i64, min: i64) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::range(field, format!("must be {min} or more (got {value})")));
    }
    Ok(())
}

/// Latitude in `[-90, 90]`
pub fn latitude(field: &str, value: f64) -> Result<(), ValidationError> {
    range(field, value, -90.0, 90.0)
}

/// Longitude in `[-180, 180]`
pub fn longitude(field: &str, value: f64) -> Result<(), ValidationError> {
    range(field, value, -180.0, 180.0)
}

/// Exact membership in a closed wire set
pub fn member<E: WireEnum>(field: &str, raw: &str) -> Result<E, ValidationError> {
    E::from_wire(raw).ok_or_else(|| {
        ValidationError::invalid_format(
            field,
            format!("'{raw}' is not one of: {}", E::allowed()),
        )
    })
}

/// UUID-shaped identifier
pub fn uuid(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_uuid(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "must be a valid UUID"))
    }
}

/// Standard email shape
pub fn email(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_email(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "must be a valid email address"))
    }
}

/// E.164-like phone number
pub fn phone(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_phone(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            "must be a valid phone number (E.164, e.g. +33612345678)",
        ))
    }
}

/// Username shape
pub fn username(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_username(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            "must start with a letter and contain only letters, digits, '-', '_' or '.'",
        ))
    }
}

/// Lower-case dashed slug
pub fn slug(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_slug(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            "must be lower-case letters and digits separated by single dashes",
        ))
    }
}

/// ISO 4217-shaped currency code
pub fn currency(field: &str, value: &str) -> Result<(), ValidationError> {
    if common::is_currency(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "must be a 3-letter currency code (e.g. EUR)"))
    }
}

/// Both fields present, or neither
pub fn paired<A, B>(
    first: &str,
    a: Option<A>,
    second: &str,
    b: Option<B>,
) -> Result<(), ValidationError> {
    match (a.is_some(), b.is_some()) {
        (true, false) => Err(ValidationError::cross_field(
            second,
            format!("{second} is required when {first} is provided"),
        )),
        (false, true) => Err(ValidationError::cross_field(
            first,
            format!("{first} is required when {second} is provided"),
        )),
        _ => Ok(()),
    }
}

/// `end` strictly after `start`, when both are present
pub fn ordered(
    start_field: &str,
    start: Option<&Timestamp>,
    end_field: &str,
    end: Option<&Timestamp>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end <= start => Err(ValidationError::cross_field(
            end_field,
            format!("{end_field} must be after {start_field}"),
        )),
        _ => Ok(()),
    }
}

/// `value` must not exceed `limit`, when both are present
pub fn at_most<T: PartialOrd + Copy + std::fmt::Display>(
    field: &str,
    value: Option<T>,
    limit_field: &str,
    limit: Option<T>,
) -> Result<(), ValidationError> {
    match (value, limit) {
        (Some(value), Some(limit)) if value > limit => Err(ValidationError::cross_field(
            field,
            format!("{field} ({value}) must not exceed {limit_field} ({limit})"),
        )),
        _ => Ok(()),
    }
}

/// `dependent` may only be given together with `anchor`
pub fn requires<A, B>(
    dependent_field: &str,
    dependent: Option<A>,
    anchor_field: &str,
    anchor: Option<B>,
) -> Result<(), ValidationError> {
    if dependent.is_some() && anchor.is_none() {
        return Err(ValidationError::cross_field(
            dependent_field,
            format!("{dependent_field} requires {anchor_field}"),
        ));
    }
    Ok(())
}

/// Reject a status move the lifecycle does not allow
pub fn transition<E: WireEnum>(
    field: &str,
    current: E,
    next: E,
    allowed: bool,
) -> Result<(), ValidationError> {
    if allowed {
        Ok(())
    } else {
        Err(ValidationError::cross_field(
            field,
            format!("cannot change status from {} to {}", current.as_str(), next.as_str()),
        ))
    }
}

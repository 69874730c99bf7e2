//! Validate command - check a payload without sending it

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde_json::Value;

use paps_serve::output::{OutputMode, ValidateResult};
use paps_serve::serve::{Registry, ServeError};

use super::borrow_params;

/// Validate a payload (and path parameters, when given) for one operation
///
/// Exits with status 1 when a rule is violated.
pub fn validate(
    key: &str,
    body: Option<&str>,
    file: Option<&Path>,
    params: &[(String, String)],
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let payload = read_payload(body, file)?;
    let registry = Registry::standard()?;

    let outcome = if params.is_empty() {
        registry.validate(key, payload.as_ref()).map(|_| ())
    } else {
        registry.prepare(key, &borrow_params(params), payload).map(|_| ())
    };

    let error = match outcome {
        Ok(()) => None,
        Err(ServeError::Validation(err)) => Some(err),
        Err(err) => return Err(err.into()),
    };

    let valid = error.is_none();
    ValidateResult {
        key: key.to_string(),
        valid,
        error,
    }
    .render(mode);

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read_payload(body: Option<&str>, file: Option<&Path>) -> anyhow::Result<Option<Value>> {
    let raw = match (body, file) {
        (Some(body), _) => body.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read payload file {}", path.display()))?,
        (None, None) => return Ok(None),
    };
    let value = serde_json::from_str(&raw).context("payload is not valid JSON")?;
    Ok(Some(value))
}

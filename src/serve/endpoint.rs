//! Endpoint descriptors
//!
//! An [`Endpoint`] describes one API operation: its key, HTTP method, path
//! template, auth requirement, optional payload validator and optional
//! multipart upload. Descriptors are plain `Copy` values declared in `const`
//! tables by each resource module.
//!
//! Path templates use named placeholders (`/paps/{paps_id}/apply`).

use serde::Serialize;
use serde_json::Value;

use super::error::ValidationError;
use super::rules;

/// Signature of a payload validator
pub type ValidateFn = fn(&Value) -> Result<(), ValidationError>;

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case method name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the payload travels in the request body (vs the query string)
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multipart upload declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Upload {
    /// Multipart field name (`media` or `file`)
    pub field: &'static str,
    /// Whether several files may be sent at once
    pub multiple: bool,
}

/// One API operation
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Operation key, e.g. `paps.create`
    pub key: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template
    pub path: &'static str,
    /// Whether a bearer credential must be attached
    pub auth: bool,
    /// Payload validator, if the operation takes a body or query object
    pub validator: Option<ValidateFn>,
    /// Multipart upload declaration, if any
    pub upload: Option<Upload>,
}

impl Endpoint {
    /// An authenticated operation with no validator and no upload
    #[must_use]
    pub const fn new(key: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            key,
            method,
            path,
            auth: true,
            validator: None,
            upload: None,
        }
    }

    /// `GET` operation
    #[must_use]
    pub const fn get(key: &'static str, path: &'static str) -> Self {
        Self::new(key, Method::Get, path)
    }

    /// `POST` operation
    #[must_use]
    pub const fn post(key: &'static str, path: &'static str) -> Self {
        Self::new(key, Method::Post, path)
    }

    /// `PUT` operation
    #[must_use]
    pub const fn put(key: &'static str, path: &'static str) -> Self {
        Self::new(key, Method::Put, path)
    }

    /// `PATCH` operation
    #[must_use]
    pub const fn patch(key: &'static str, path: &'static str) -> Self {
        Self::new(key, Method::Patch, path)
    }

    /// `DELETE` operation
    #[must_use]
    pub const fn delete(key: &'static str, path: &'static str) -> Self {
        Self::new(key, Method::Delete, path)
    }

    /// Mark the operation as callable without credentials
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.auth = false;
        self
    }

    /// Attach a payload validator
    #[must_use]
    pub const fn validated(mut self, validator: ValidateFn) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Declare a multipart upload
    #[must_use]
    pub const fn upload(mut self, field: &'static str, multiple: bool) -> Self {
        self.upload = Some(Upload { field, multiple });
        self
    }

    /// Resource prefix of the key (`paps` for `paps.create`)
    #[must_use]
    pub fn resource(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(resource, _)| resource)
    }

    /// Placeholder names in the path template, in order
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
    }

    /// Substitute path parameters into the template
    ///
    /// Every placeholder must be supplied; identifiers (`*_id`) must be
    /// UUID-shaped. Extra parameters are ignored.
    pub fn render_path(&self, params: &[(&str, &str)]) -> Result<String, ValidationError> {
        let mut rendered = Vec::new();
        for segment in self.path.split('/') {
            let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
                rendered.push(segment.to_string());
                continue;
            };
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ValidationError::required(name))?;
            if name.ends_with("_id") {
                rules::uuid(name, value)?;
            }
            rendered.push(value.to_string());
        }
        Ok(rendered.join("/"))
    }

    /// Run the payload validator, if any
    ///
    /// A missing payload is checked as an empty object, so optional-only
    /// query shapes pass and required fields are still reported.
    pub fn validate(&self, body: Option<&Value>) -> Result<(), ValidationError> {
        let Some(validator) = self.validator else {
            return Ok(());
        };
        match body {
            Some(body) => validator(body),
            None => validator(&Value::Object(serde_json::Map::new())),
        }
    }
}

//! Endpoint registry
//!
//! The [`Registry`] maps operation keys to [`Endpoint`] descriptors. It is
//! built once (usually with [`Registry::standard`]), never mutated, and
//! handed to whoever needs to issue requests. Lookups perform no I/O.

use std::collections::BTreeMap;

use serde_json::Value;

use super::endpoint::{Endpoint, Method, Upload};
use super::error::ServeError;
use super::{asap, auth, chat, comments, paps, profile, ratings, spap, system};

/// Immutable table of every known operation
#[derive(Debug, Clone)]
pub struct Registry {
    endpoints: BTreeMap<&'static str, Endpoint>,
}

/// A resolved, validated request ready for a transport layer
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Operation key
    pub key: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path with every placeholder substituted
    pub path: String,
    /// Whether a bearer credential must be attached
    pub auth: bool,
    /// Multipart upload declaration, if any
    pub upload: Option<Upload>,
    /// Validated body (or query object for GET/DELETE)
    pub payload: Option<Value>,
}

impl Registry {
    /// Build a registry, refusing duplicate keys
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> Result<Self, ServeError> {
        let mut table = BTreeMap::new();
        for endpoint in endpoints {
            if table.insert(endpoint.key, endpoint).is_some() {
                return Err(ServeError::DuplicateOperation(endpoint.key.to_string()));
            }
        }
        log::debug!("endpoint registry built with {} operations", table.len());
        Ok(Self { endpoints: table })
    }

    /// Every operation of the PAPS API
    pub fn standard() -> Result<Self, ServeError> {
        let tables: [&[Endpoint]; 9] = [
            auth::ENDPOINTS,
            profile::ENDPOINTS,
            paps::ENDPOINTS,
            spap::ENDPOINTS,
            asap::ENDPOINTS,
            ratings::ENDPOINTS,
            chat::ENDPOINTS,
            comments::ENDPOINTS,
            system::ENDPOINTS,
        ];
        Self::new(tables.into_iter().flatten().copied())
    }

    /// Look up an operation
    pub fn resolve(&self, key: &str) -> Result<&Endpoint, ServeError> {
        let endpoint = self
            .endpoints
            .get(key)
            .ok_or_else(|| ServeError::UnknownOperation(key.to_string()))?;
        log::debug!("resolved {key} -> {} {}", endpoint.method, endpoint.path);
        Ok(endpoint)
    }

    /// Whether an operation is registered
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.endpoints.contains_key(key)
    }

    /// Look up an operation and validate a payload against it
    pub fn validate(&self, key: &str, payload: Option<&Value>) -> Result<&Endpoint, ServeError> {
        let endpoint = self.resolve(key)?;
        endpoint.validate(payload).inspect_err(|err| {
            log::debug!("{key}: payload rejected ({} on {})", err.kind, err.field);
        })?;
        Ok(endpoint)
    }

    /// Resolve, render the path and validate the payload in one step
    ///
    /// Nothing is sent; the result is what a transport layer needs to issue
    /// the request.
    pub fn prepare(
        &self,
        key: &str,
        params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<PreparedRequest, ServeError> {
        let endpoint = self.validate(key, payload.as_ref())?;
        let path = endpoint.render_path(params)?;
        Ok(PreparedRequest {
            key: endpoint.key,
            method: endpoint.method,
            path,
            auth: endpoint.auth,
            upload: endpoint.upload,
            payload,
        })
    }

    /// All operations, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Operations of one resource (`paps`, `chat`, ...)
    pub fn resource<'a>(&'a self, resource: &'a str) -> impl Iterator<Item = &'a Endpoint> {
        self.iter().filter(move |endpoint| endpoint.resource() == resource)
    }

    /// Number of operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the registry has no operations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

//! Client-side validation and endpoint routing for the PAPS API
//!
//! This module is HTTP-agnostic: it never opens a connection. It describes
//! what each operation looks like on the wire and rejects payloads that
//! break a field rule before a transport layer sends them.
//!
//! ## Layout
//!
//! - [`registry`] - operation key -> [`Endpoint`] lookup, built once
//! - [`endpoint`] - method, path template, auth flag, validator, upload
//! - [`request`] / [`fields`] / [`rules`] - the validation machinery
//! - [`common`] - identifiers, timestamps, closed status sets
//! - one module per resource: [`auth`], [`profile`], [`paps`], [`spap`],
//!   [`asap`], [`ratings`], [`chat`], [`comments`], [`system`]
//! - [`events`] - the cascade triggered by accepting an application
//!
//! ## Example
//!
//! ```
//! use paps_serve::serve::Registry;
//! use serde_json::json;
//!
//! let registry = Registry::standard().unwrap();
//! let endpoint = registry.resolve("asap.updateStatus").unwrap();
//! assert_eq!(endpoint.path, "/asap/{asap_id}/status");
//! assert!(endpoint.validate(Some(&json!({"status": "archived"}))).is_err());
//! ```

pub mod asap;
pub mod auth;
pub mod chat;
pub mod comments;
pub mod common;
pub mod endpoint;
pub mod error;
pub mod events;
pub mod fields;
pub mod media;
pub mod paps;
pub mod profile;
pub mod ratings;
pub mod registry;
pub mod request;
pub mod rules;
pub mod spap;
pub mod system;

pub use endpoint::{Endpoint, Method, Upload};
pub use error::{ErrorKind, ServeError, ValidationError};
pub use registry::{PreparedRequest, Registry};
pub use request::{Request, check, parse};

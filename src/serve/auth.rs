//! Registration and login
//!
//! `auth.register` and `auth.login` are the only operations besides the
//! system probes that can be called without a bearer token.

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::request::{Request, check};
use super::rules;

/// Authentication operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::post("auth.register", "/register").public().validated(check::<RegisterRequest>),
    Endpoint::post("auth.login", "/login").public().validated(check::<LoginRequest>),
    Endpoint::post("auth.logout", "/logout"),
    Endpoint::get("auth.whoami", "/whoami"),
];

/// Body of `auth.register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// 3 to 50 characters, starts with a letter
    pub username: String,
    /// Contact email
    pub email: String,
    /// Clear-text password, sent over TLS
    pub password: String,
    /// E.164 phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Request for RegisterRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            username: fields.required_string("username")?,
            email: fields.required_string("email")?,
            password: fields.required_string("password")?,
            phone: fields.string("phone")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::length("username", &self.username, 3, 50)?;
        rules::username("username", &self.username)?;
        rules::max_length("email", &self.email, 255)?;
        rules::email("email", &self.email)?;
        rules::length("password", &self.password, 1, 128)?;
        if let Some(phone) = &self.phone {
            rules::phone("phone", phone)?;
        }
        Ok(())
    }
}

/// Body of `auth.login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or email
    pub login: String,
    /// Clear-text password, sent over TLS
    pub password: String,
}

impl Request for LoginRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            login: fields.required_string("login")?,
            password: fields.required_string("password")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::trimmed_length("login", &self.login, 1, 255)?;
        rules::length("password", &self.password, 1, 128)
    }
}

/// Response to `auth.login` and `auth.register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Bearer token to attach to authenticated operations
    pub token: String,
    /// Authenticated user
    pub user_id: Id,
    /// Token expiry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

/// Response to `auth.whoami`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: Id,
    /// Login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the user has admin rights
    #[serde(default)]
    pub is_admin: bool,
    /// Registration time
    pub created_at: Timestamp,
}

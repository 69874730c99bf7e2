//! Job assignments (ASAP)
//!
//! An assignment is created when an owner accepts an application. It moves
//! `active -> in_progress -> completed`, or is cancelled or disputed on
//! the way. Once completed, both sides may rate each other.

use serde::{Deserialize, Serialize};

use super::common::{AsapStatus, Id, Timestamp, WireEnum};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::media::MEDIA_FIELD;
use super::ratings::RateRequest;
use super::request::{Request, check};
use super::rules;

/// Assignment operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("asap.list", "/asap").validated(check::<ListAsapQuery>),
    Endpoint::get("asap.forPaps", "/paps/{paps_id}/assignments").validated(check::<ListAsapQuery>),
    Endpoint::get("asap.get", "/asap/{asap_id}"),
    Endpoint::put("asap.updateStatus", "/asap/{asap_id}/status")
        .validated(check::<UpdateAsapStatusRequest>),
    Endpoint::post("asap.rate", "/asap/{asap_id}/rate").validated(check::<RateRequest>),
    Endpoint::delete("asap.delete", "/asap/{asap_id}"),
    Endpoint::post("asap.uploadMedia", "/asap/{asap_id}/media").upload(MEDIA_FIELD, true),
    Endpoint::get("asap.listMedia", "/asap/{asap_id}/media"),
];

/// Which side of an assignment the caller is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsapRole {
    /// The posting owner
    Owner,
    /// The accepted applicant
    Worker,
}

impl WireEnum for AsapRole {
    const ALL: &'static [Self] = &[Self::Owner, Self::Worker];

    fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Worker => "worker",
        }
    }
}

/// An assignment as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asap {
    /// Assignment identifier
    pub id: Id,
    /// Posting the work belongs to
    pub paps_id: Id,
    /// Application that was accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spap_id: Option<Id>,
    /// Posting owner
    pub owner_id: Id,
    /// Accepted applicant
    pub accepted_user_id: Id,
    /// Lifecycle state
    pub status: AsapStatus,
    /// Chat thread moved over from the application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_thread_id: Option<Id>,
    /// Acceptance time
    pub assigned_at: Timestamp,
    /// When work started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// When work completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

/// Body of `asap.updateStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAsapStatusRequest {
    /// Target status
    pub status: AsapStatus,
}

impl UpdateAsapStatusRequest {
    /// Validate the move from the assignment's current status
    pub fn validate_from(&self, current: AsapStatus) -> Result<(), ValidationError> {
        self.validate()?;
        rules::transition("status", current, self.status, current.can_transition_to(self.status))
    }
}

impl Request for UpdateAsapStatusRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: fields.required_wire("status")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Query of `asap.list` and `asap.forPaps`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAsapQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Restrict to a status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AsapStatus>,
    /// Restrict to assignments where the caller is owner or worker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AsapRole>,
}

impl Request for ListAsapQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            status: fields.wire("status")?,
            role: fields.wire("role")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(limit) = self.limit {
            rules::int_range("limit", limit, 1, 100)?;
        }
        if let Some(offset) = self.offset {
            rules::at_least("offset", offset, 0)?;
        }
        Ok(())
    }
}

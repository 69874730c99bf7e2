//! Job applications (SPAP)
//!
//! Workers apply to a published posting; the owner accepts or rejects, the
//! applicant may withdraw while the application is pending. Accepting is
//! modelled by [`ApplicationAccepted`](super::events::ApplicationAccepted).

use serde::{Deserialize, Serialize};

use super::common::{Id, SpapStatus, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::media::MEDIA_FIELD;
use super::request::{Request, check};
use super::rules;

/// Application operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::post("spap.apply", "/paps/{paps_id}/apply").validated(check::<ApplyRequest>),
    Endpoint::get("spap.listForPaps", "/paps/{paps_id}/applications")
        .validated(check::<ListSpapQuery>),
    Endpoint::get("spap.mine", "/spap/my").validated(check::<ListSpapQuery>),
    Endpoint::get("spap.get", "/spap/{spap_id}"),
    Endpoint::delete("spap.withdraw", "/spap/{spap_id}"),
    Endpoint::put("spap.accept", "/spap/{spap_id}/accept"),
    Endpoint::put("spap.reject", "/spap/{spap_id}/reject"),
    Endpoint::post("spap.uploadMedia", "/spap/{spap_id}/media").upload(MEDIA_FIELD, true),
    Endpoint::get("spap.listMedia", "/spap/{spap_id}/media"),
];

/// An application as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spap {
    /// Application identifier
    pub id: Id,
    /// Posting applied to
    pub paps_id: Id,
    /// Applicant's user identifier
    pub applicant_id: Id,
    /// Lifecycle state
    pub status: SpapStatus,
    /// Cover message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Counter-offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_payment: Option<f64>,
    /// Applicant latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Applicant longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Applicant address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    /// Chat thread opened with the application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_thread_id: Option<Id>,
    /// Submission time
    pub applied_at: Timestamp,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Response to `spap.apply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResponse {
    /// New application identifier
    pub spap_id: Id,
    /// Chat thread opened with the owner
    pub chat_thread_id: Id,
}

/// Response to `spap.accept`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptResponse {
    /// Assignment created from the application
    pub asap_id: Id,
    /// Chat thread, now attached to the assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_thread_id: Option<Id>,
    /// Whether the posting was closed because it is now full
    #[serde(default)]
    pub paps_closed: bool,
}

/// Body of `spap.apply`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyRequest {
    /// Cover message, up to 2000 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Counter-offer, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_payment: Option<f64>,
    /// Latitude, paired with `location_lng`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Longitude, paired with `location_lat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Free-form address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
}

impl Request for ApplyRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            message: fields.string("message")?,
            proposed_payment: fields.number("proposed_payment")?,
            location_lat: fields.number("location_lat")?,
            location_lng: fields.number("location_lng")?,
            location_address: fields.string("location_address")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(message) = &self.message {
            rules::max_length("message", message, 2000)?;
        }
        if let Some(payment) = self.proposed_payment {
            rules::non_negative("proposed_payment", payment)?;
        }
        if let Some(lat) = self.location_lat {
            rules::latitude("location_lat", lat)?;
        }
        if let Some(lng) = self.location_lng {
            rules::longitude("location_lng", lng)?;
        }
        if let Some(address) = &self.location_address {
            rules::max_length("location_address", address, 500)?;
        }
        rules::paired("location_lat", self.location_lat, "location_lng", self.location_lng)
    }
}

/// Query of `spap.listForPaps` and `spap.mine`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSpapQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Restrict to a status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SpapStatus>,
}

impl Request for ListSpapQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            status: fields.wire("status")?,
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

/// Check a decision on an application against its current status
///
/// Accept, reject and withdraw carry no body; this is the only rule they
/// have on the client side.
pub fn check_decision(current: SpapStatus, next: SpapStatus) -> Result<(), ValidationError> {
    rules::transition("status", current, next, current.can_transition_to(next))
}

//! Job postings (PAPS)
//!
//! A posting is created by its owner as a draft, published once it has a
//! start date, and later closed or cancelled.

use serde::{Deserialize, Serialize};

use super::common::{Id, PapsStatus, PaymentType, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::media::MEDIA_FIELD;
use super::request::{Request, check};
use super::rules;

/// Posting operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("paps.list", "/paps").validated(check::<ListPapsQuery>),
    Endpoint::get("paps.get", "/paps/{paps_id}"),
    Endpoint::post("paps.create", "/paps").validated(check::<CreatePapsRequest>),
    Endpoint::put("paps.update", "/paps/{paps_id}").validated(check::<UpdatePapsRequest>),
    Endpoint::put("paps.updateStatus", "/paps/{paps_id}/status")
        .validated(check::<UpdatePapsStatusRequest>),
    Endpoint::delete("paps.delete", "/paps/{paps_id}"),
    Endpoint::post("paps.uploadMedia", "/paps/{paps_id}/media").upload(MEDIA_FIELD, true),
    Endpoint::get("paps.listMedia", "/paps/{paps_id}/media"),
    Endpoint::delete("paps.deleteMedia", "/paps/media/{media_id}"),
];

const TITLE_MIN: usize = 5;
const TITLE_MAX: usize = 200;
const DESCRIPTION_MIN: usize = 20;
const DESCRIPTION_MAX: usize = 5000;
const ADDRESS_MAX: usize = 500;
const MAX_PEOPLE: i64 = 100;

// =============================================================================
// ENTITIES
// =============================================================================

/// A job posting as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paps {
    /// Posting identifier
    pub id: Id,
    /// Owner's user identifier
    pub owner_id: Id,
    /// Short title
    pub title: String,
    /// Full description
    pub description: String,
    /// Offered amount
    pub payment_amount: f64,
    /// How the amount is paid
    #[serde(default)]
    pub payment_type: PaymentType,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    /// Latitude of the job site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Longitude of the job site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Free-form address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    /// Maximum number of applications accepted for review
    pub max_applicants: u32,
    /// Maximum number of assignments
    pub max_assignees: u32,
    /// Lifecycle state
    pub status: PapsStatus,
    /// Scheduled start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<Timestamp>,
    /// Scheduled end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<Timestamp>,
    /// Expected duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    /// Whether the posting is listed publicly
    #[serde(default = "default_public")]
    pub is_public: bool,
    /// Category identifiers
    #[serde(default)]
    pub category_ids: Vec<Id>,
    /// Applications received so far
    #[serde(default)]
    pub application_count: u32,
    /// Creation time
    pub created_at: Timestamp,
    /// Last update time
    pub updated_at: Timestamp,
}

const fn default_public() -> bool {
    true
}

/// A page of postings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PapsList {
    /// Postings on this page
    pub paps: Vec<Paps>,
    /// Total matching postings
    pub total: u64,
}

/// Response to a posting creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePapsResponse {
    /// New posting identifier
    pub paps_id: Id,
}

// =============================================================================
// CREATE
// =============================================================================

/// Body of `paps.create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePapsRequest {
    /// Short title (5 to 200 characters)
    pub title: String,
    /// Full description (20 to 5000 characters)
    pub description: String,
    /// Offered amount, strictly positive
    pub payment_amount: f64,
    /// Defaults to `fixed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    /// Latitude, paired with `location_lng`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Longitude, paired with `location_lat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Free-form address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    /// 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_applicants: Option<i64>,
    /// 1 to 100, not above `max_applicants`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_assignees: Option<i64>,
    /// Defaults to `draft`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PapsStatus>,
    /// Required when publishing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<Timestamp>,
    /// Strictly after `start_datetime`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<Timestamp>,
    /// Expected duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<i64>,
    /// Listed publicly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Category identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Id>>,
}

impl CreatePapsRequest {
    /// Minimal draft posting
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, payment_amount: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            payment_amount,
            payment_type: None,
            payment_currency: None,
            location_lat: None,
            location_lng: None,
            location_address: None,
            max_applicants: None,
            max_assignees: None,
            status: None,
            start_datetime: None,
            end_datetime: None,
            estimated_duration: None,
            is_public: None,
            category_ids: None,
        }
    }

    /// Effective status (`draft` when omitted)
    #[must_use]
    pub fn status(&self) -> PapsStatus {
        self.status.unwrap_or_default()
    }
}

impl Request for CreatePapsRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: fields.required_string("title")?,
            description: fields.required_string("description")?,
            payment_amount: fields.required_number("payment_amount")?,
            payment_type: fields.wire("payment_type")?,
            payment_currency: fields.string("payment_currency")?,
            location_lat: fields.number("location_lat")?,
            location_lng: fields.number("location_lng")?,
            location_address: fields.string("location_address")?,
            max_applicants: fields.integer("max_applicants")?,
            max_assignees: fields.integer("max_assignees")?,
            status: fields.wire("status")?,
            start_datetime: fields.timestamp("start_datetime")?,
            end_datetime: fields.timestamp("end_datetime")?,
            estimated_duration: fields.integer("estimated_duration")?,
            is_public: fields.bool("is_public")?,
            category_ids: fields.strings("category_ids")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::length("title", &self.title, TITLE_MIN, TITLE_MAX)?;
        rules::length("description", &self.description, DESCRIPTION_MIN, DESCRIPTION_MAX)?;
        rules::positive("payment_amount", self.payment_amount)?;
        if let Some(currency) = &self.payment_currency {
            rules::currency("payment_currency", currency)?;
        }
        check_location(self.location_lat, self.location_lng, self.location_address.as_deref())?;
        check_capacity(self.max_applicants, self.max_assignees)?;
        if let Some(duration) = self.estimated_duration {
            rules::at_least("estimated_duration", duration, 1)?;
        }
        if let Some(ids) = &self.category_ids {
            check_category_ids(ids)?;
        }

        rules::ordered(
            "start_datetime",
            self.start_datetime.as_ref(),
            "end_datetime",
            self.end_datetime.as_ref(),
        )?;
        check_publishable(self.status, self.start_datetime.as_ref())
    }
}

// =============================================================================
// UPDATE
// =============================================================================

/// Body of `paps.update`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePapsRequest {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    /// New payment type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// New currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    /// New latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// New longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// New address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    /// New applicant cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_applicants: Option<i64>,
    /// New assignee cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_assignees: Option<i64>,
    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PapsStatus>,
    /// New start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<Timestamp>,
    /// New end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<Timestamp>,
    /// New duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<i64>,
    /// New visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Replacement category identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Id>>,
}

impl UpdatePapsRequest {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Request for UpdatePapsRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: fields.string("title")?,
            description: fields.string("description")?,
            payment_amount: fields.number("payment_amount")?,
            payment_type: fields.wire("payment_type")?,
            payment_currency: fields.string("payment_currency")?,
            location_lat: fields.number("location_lat")?,
            location_lng: fields.number("location_lng")?,
            location_address: fields.string("location_address")?,
            max_applicants: fields.integer("max_applicants")?,
            max_assignees: fields.integer("max_assignees")?,
            status: fields.wire("status")?,
            start_datetime: fields.timestamp("start_datetime")?,
            end_datetime: fields.timestamp("end_datetime")?,
            estimated_duration: fields.integer("estimated_duration")?,
            is_public: fields.bool("is_public")?,
            category_ids: fields.strings("category_ids")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::cross_field("body", "at least one field must be provided"));
        }
        if let Some(title) = &self.title {
            rules::length("title", title, TITLE_MIN, TITLE_MAX)?;
        }
        if let Some(description) = &self.description {
            rules::length("description", description, DESCRIPTION_MIN, DESCRIPTION_MAX)?;
        }
        if let Some(amount) = self.payment_amount {
            rules::positive("payment_amount", amount)?;
        }
        if let Some(currency) = &self.payment_currency {
            rules::currency("payment_currency", currency)?;
        }
        check_location(self.location_lat, self.location_lng, self.location_address.as_deref())?;
        check_capacity(self.max_applicants, self.max_assignees)?;
        if let Some(duration) = self.estimated_duration {
            rules::at_least("estimated_duration", duration, 1)?;
        }
        if let Some(ids) = &self.category_ids {
            check_category_ids(ids)?;
        }

        rules::ordered(
            "start_datetime",
            self.start_datetime.as_ref(),
            "end_datetime",
            self.end_datetime.as_ref(),
        )?;
        // Only when this update publishes; an already stored start date is the server's concern.
        if self.status == Some(PapsStatus::Published) {
            check_publishable(self.status, self.start_datetime.as_ref())?;
        }
        Ok(())
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Body of `paps.updateStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePapsStatusRequest {
    /// Target status
    pub status: PapsStatus,
}

impl UpdatePapsStatusRequest {
    /// Validate the move from the posting's current status
    pub fn validate_from(&self, current: PapsStatus) -> Result<(), ValidationError> {
        self.validate()?;
        rules::transition("status", current, self.status, current.can_transition_to(self.status))
    }
}

impl Request for UpdatePapsStatusRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            status: fields.required_wire("status")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

// =============================================================================
// LIST
// =============================================================================

/// Query of `paps.list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPapsQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Restrict to a category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Id>,
    /// Restrict to a payment type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// Restrict to a status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PapsStatus>,
    /// Search centre latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Search centre longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Search radius in kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    /// Minimum payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_payment: Option<f64>,
    /// Maximum payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_payment: Option<f64>,
    /// Full-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Id>,
}

impl Request for ListPapsQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            category_id: fields.string("category_id")?,
            payment_type: fields.wire("payment_type")?,
            status: fields.wire("status")?,
            location_lat: fields.number("location_lat")?,
            location_lng: fields.number("location_lng")?,
            max_distance: fields.number("max_distance")?,
            min_payment: fields.number("min_payment")?,
            max_payment: fields.number("max_payment")?,
            search: fields.string("search")?,
            owner_id: fields.string("owner_id")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(limit) = self.limit {
            rules::int_range("limit", limit, 1, 100)?;
        }
        if let Some(offset) = self.offset {
            rules::at_least("offset", offset, 0)?;
        }
        if let Some(id) = &self.category_id {
            rules::uuid("category_id", id)?;
        }
        if let Some(id) = &self.owner_id {
            rules::uuid("owner_id", id)?;
        }
        if let Some(lat) = self.location_lat {
            rules::latitude("location_lat", lat)?;
        }
        if let Some(lng) = self.location_lng {
            rules::longitude("location_lng", lng)?;
        }
        if let Some(distance) = self.max_distance {
            rules::positive("max_distance", distance)?;
        }
        if let Some(min) = self.min_payment {
            rules::non_negative("min_payment", min)?;
        }
        if let Some(max) = self.max_payment {
            rules::non_negative("max_payment", max)?;
        }
        if let Some(search) = &self.search {
            rules::max_length("search", search, 200)?;
        }

        rules::paired("location_lat", self.location_lat, "location_lng", self.location_lng)?;
        rules::requires("max_distance", self.max_distance, "location_lat", self.location_lat)?;
        rules::at_most("min_payment", self.min_payment, "max_payment", self.max_payment)
    }
}

// =============================================================================
// SHARED POSTING RULES
// =============================================================================

fn check_location(lat: Option<f64>, lng: Option<f64>, address: Option<&str>) -> Result<(), ValidationError> {
    if let Some(lat) = lat {
        rules::latitude("location_lat", lat)?;
    }
    if let Some(lng) = lng {
        rules::longitude("location_lng", lng)?;
    }
    if let Some(address) = address {
        rules::max_length("location_address", address, ADDRESS_MAX)?;
    }
    rules::paired("location_lat", lat, "location_lng", lng)
}

fn check_capacity(applicants: Option<i64>, assignees: Option<i64>) -> Result<(), ValidationError> {
    if let Some(applicants) = applicants {
        rules::int_range("max_applicants", applicants, 1, MAX_PEOPLE)?;
    }
    if let Some(assignees) = assignees {
        rules::int_range("max_assignees", assignees, 1, MAX_PEOPLE)?;
    }
    rules::at_most("max_assignees", assignees, "max_applicants", applicants)
}

fn check_category_ids(ids: &[Id]) -> Result<(), ValidationError> {
    ids.iter().try_for_each(|id| rules::uuid("category_ids", id))
}

fn check_publishable(status: Option<PapsStatus>, start: Option<&Timestamp>) -> Result<(), ValidationError> {
    if status == Some(PapsStatus::Published) && start.is_none() {
        return Err(ValidationError::cross_field(
            "start_datetime",
            "start_datetime is required when status is published",
        ));
    }
    Ok(())
}

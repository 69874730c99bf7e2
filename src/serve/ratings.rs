//! Ratings exchanged on a completed assignment
//!
//! There is no standalone rating resource: a rating is posted through
//! `asap.rate` and read back per user.

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::request::{Request, check};
use super::rules;

/// Lowest score
pub const SCORE_MIN: i64 = 1;

/// Highest score
pub const SCORE_MAX: i64 = 5;

/// Rating read operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("ratings.forUser", "/users/{user_id}/ratings").validated(check::<ListRatingsQuery>),
    Endpoint::get("ratings.average", "/users/{user_id}/rating"),
];

/// A rating as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Assignment the rating belongs to
    pub asap_id: Id,
    /// Who gave the rating
    pub rater_id: Id,
    /// Who received it
    pub rated_id: Id,
    /// 1 to 5
    pub score: u8,
    /// Optional remark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When it was given
    pub created_at: Timestamp,
}

/// Aggregate returned by `ratings.average`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean score, absent when the user has no rating yet
    #[serde(default)]
    pub average: Option<f64>,
    /// Number of ratings received
    pub count: u32,
}

/// Body of `asap.rate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Integer from 1 to 5
    pub score: i64,
    /// Optional remark, up to 1000 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Request for RateRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            score: fields.required_integer("score")?,
            comment: fields.string("comment")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::int_range("score", self.score, SCORE_MIN, SCORE_MAX)?;
        if let Some(comment) = &self.comment {
            rules::max_length("comment", comment, 1000)?;
        }
        Ok(())
    }
}

/// Query of `ratings.forUser`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRatingsQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl Request for ListRatingsQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
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

//! User profiles

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::media::FILE_FIELD;
use super::request::{Request, check};
use super::rules;

/// Profile operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("profile.get", "/profile"),
    Endpoint::patch("profile.update", "/profile").validated(check::<UpdateProfileRequest>),
    Endpoint::post("profile.uploadAvatar", "/profile/avatar").upload(FILE_FIELD, false),
    Endpoint::get("profile.user", "/users/{user_id}"),
];

/// A public profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owner of the profile
    pub user_id: Id,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Name shown to other users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Home latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Home longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Mean rating received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_average: Option<f64>,
    /// Number of ratings received
    #[serde(default)]
    pub rating_count: u32,
}

/// Body of `profile.update`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// 1 to 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 1 to 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// 1 to 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Up to 2000 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// E.164 phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Latitude, paired with `location_lng`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    /// Longitude, paired with `location_lat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lng: Option<f64>,
    /// Must not be in the future
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Timestamp>,
}

impl Request for UpdateProfileRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: fields.string("first_name")?,
            last_name: fields.string("last_name")?,
            display_name: fields.string("display_name")?,
            bio: fields.string("bio")?,
            phone: fields.string("phone")?,
            location_lat: fields.number("location_lat")?,
            location_lng: fields.number("location_lng")?,
            date_of_birth: fields.timestamp("date_of_birth")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at(Utc::now())
    }
}

impl UpdateProfileRequest {
    /// Check every rule, treating `now` as the current instant
    pub fn validate_at(&self, now: Timestamp) -> Result<(), ValidationError> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("display_name", &self.display_name),
        ] {
            if let Some(value) = value {
                rules::trimmed_length(field, value, 1, 100)?;
            }
        }
        if let Some(bio) = &self.bio {
            rules::max_length("bio", bio, 2000)?;
        }
        if let Some(phone) = &self.phone {
            rules::phone("phone", phone)?;
        }
        if let Some(lat) = self.location_lat {
            rules::latitude("location_lat", lat)?;
        }
        if let Some(lng) = self.location_lng {
            rules::longitude("location_lng", lng)?;
        }
        if self.date_of_birth.is_some_and(|born| born > now) {
            return Err(ValidationError::range("date_of_birth", "must not be in the future"));
        }
        rules::paired("location_lat", self.location_lat, "location_lng", self.location_lng)
    }
}

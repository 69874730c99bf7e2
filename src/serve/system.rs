//! System probes and admin operations

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::request::{Request, check};
use super::rules;

/// System and admin operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("system.uptime", "/uptime").public(),
    Endpoint::get("system.categories", "/categories").public(),
    Endpoint::post("admin.createCategory", "/categories").validated(check::<CreateCategoryRequest>),
    Endpoint::patch("admin.updateCategory", "/categories/{category_id}")
        .validated(check::<UpdateCategoryRequest>),
    Endpoint::delete("admin.deleteCategory", "/categories/{category_id}"),
    Endpoint::get("admin.users", "/admin/users").validated(check::<ListUsersQuery>),
];

/// Response to `system.uptime`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uptime {
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Server start time
    pub started_at: Timestamp,
}

/// A posting category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// URL-safe name
    pub slug: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent category for nested trees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

/// Body of `admin.createCategory`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// 2 to 100 characters
    pub name: String,
    /// Lower-case dashed slug, up to 100 characters
    pub slug: String,
    /// Up to 500 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

impl Request for CreateCategoryRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required_string("name")?,
            slug: fields.required_string("slug")?,
            description: fields.string("description")?,
            parent_id: fields.string("parent_id")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::trimmed_length("name", &self.name, 2, 100)?;
        rules::max_length("slug", &self.slug, 100)?;
        rules::slug("slug", &self.slug)?;
        if let Some(description) = &self.description {
            rules::max_length("description", description, 500)?;
        }
        if let Some(parent) = &self.parent_id {
            rules::uuid("parent_id", parent)?;
        }
        Ok(())
    }
}

/// Body of `admin.updateCategory`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    /// 2 to 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lower-case dashed slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Up to 500 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
}

impl Request for UpdateCategoryRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.string("name")?,
            slug: fields.string("slug")?,
            description: fields.string("description")?,
            parent_id: fields.string("parent_id")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            rules::trimmed_length("name", name, 2, 100)?;
        }
        if let Some(slug) = &self.slug {
            rules::max_length("slug", slug, 100)?;
            rules::slug("slug", slug)?;
        }
        if let Some(description) = &self.description {
            rules::max_length("description", description, 500)?;
        }
        if let Some(parent) = &self.parent_id {
            rules::uuid("parent_id", parent)?;
        }
        Ok(())
    }
}

/// Query of `admin.users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Match on username or email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Request for ListUsersQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            search: fields.string("search")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(limit) = self.limit {
            rules::int_range("limit", limit, 1, 100)?;
        }
        if let Some(offset) = self.offset {
            rules::at_least("offset", offset, 0)?;
        }
        if let Some(search) = &self.search {
            rules::max_length("search", search, 200)?;
        }
        Ok(())
    }
}

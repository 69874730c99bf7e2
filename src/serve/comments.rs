//! Threaded comments on postings

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::request::{Request, check};
use super::rules;

/// Longest comment, in characters
pub const COMMENT_MAX: usize = 2000;

/// Comment operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("comments.list", "/paps/{paps_id}/comments").validated(check::<ListCommentsQuery>),
    Endpoint::post("comments.create", "/paps/{paps_id}/comments")
        .validated(check::<CreateCommentRequest>),
    Endpoint::get("comments.get", "/comments/{comment_id}"),
    Endpoint::get("comments.replies", "/comments/{comment_id}/replies")
        .validated(check::<ListCommentsQuery>),
    Endpoint::post("comments.reply", "/comments/{comment_id}/replies")
        .validated(check::<CreateCommentRequest>),
    Endpoint::put("comments.update", "/comments/{comment_id}").validated(check::<UpdateCommentRequest>),
    Endpoint::delete("comments.delete", "/comments/{comment_id}"),
];

/// A comment as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: Id,
    /// Posting commented on
    pub paps_id: Id,
    /// Author
    pub author_id: Id,
    /// Comment replied to; `None` for top-level comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    /// Text content
    pub content: String,
    /// Number of direct replies
    #[serde(default)]
    pub reply_count: u32,
    /// Soft-deleted comments keep their place in the thread
    #[serde(default)]
    pub is_deleted: bool,
    /// Creation time
    pub created_at: Timestamp,
    /// Edit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Comment {
    /// Whether this comment answers another one
    #[must_use]
    pub const fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

fn check_content(content: &str) -> Result<(), ValidationError> {
    rules::trimmed_length("content", content, 1, COMMENT_MAX)
}

/// Body of `comments.create` and `comments.reply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    /// 1 to 2000 characters, not blank
    pub content: String,
}

impl Request for CreateCommentRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            content: fields.required_string("content")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_content(&self.content)
    }
}

/// Body of `comments.update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    /// 1 to 2000 characters, not blank
    pub content: String,
}

impl Request for UpdateCommentRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            content: fields.required_string("content")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_content(&self.content)
    }
}

/// Query of `comments.list` and `comments.replies`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl Request for ListCommentsQuery {
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

//! Chat threads and messages
//!
//! A thread is opened alongside an application and moves to the assignment
//! when the application is accepted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};
use super::endpoint::Endpoint;
use super::error::ValidationError;
use super::fields::Fields;
use super::request::{Request, check};
use super::rules;

/// Longest message, in characters
pub const MESSAGE_MAX: usize = 5000;

/// Chat operations
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("chat.threads", "/chat").validated(check::<ListThreadsQuery>),
    Endpoint::get("chat.unread", "/chat/unread"),
    Endpoint::get("chat.thread", "/chat/{thread_id}"),
    Endpoint::get("chat.messages", "/chat/{thread_id}/messages").validated(check::<ListMessagesQuery>),
    Endpoint::post("chat.send", "/chat/{thread_id}/messages").validated(check::<SendMessageRequest>),
    Endpoint::put("chat.markRead", "/chat/{thread_id}/read").validated(check::<MarkReadRequest>),
    Endpoint::get("chat.forSpap", "/spap/{spap_id}/chat"),
    Endpoint::get("chat.forAsap", "/asap/{asap_id}/chat"),
];

/// A conversation between the parties of a posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatThread {
    /// Thread identifier
    pub id: Id,
    /// Posting context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paps_id: Option<Id>,
    /// Application context (before acceptance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spap_id: Option<Id>,
    /// Assignment context (after acceptance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asap_id: Option<Id>,
    /// User identifiers taking part
    pub participants: Vec<Id>,
    /// Messages the caller has not read
    #[serde(default)]
    pub unread_count: u32,
    /// Creation time
    pub created_at: Timestamp,
    /// Last activity
    pub updated_at: Timestamp,
}

/// One message in a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message identifier
    pub id: Id,
    /// Thread it belongs to
    pub thread_id: Id,
    /// Author
    pub sender_id: Id,
    /// Text content
    pub content: String,
    /// Users who have read the message
    #[serde(default)]
    pub read_by: BTreeSet<Id>,
    /// Send time
    pub created_at: Timestamp,
    /// Edit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<Timestamp>,
}

impl ChatMessage {
    /// Whether `user_id` has read this message (authors always have)
    #[must_use]
    pub fn is_read_by(&self, user_id: &str) -> bool {
        self.sender_id == user_id || self.read_by.contains(user_id)
    }
}

/// Body of `chat.send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// 1 to 5000 characters, not blank
    pub content: String,
}

impl Request for SendMessageRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            content: fields.required_string("content")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        rules::trimmed_length("content", &self.content, 1, MESSAGE_MAX)
    }
}

/// Query of `chat.messages`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMessagesQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Only messages sent before this instant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Timestamp>,
}

impl Request for ListMessagesQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            before: fields.timestamp("before")?,
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

/// Query of `chat.threads`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListThreadsQuery {
    /// Page size, 1 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page offset, 0 or more
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Only threads with unread messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

impl Request for ListThreadsQuery {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: fields.integer("limit")?,
            offset: fields.integer("offset")?,
            unread_only: fields.bool("unread_only")?,
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

/// Body of `chat.markRead`; without ids every message is marked read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReadRequest {
    /// Messages to mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_ids: Option<Vec<Id>>,
}

impl Request for MarkReadRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            message_ids: fields.strings("message_ids")?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.message_ids
            .iter()
            .flatten()
            .try_for_each(|id| rules::uuid("message_ids", id))
    }
}

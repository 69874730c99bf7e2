//! Media attached to postings, applications and assignments
//!
//! Uploads are multipart requests declared with [`Endpoint::upload`]; only
//! the response shapes live here.
//!
//! [`Endpoint::upload`]: super::endpoint::Endpoint::upload

use serde::{Deserialize, Serialize};

use super::common::{Id, Timestamp};

/// Multipart field used by posting/application/assignment uploads
pub const MEDIA_FIELD: &str = "media";

/// Multipart field used by single-file uploads (avatar)
pub const FILE_FIELD: &str = "file";

/// A stored media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Media identifier
    pub media_id: Id,
    /// Public URL of the file
    pub media_url: String,
    /// MIME type reported by the server
    pub content_type: String,
    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Position in the owner's gallery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
    /// Upload time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<Timestamp>,
}

/// Response to a media upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Files created by this upload
    pub uploaded_media: Vec<Media>,
    /// Total media count of the owner after the upload
    pub media_count: u32,
}

/// Response to a media listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaList {
    /// Owner (posting, application or assignment) identifier
    pub owner_id: Id,
    /// Files in display order
    pub media: Vec<Media>,
}

//! Shared primitives used by every resource module
//!
//! - [`Timestamp`] - ISO 8601 / RFC 3339 instant
//! - Closed status sets for postings, applications and assignments
//! - [`PaymentType`] and the format patterns (UUID, email, phone, ...)

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// An instant on the wire, serialized as RFC 3339
pub type Timestamp = DateTime<Utc>;

/// Entity identifiers travel as UUID-shaped strings
pub type Id = String;

/// Parse an RFC 3339 timestamp into UTC
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

// =============================================================================
// CLOSED ENUMS
// =============================================================================

/// A closed set of wire values
///
/// Membership is exact: `"Draft"` or `"DRAFT"` are not members of
/// [`PapsStatus`].
pub trait WireEnum: Copy + Sized + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// The wire form of this member
    fn as_str(self) -> &'static str;

    /// Look up a member by its exact wire form
    #[must_use]
    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == raw)
    }

    /// Comma-separated list of the allowed wire values
    #[must_use]
    fn allowed() -> String {
        Self::ALL.iter().map(|member| member.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// Job posting status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PapsStatus {
    /// Visible only to the owner
    #[default]
    Draft,
    /// Open for applications
    Published,
    /// No longer accepting applications
    Closed,
    /// Withdrawn by the owner
    Cancelled,
}

impl WireEnum for PapsStatus {
    const ALL: &'static [Self] = &[Self::Draft, Self::Published, Self::Closed, Self::Cancelled];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl PapsStatus {
    /// Whether the posting may move from `self` to `next`
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Published) | (Self::Published, Self::Closed | Self::Cancelled)
        )
    }
}

/// Job application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpapStatus {
    /// Awaiting the owner's decision
    #[default]
    Pending,
    /// Accepted; an assignment was created
    Accepted,
    /// Declined by the owner
    Rejected,
    /// Pulled back by the applicant
    Withdrawn,
}

impl WireEnum for SpapStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Accepted, Self::Rejected, Self::Withdrawn];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }
}

impl SpapStatus {
    /// Whether the application may move from `self` to `next`
    ///
    /// Only pending applications move; every other state is terminal.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted | Self::Rejected | Self::Withdrawn)
        )
    }

    /// Whether no further transition is possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Job assignment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsapStatus {
    /// Created from an accepted application
    #[default]
    Active,
    /// Work has started
    InProgress,
    /// Work is done
    Completed,
    /// Called off
    Cancelled,
    /// Under dispute
    Disputed,
}

impl WireEnum for AsapStatus {
    const ALL: &'static [Self] = &[
        Self::Active,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::Disputed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
        }
    }
}

impl AsapStatus {
    /// Whether the assignment may move from `self` to `next`
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Active, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Active | Self::InProgress, Self::Cancelled | Self::Disputed)
        )
    }
}

/// How a posting pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// One amount for the whole job
    #[default]
    Fixed,
    /// Amount per hour
    Hourly,
    /// Amount settled with the applicant
    Negotiable,
}

impl WireEnum for PaymentType {
    const ALL: &'static [Self] = &[Self::Fixed, Self::Hourly, Self::Negotiable];

    fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Hourly => "hourly",
            Self::Negotiable => "negotiable",
        }
    }
}

macro_rules! wire_display {
    ($($ty:ty),+) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_wire(s).ok_or_else(|| {
                        format!("Invalid value: {s}. Use: {}", Self::allowed())
                    })
                }
            }
        )+
    };
}

wire_display!(PapsStatus, SpapStatus, AsapStatus, PaymentType);

// =============================================================================
// FORMAT PATTERNS
// =============================================================================

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern is valid"));

static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_.-]*$").expect("username pattern is valid")
});

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency pattern is valid"));

/// 8-4-4-4-12 hexadecimal
#[must_use]
pub fn is_uuid(raw: &str) -> bool {
    UUID.is_match(raw)
}

/// `local@domain.tld`, no whitespace
#[must_use]
pub fn is_email(raw: &str) -> bool {
    EMAIL.is_match(raw)
}

/// E.164-like: optional `+`, no leading zero, 2 to 15 digits
#[must_use]
pub fn is_phone(raw: &str) -> bool {
    PHONE.is_match(raw)
}

/// Starts with a letter, then letters, digits, `-`, `_` or `.`
#[must_use]
pub fn is_username(raw: &str) -> bool {
    USERNAME.is_match(raw)
}

/// Lower-case words joined by single dashes
#[must_use]
pub fn is_slug(raw: &str) -> bool {
    SLUG.is_match(raw)
}

/// Three upper-case letters (ISO 4217 shape)
#[must_use]
pub fn is_currency(raw: &str) -> bool {
    CURRENCY.is_match(raw)
}

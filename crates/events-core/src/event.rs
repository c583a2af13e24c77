//! The event record and its classifying enums.

use crate::payload::EventPayload;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Kind of activity an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Commit,
    PullRequest,
    Deploy,
}

impl EventKind {
    /// All kinds, in sampling order.
    pub const ALL: [EventKind; 3] = [
        EventKind::Commit,
        EventKind::PullRequest,
        EventKind::Deploy,
    ];

    /// Wire name used in the `type` CSV column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Commit => "commit",
            EventKind::PullRequest => "pull_request",
            EventKind::Deploy => "deploy",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown event kind wire name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown event kind: '{0}'")]
pub struct ParseEventKindError(pub String);

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit" => Ok(EventKind::Commit),
            "pull_request" => Ok(EventKind::PullRequest),
            "deploy" => Ok(EventKind::Deploy),
            other => Err(ParseEventKindError(other.to_string())),
        }
    }
}

/// Whether the owning account is an organization or an individual user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    Organization,
    User,
}

impl OwnerKind {
    /// Both kinds, in sampling order.
    pub const ALL: [OwnerKind; 2] = [OwnerKind::Organization, OwnerKind::User];

    /// Wire name used in the `owner_type` CSV column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Organization => "organization",
            OwnerKind::User => "user",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown owner kind wire name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown owner kind: '{0}'")]
pub struct ParseOwnerKindError(pub String);

impl FromStr for OwnerKind {
    type Err = ParseOwnerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organization" => Ok(OwnerKind::Organization),
            "user" => Ok(OwnerKind::User),
            other => Err(ParseOwnerKindError(other.to_string())),
        }
    }
}

/// A single synthetic activity event.
///
/// Events are immutable once generated; the generator guarantees `id` is
/// unique within a run and `created_at >= timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub owner: String,
    pub owner_kind: OwnerKind,
    pub repo: String,
    pub member: String,
    pub timestamp: DateTime<Utc>,
    pub payload: EventPayload,
    pub created_at: DateTime<Utc>,
}

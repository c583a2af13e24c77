//! Type-specific event payloads.

use crate::event::EventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload stored in the `data` CSV column, one variant per event kind.
///
/// Serialized as a flat JSON object with no tag, matching the layout the
/// downstream events table stores. When decoding, variants are distinguished
/// by their field sets: commits carry `message`, pull requests `title`,
/// deploys `environment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Commit {
        sha: String,
        message: String,
        additions: u32,
        deletions: u32,
        files_changed: u32,
    },
    PullRequest {
        number: u32,
        title: String,
        state: PullRequestState,
        additions: u32,
        deletions: u32,
        files_changed: u32,
    },
    Deploy {
        id: String,
        environment: DeployEnvironment,
        status: DeployStatus,
        #[serde(rename = "ref")]
        git_ref: String,
        sha: String,
    },
}

impl EventPayload {
    /// The event kind this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::Commit { .. } => EventKind::Commit,
            EventPayload::PullRequest { .. } => EventKind::PullRequest,
            EventPayload::Deploy { .. } => EventKind::Deploy,
        }
    }
}

/// Review state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
}

impl PullRequestState {
    /// All states, in sampling order.
    pub const ALL: [PullRequestState; 3] = [
        PullRequestState::Open,
        PullRequestState::Closed,
        PullRequestState::Merged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PullRequestState::Open => "open",
            PullRequestState::Closed => "closed",
            PullRequestState::Merged => "merged",
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target environment of a deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployEnvironment {
    Production,
    Staging,
    Development,
}

impl DeployEnvironment {
    /// All environments, in sampling order.
    pub const ALL: [DeployEnvironment; 3] = [
        DeployEnvironment::Production,
        DeployEnvironment::Staging,
        DeployEnvironment::Development,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployEnvironment::Production => "production",
            DeployEnvironment::Staging => "staging",
            DeployEnvironment::Development => "development",
        }
    }
}

impl fmt::Display for DeployEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployStatus {
    Success,
    Failure,
    Pending,
}

impl DeployStatus {
    /// All statuses, in sampling order.
    pub const ALL: [DeployStatus; 3] = [
        DeployStatus::Success,
        DeployStatus::Failure,
        DeployStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStatus::Success => "success",
            DeployStatus::Failure => "failure",
            DeployStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for DeployStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_payload() -> EventPayload {
        EventPayload::Commit {
            sha: "ab12cd3".to_string(),
            message: "Fix bug in authentication".to_string(),
            additions: 42,
            deletions: 7,
            files_changed: 3,
        }
    }

    #[test]
    fn test_commit_serializes_flat() {
        let json = serde_json::to_value(commit_payload()).unwrap();
        assert_eq!(json["sha"], "ab12cd3");
        assert_eq!(json["message"], "Fix bug in authentication");
        assert_eq!(json["additions"], 42);
        // No tag key anywhere in the object
        assert!(json.get("type").is_none());
        assert!(json.get("Commit").is_none());
    }

    #[test]
    fn test_pull_request_state_serializes_lowercase() {
        let payload = EventPayload::PullRequest {
            number: 17,
            title: "Add new feature".to_string(),
            state: PullRequestState::Merged,
            additions: 100,
            deletions: 30,
            files_changed: 5,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["state"], "merged");
        assert_eq!(json["number"], 17);
    }

    #[test]
    fn test_deploy_ref_key_name() {
        let payload = EventPayload::Deploy {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            environment: DeployEnvironment::Production,
            status: DeployStatus::Success,
            git_ref: "release/v1.0".to_string(),
            sha: "0011223".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        // The JSON key is `ref`, not the Rust field name
        assert_eq!(json["ref"], "release/v1.0");
        assert!(json.get("git_ref").is_none());
    }

    #[test]
    fn test_untagged_roundtrip_resolves_variants() {
        let payloads = [
            commit_payload(),
            EventPayload::PullRequest {
                number: 3,
                title: "Fix critical bug".to_string(),
                state: PullRequestState::Open,
                additions: 51,
                deletions: 20,
                files_changed: 2,
            },
            EventPayload::Deploy {
                id: "token".to_string(),
                environment: DeployEnvironment::Staging,
                status: DeployStatus::Pending,
                git_ref: "main".to_string(),
                sha: "abcdef0".to_string(),
            },
        ];
        for payload in payloads {
            let json = serde_json::to_string(&payload).unwrap();
            let decoded: EventPayload = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, payload);
            assert_eq!(decoded.kind(), payload.kind());
        }
    }
}

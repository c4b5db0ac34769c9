// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint data model: the human-in-the-loop decision points persisted
//! in `.hitl_checkpoint_log.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The literal scope key used for checkpoints that are not tied to a single
/// issue/unit of work.
pub const GLOBAL_SCOPE: &str = "global";

/// Closed set of checkpoint kinds. New kinds are added here; existing
/// dispatch handlers never need to change (see `oj_engine::checkpoint`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckpointType {
    IssueEnrichment,
    RegressionApproval,
    IssueSelection,
    MrPhaseTransition,
    /// Catch-all for kinds not otherwise enumerated; preserves the original
    /// string so round-tripping through JSON never loses information.
    Other(String),
}

impl std::fmt::Display for CheckpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IssueEnrichment => write!(f, "ISSUE_ENRICHMENT"),
            Self::RegressionApproval => write!(f, "REGRESSION_APPROVAL"),
            Self::IssueSelection => write!(f, "ISSUE_SELECTION"),
            Self::MrPhaseTransition => write!(f, "MR_PHASE_TRANSITION"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CheckpointType {
    fn from(s: &str) -> Self {
        match s {
            "ISSUE_ENRICHMENT" => Self::IssueEnrichment,
            "REGRESSION_APPROVAL" => Self::RegressionApproval,
            "ISSUE_SELECTION" => Self::IssueSelection,
            "MR_PHASE_TRANSITION" => Self::MrPhaseTransition,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for CheckpointType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CheckpointType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CheckpointType::from(s.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointStatus {
    Pending,
    Approved,
    Rejected,
    Modified,
    Skipped,
}

impl CheckpointStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One persisted decision point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointRecord {
    pub checkpoint_id: String,
    pub checkpoint_type: CheckpointType,
    pub status: CheckpointStatus,
    pub created_at: u64,
    pub completed: bool,
    #[serde(default)]
    pub context: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<serde_json::Value>,
}

impl CheckpointRecord {
    pub fn new_pending(checkpoint_type: CheckpointType, created_at: u64, context: serde_json::Value) -> Self {
        Self {
            checkpoint_id: format!("cp-{}", nanoid::nanoid!(12)),
            checkpoint_type,
            status: CheckpointStatus::Pending,
            created_at,
            completed: false,
            context,
            decision: None,
            notes: None,
            modifications: None,
        }
    }
}

/// The resolution a handler (or a human) applies to a pending checkpoint.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub status: Option<CheckpointStatus>,
    pub decision: Option<String>,
    pub notes: Option<String>,
    pub modifications: Option<serde_json::Value>,
}

impl Resolution {
    pub fn approve() -> Self {
        Self {
            status: Some(CheckpointStatus::Approved),
            ..Default::default()
        }
    }

    pub fn approve_with_modifications(modifications: serde_json::Value) -> Self {
        Self {
            status: Some(CheckpointStatus::Approved),
            modifications: Some(modifications),
            ..Default::default()
        }
    }

    pub fn approve_with_decision(decision: impl Into<String>) -> Self {
        Self {
            status: Some(CheckpointStatus::Approved),
            decision: Some(decision.into()),
            ..Default::default()
        }
    }
}

/// A mapping from scope key (`"global"` or an issue identifier) to its
/// ordered, append-only list of checkpoint records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckpointLog {
    #[serde(flatten)]
    pub scopes: BTreeMap<String, Vec<CheckpointRecord>>,
}

impl CheckpointLog {
    pub fn empty() -> Self {
        let mut scopes = BTreeMap::new();
        scopes.insert(GLOBAL_SCOPE.to_string(), Vec::new());
        Self { scopes }
    }

    pub fn append(&mut self, scope: &str, record: CheckpointRecord) {
        self.scopes.entry(scope.to_string()).or_default().push(record);
    }

    /// All `(scope, index)` pairs across every scope, in scope-iteration
    /// then insertion order. Used to implement the "latest by `created_at`,
    /// ties broken by insertion order" rule (§9 Open Question ii).
    pub fn pending_records(&self) -> impl Iterator<Item = (&str, &CheckpointRecord)> {
        self.scopes.iter().flat_map(|(scope, records)| {
            records
                .iter()
                .filter(|r| !r.completed)
                .map(move |r| (scope.as_str(), r))
        })
    }

    /// The pending record with the maximum `created_at`; ties are broken by
    /// preferring the record encountered later during the scan, which for a
    /// single scope's append-only vector is equivalent to "latest insertion".
    pub fn latest_pending(&self) -> Option<(&str, &CheckpointRecord)> {
        self.pending_records()
            .fold(None, |best, candidate| match best {
                None => Some(candidate),
                Some(b) if candidate.1.created_at >= b.1.created_at => Some(candidate),
                Some(b) => Some(b),
            })
    }

    /// The latest (by `created_at`) record of the given type across all
    /// scopes, regardless of completion state.
    pub fn latest_of_type(&self, checkpoint_type: &CheckpointType) -> Option<&CheckpointRecord> {
        self.scopes
            .values()
            .flatten()
            .filter(|r| &r.checkpoint_type == checkpoint_type)
            .fold(None, |best: Option<&CheckpointRecord>, candidate| match best {
                None => Some(candidate),
                Some(b) if candidate.created_at >= b.created_at => Some(candidate),
                Some(_) => best,
            })
    }

    pub fn is_type_approved(&self, checkpoint_type: &CheckpointType) -> bool {
        matches!(
            self.latest_of_type(checkpoint_type).map(|r| r.status),
            Some(CheckpointStatus::Approved)
        )
    }

    pub fn find_mut(&mut self, checkpoint_id: &str) -> Option<&mut CheckpointRecord> {
        self.scopes
            .values_mut()
            .flatten()
            .find(|r| r.checkpoint_id == checkpoint_id)
    }

    /// Invariant check (§8 invariant 8): no duplicate `checkpoint_id`
    /// within any single scope.
    pub fn has_duplicate_ids_within_scope(&self) -> bool {
        self.scopes.values().any(|records| {
            let mut seen = std::collections::HashSet::new();
            !records.iter().all(|r| seen.insert(r.checkpoint_id.as_str()))
        })
    }
}

#[cfg(test)]
#[path = "checkpoint_tests.rs"]
mod tests;

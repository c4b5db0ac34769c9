// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! MilestoneState: workflow-progress tracking, written to
//! `.gitlab_milestone.json` or `.file_milestone.json` depending on
//! `file_only_mode`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestoneState {
    #[serde(default)]
    pub initialized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_branch: Option<String>,
    #[serde(default)]
    pub total_issues: u32,
    #[serde(default)]
    pub all_issues_closed: bool,
    #[serde(default)]
    pub milestone_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_request_url: Option<String>,
    #[serde(default)]
    pub enrichments: serde_json::Value,
    #[serde(default)]
    pub progress_comments: Vec<String>,
}

impl MilestoneState {
    /// The empty document the Workspace Initializer writes on first run.
    pub fn empty() -> Self {
        Self {
            enrichments: serde_json::json!({}),
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;

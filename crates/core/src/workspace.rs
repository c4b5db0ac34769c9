// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WorkspaceInfo: the immutable-after-creation per-run record written to
//! `.workspace_info.json`.

use serde::{Deserialize, Serialize};

/// Immutable per-run metadata, except for the `auto_accept` flag which the
/// observer TUI toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub spec_slug: String,
    pub spec_hash: String,
    pub spec_file: String,
    pub target_branch: String,
    pub feature_branch: String,
    #[serde(default)]
    pub file_only_mode: bool,
    #[serde(default)]
    pub skip_mr_creation: bool,
    #[serde(default)]
    pub skip_puppeteer: bool,
    #[serde(default)]
    pub skip_test_suite: bool,
    #[serde(default)]
    pub skip_regression: bool,
    #[serde(default)]
    pub auto_accept: bool,
}

impl WorkspaceInfo {
    pub fn new(
        spec_slug: impl Into<String>,
        spec_hash: impl Into<String>,
        spec_file: impl Into<String>,
        target_branch: impl Into<String>,
    ) -> Self {
        let spec_slug = spec_slug.into();
        let spec_hash = spec_hash.into();
        let feature_branch = format!("feature/{spec_slug}-{spec_hash}");
        Self {
            spec_slug,
            spec_hash,
            spec_file: spec_file.into(),
            target_branch: target_branch.into(),
            feature_branch,
            file_only_mode: false,
            skip_mr_creation: false,
            skip_puppeteer: false,
            skip_test_suite: false,
            skip_regression: false,
            auto_accept: false,
        }
    }

    pub fn milestone_filename(&self) -> &'static str {
        if self.file_only_mode {
            ".file_milestone.json"
        } else {
            ".gitlab_milestone.json"
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_derives_feature_branch_from_slug_and_hash() {
    let info = WorkspaceInfo::new("my-spec", "ab12cd34", "spec.txt", "main");
    assert_eq!(info.feature_branch, "feature/my-spec-ab12cd34");
}

#[test]
fn defaults_are_all_false() {
    let info = WorkspaceInfo::new("s", "h", "spec.txt", "main");
    assert!(!info.file_only_mode);
    assert!(!info.skip_mr_creation);
    assert!(!info.auto_accept);
}

#[test]
fn milestone_filename_depends_on_file_only_mode() {
    let mut info = WorkspaceInfo::new("s", "h", "spec.txt", "main");
    assert_eq!(info.milestone_filename(), ".gitlab_milestone.json");
    info.file_only_mode = true;
    assert_eq!(info.milestone_filename(), ".file_milestone.json");
}

#[test]
fn round_trips_through_json() {
    let mut info = WorkspaceInfo::new("s", "h", "spec.txt", "main");
    info.auto_accept = true;
    let json = serde_json::to_string(&info).unwrap();
    let back: WorkspaceInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(info, back);
}

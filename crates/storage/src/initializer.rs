// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace Initializer: one entry point that stands up a fresh (or
//! re-enters an existing) run directory.

use std::fs;
use std::path::{Path, PathBuf};

use oj_core::{hash, slug, CheckpointLog, MilestoneState, StateError, WorkspaceInfo};

use crate::atomic::{read_json, write_json};
use crate::repository::run_dir;

/// The mutable flags a run can be created with; all default to `false`.
#[derive(Debug, Clone, Default)]
pub struct InitializerFlags {
    pub file_only_mode: bool,
    pub skip_mr_creation: bool,
    pub skip_puppeteer: bool,
    pub skip_test_suite: bool,
    pub skip_regression: bool,
    /// Reuse this slug instead of deriving one from `spec_source`'s name.
    pub spec_slug: Option<String>,
    /// Reuse this hash instead of hashing `spec_source`'s contents.
    pub spec_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InitializedRun {
    pub dir: PathBuf,
    pub slug: String,
    pub hash: String,
}

/// Creates `<project>/.claude-agent/<slug>-<hash>/` and `logs/` beneath
/// it, copies `spec_source` in as `app_spec.txt`, writes `WorkspaceInfo`,
/// and ensures an empty `CheckpointLog`/`MilestoneState` exist. Safe to
/// call again with identical arguments: the workspace info is
/// recomputed (and so is unchanged), and the checkpoint log / milestone
/// documents are left untouched if already present rather than reset.
pub fn initialize(
    project_dir: &Path,
    spec_source: &Path,
    target_branch: &str,
    flags: InitializerFlags,
) -> Result<InitializedRun, StateError> {
    let spec_slug = flags.spec_slug.clone().unwrap_or_else(|| slug(&spec_source.to_string_lossy()));
    let spec_hash = match flags.spec_hash.clone() {
        Some(spec_hash) => spec_hash,
        None => hash(spec_source)?,
    };

    let dir = run_dir(project_dir, &spec_slug, &spec_hash);
    let logs_dir = dir.join("logs");
    fs::create_dir_all(&logs_dir)
        .map_err(|source| StateError::Write { path: logs_dir.display().to_string(), source })?;

    let dest = dir.join("app_spec.txt");
    fs::copy(spec_source, &dest)
        .map_err(|source| StateError::Write { path: dest.display().to_string(), source })?;

    let mut info = WorkspaceInfo::new(&spec_slug, &spec_hash, "app_spec.txt", target_branch);
    info.file_only_mode = flags.file_only_mode;
    info.skip_mr_creation = flags.skip_mr_creation;
    info.skip_puppeteer = flags.skip_puppeteer;
    info.skip_test_suite = flags.skip_test_suite;
    info.skip_regression = flags.skip_regression;
    write_json(&dir.join(".workspace_info.json"), &info)?;

    let checkpoint_path = dir.join(".hitl_checkpoint_log.json");
    if read_json::<CheckpointLog>(&checkpoint_path)?.is_none() {
        write_json(&checkpoint_path, &CheckpointLog::empty())?;
    }

    let milestone_path = dir.join(info.milestone_filename());
    if read_json::<MilestoneState>(&milestone_path)?.is_none() {
        write_json(&milestone_path, &MilestoneState::empty())?;
    }

    Ok(InitializedRun { dir, slug: spec_slug, hash: spec_hash })
}

#[cfg(test)]
#[path = "initializer_tests.rs"]
mod tests;

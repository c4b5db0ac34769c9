// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The State Repository: four pure file-I/O operations over the three
//! on-disk documents for one `(spec_slug, spec_hash)` run. Loading never
//! fails outright — a fresh or half-written run directory still yields a
//! usable (partially populated) [`AgentState`].

use std::path::{Path, PathBuf};

use oj_core::{
    AgentState, CheckpointLog, CheckpointRecord, CheckpointType, HarnessError, HarnessResult,
    MilestoneState, Resolution, StateError, WorkspaceInfo,
};

use crate::atomic::{read_json, write_json};

/// The per-run directory: `<project>/.claude-agent/<slug>-<hash>/`.
pub fn run_dir(project: &Path, slug: &str, hash: &str) -> PathBuf {
    project.join(".claude-agent").join(format!("{slug}-{hash}"))
}

fn workspace_info_path(dir: &Path) -> PathBuf {
    dir.join(".workspace_info.json")
}

fn checkpoint_log_path(dir: &Path) -> PathBuf {
    dir.join(".hitl_checkpoint_log.json")
}

/// Reads a document, logging and falling back to `None` on malformed JSON
/// (§9 Open Question iii) instead of propagating the parse error.
fn load_or_warn<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    match read_json(path) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed state file; treating scope as empty");
            None
        }
    }
}

/// Loads the three sub-records for one run. Missing or malformed files
/// each independently yield `None` for that sub-record.
pub fn load(project: &Path, slug: &str, hash: &str) -> AgentState {
    let dir = run_dir(project, slug, hash);
    let workspace: Option<WorkspaceInfo> = load_or_warn(&workspace_info_path(&dir));

    let milestone_filename =
        workspace.as_ref().map(WorkspaceInfo::milestone_filename).unwrap_or(".gitlab_milestone.json");
    let milestone: Option<MilestoneState> = load_or_warn(&dir.join(milestone_filename));

    let checkpoint_log: Option<CheckpointLog> = load_or_warn(&checkpoint_log_path(&dir));

    AgentState { workspace, milestone, checkpoint_log }
}

/// The checkpoint record with the maximum `created_at` among all
/// incomplete records across every scope, if any.
pub fn load_pending_checkpoint(project: &Path, slug: &str, hash: &str) -> Option<CheckpointRecord> {
    let dir = run_dir(project, slug, hash);
    let log: CheckpointLog = load_or_warn(&checkpoint_log_path(&dir))?;
    log.latest_pending().map(|(_, record)| record.clone())
}

/// True iff the latest (by `created_at`) record of `checkpoint_type`,
/// across all scopes, has status `approved`.
pub fn is_checkpoint_type_approved(
    project: &Path,
    slug: &str,
    hash: &str,
    checkpoint_type: &CheckpointType,
) -> bool {
    let dir = run_dir(project, slug, hash);
    let log: Option<CheckpointLog> = load_or_warn(&checkpoint_log_path(&dir));
    log.map(|log| log.is_type_approved(checkpoint_type)).unwrap_or(false)
}

/// Appends a new pending checkpoint to the named scope's log, writing the
/// whole document back atomically.
pub fn append_checkpoint(
    project: &Path,
    slug: &str,
    hash: &str,
    scope: &str,
    record: CheckpointRecord,
) -> Result<(), StateError> {
    let dir = run_dir(project, slug, hash);
    let path = checkpoint_log_path(&dir);
    let mut log: CheckpointLog = load_or_warn(&path).unwrap_or_default();
    log.append(scope, record);
    write_json(&path, &log)
}

/// Finds the pending record matching `checkpoint_id` and applies
/// `resolution` to it, setting `completed = true`, then writes the whole
/// log back atomically.
pub fn resolve_checkpoint(
    project: &Path,
    slug: &str,
    hash: &str,
    checkpoint_id: &str,
    resolution: Resolution,
) -> HarnessResult<()> {
    let dir = run_dir(project, slug, hash);
    let path = checkpoint_log_path(&dir);
    let mut log: CheckpointLog = load_or_warn(&path).unwrap_or_default();

    let record = log.find_mut(checkpoint_id).ok_or_else(|| {
        HarnessError::Checkpoint(oj_core::CheckpointError::NotFound {
            checkpoint_id: checkpoint_id.to_string(),
            scope: "*".to_string(),
        })
    })?;

    if let Some(status) = resolution.status {
        record.status = status;
    }
    record.completed = true;
    if resolution.decision.is_some() {
        record.decision = resolution.decision;
    }
    if resolution.notes.is_some() {
        record.notes = resolution.notes;
    }
    if resolution.modifications.is_some() {
        record.modifications = resolution.modifications;
    }

    write_json(&path, &log).map_err(|source| {
        HarnessError::Checkpoint(oj_core::CheckpointError::Persist {
            checkpoint_id: checkpoint_id.to_string(),
            source,
        })
    })
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

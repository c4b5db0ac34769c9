// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace Bootstrap: the entry point the CLI's `run` and `init`
//! subcommands share so neither re-derives the slug/hash pair on its own.

use std::path::{Path, PathBuf};

use oj_core::StateError;
use oj_storage::initializer::{initialize, InitializerFlags};

/// Prepares `<project_dir>/.claude-agent/<slug>-<hash>/` from a spec file on
/// disk and returns `(agent_dir, spec_slug, spec_hash)`. `spec_slug`/
/// `spec_hash` are reused verbatim when supplied instead of being
/// recomputed, so a resumed run lands in the same directory as before.
#[allow(clippy::too_many_arguments)]
pub fn bootstrap_workspace(
    project_dir: &Path,
    spec_source: &Path,
    target_branch: &str,
    file_only_mode: bool,
    skip_mr_creation: bool,
    spec_slug: Option<String>,
    spec_hash: Option<String>,
) -> Result<(PathBuf, String, String), StateError> {
    let flags = InitializerFlags { file_only_mode, skip_mr_creation, spec_slug, spec_hash, ..InitializerFlags::default() };
    let run = initialize(project_dir, spec_source, target_branch, flags)?;
    Ok((run.dir, run.slug, run.hash))
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;

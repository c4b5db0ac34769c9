// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fail-fast validation for `oj run`/`oj init`: environment variables and
//! project preconditions, checked before any state directory is touched
//! (§7).

use std::path::Path;

use crate::exit_error::ExitError;

const VALIDATION_FAILURE: i32 = 1;

/// At least one of these must be set for `oj run` (not `oj init`, which
/// never starts a session).
const LLM_CREDENTIAL_VARS: &[&str] = &["CLAUDE_CODE_OAUTH_TOKEN", "ANTHROPIC_API_KEY"];
const GITLAB_TOKEN_VAR: &str = "GITLAB_PERSONAL_ACCESS_TOKEN";

/// Validates the environment variables §6 requires before a session runs.
pub fn check_session_environment() -> Result<(), ExitError> {
    if !LLM_CREDENTIAL_VARS.iter().any(|var| std::env::var_os(var).is_some()) {
        return Err(ExitError::new(
            VALIDATION_FAILURE,
            format!("one of {} must be set", LLM_CREDENTIAL_VARS.join(" or ")),
        ));
    }
    if std::env::var_os(GITLAB_TOKEN_VAR).is_none() {
        return Err(ExitError::new(VALIDATION_FAILURE, format!("{GITLAB_TOKEN_VAR} must be set")));
    }
    Ok(())
}

/// Validates that `spec_file` exists and is readable, and that
/// `project_dir` is the root of a git working tree.
pub fn check_project_preconditions(spec_file: &Path, project_dir: &Path) -> Result<(), ExitError> {
    if !spec_file.is_file() {
        return Err(ExitError::new(VALIDATION_FAILURE, format!("spec file not found: {}", spec_file.display())));
    }
    std::fs::File::open(spec_file).map_err(|source| {
        ExitError::new(VALIDATION_FAILURE, format!("spec file {} is not readable: {source}", spec_file.display()))
    })?;

    if !is_git_repository(project_dir) {
        return Err(ExitError::new(
            VALIDATION_FAILURE,
            format!("{} is not a git repository", project_dir.display()),
        ));
    }
    Ok(())
}

fn is_git_repository(project_dir: &Path) -> bool {
    std::process::Command::new("git")
        .arg("rev-parse")
        .arg("--is-inside-work-tree")
        .current_dir(project_dir)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;

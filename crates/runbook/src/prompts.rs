// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public prompt-rendering entry points: load the right compiled asset for
//! the run's mode, render its placeholders and conditional blocks.

use oj_core::{HarnessError, HarnessResult};

use crate::template::{render_coding_prompt, render_initializer_prompt, render_mr_creation_prompt, TemplateFlags};
use crate::templates;

fn require_non_empty(value: &str, name: &str) -> HarnessResult<()> {
    if value.trim().is_empty() {
        return Err(HarnessError::Config(format!("{name} cannot be empty")));
    }
    Ok(())
}

fn combined_slug(spec_slug: &str, spec_hash: &str) -> String {
    format!("{spec_slug}-{spec_hash}")
}

/// Render the initializer prompt for a fresh run.
pub fn get_initializer_prompt(
    target_branch: &str,
    spec_slug: &str,
    spec_hash: &str,
    file_only_mode: bool,
    flags: TemplateFlags,
) -> HarnessResult<String> {
    require_non_empty(target_branch, "target_branch")?;
    require_non_empty(spec_slug, "spec_slug")?;
    require_non_empty(spec_hash, "spec_hash")?;

    let raw = templates::initializer_prompt(file_only_mode);
    Ok(render_initializer_prompt(raw, target_branch, &combined_slug(spec_slug, spec_hash), flags))
}

/// Render the coding-session prompt.
pub fn get_coding_prompt(
    spec_slug: &str,
    spec_hash: &str,
    file_only_mode: bool,
    flags: TemplateFlags,
) -> HarnessResult<String> {
    require_non_empty(spec_slug, "spec_slug")?;
    require_non_empty(spec_hash, "spec_hash")?;

    let raw = templates::coding_prompt(file_only_mode);
    Ok(render_coding_prompt(raw, &combined_slug(spec_slug, spec_hash), flags))
}

/// Render the merge-request-creation prompt.
pub fn get_mr_creation_prompt(
    spec_slug: &str,
    spec_hash: &str,
    target_branch: &str,
    file_only_mode: bool,
    flags: TemplateFlags,
) -> HarnessResult<String> {
    require_non_empty(spec_slug, "spec_slug")?;
    require_non_empty(spec_hash, "spec_hash")?;
    require_non_empty(target_branch, "target_branch")?;

    let raw = templates::mr_creation_prompt(file_only_mode);
    Ok(render_mr_creation_prompt(raw, &combined_slug(spec_slug, spec_hash), target_branch, flags))
}

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The six prompt template assets, compiled into the binary.
//!
//! Template files are out of scope for customization, so these are loaded
//! with `include_str!` rather than resolved from a runtime templates
//! directory.

pub(crate) const INITIALIZER_PROMPT: &str = include_str!("../templates/initializer_prompt.txt");
pub(crate) const INITIALIZER_PROMPT_FILE_ONLY: &str =
    include_str!("../templates/initializer_prompt_file_only.txt");
pub(crate) const CODING_PROMPT: &str = include_str!("../templates/coding_prompt.txt");
pub(crate) const CODING_PROMPT_FILE_ONLY: &str = include_str!("../templates/coding_prompt_file_only.txt");
pub(crate) const MR_CREATION_PROMPT: &str = include_str!("../templates/mr_creation_prompt.txt");
pub(crate) const MR_CREATION_PROMPT_FILE_ONLY: &str =
    include_str!("../templates/mr_creation_prompt_file_only.txt");

pub(crate) fn initializer_prompt(file_only_mode: bool) -> &'static str {
    if file_only_mode {
        INITIALIZER_PROMPT_FILE_ONLY
    } else {
        INITIALIZER_PROMPT
    }
}

pub(crate) fn coding_prompt(file_only_mode: bool) -> &'static str {
    if file_only_mode {
        CODING_PROMPT_FILE_ONLY
    } else {
        CODING_PROMPT
    }
}

pub(crate) fn mr_creation_prompt(file_only_mode: bool) -> &'static str {
    if file_only_mode {
        MR_CREATION_PROMPT_FILE_ONLY
    } else {
        MR_CREATION_PROMPT
    }
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;

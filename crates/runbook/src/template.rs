// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt template rendering: literal placeholder substitution plus
//! `{{#UNLESS_<FLAG>}}...{{/UNLESS_<FLAG>}}` conditional blocks.
//!
//! `regex` has no backreference support, so the conditional blocks can't be
//! matched with one generic pattern keyed on the flag name. Each known flag
//! gets its own compiled regex instead.

use regex::Regex;
use std::sync::LazyLock;

/// Feature flags a template's conditional blocks can key off of.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFlags {
    pub skip_puppeteer: bool,
    pub skip_test_suite: bool,
    pub skip_regression: bool,
}

#[allow(clippy::expect_used)]
static UNLESS_SKIP_PUPPETEER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#UNLESS_SKIP_PUPPETEER\}\}(.*?)\{\{/UNLESS_SKIP_PUPPETEER\}\}")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static UNLESS_SKIP_TEST_SUITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#UNLESS_SKIP_TEST_SUITE\}\}(.*?)\{\{/UNLESS_SKIP_TEST_SUITE\}\}")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static UNLESS_SKIP_REGRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#UNLESS_SKIP_REGRESSION\}\}(.*?)\{\{/UNLESS_SKIP_REGRESSION\}\}")
        .expect("constant regex pattern is valid")
});

/// Strip or unwrap every `{{#UNLESS_<FLAG>}}...{{/UNLESS_<FLAG>}}` block for
/// the three known flags: the block is erased entirely when the flag is
/// true, and unwrapped (delimiters removed, body kept) when false.
fn apply_conditionals(template: &str, flags: TemplateFlags) -> String {
    let step = |input: &str, pattern: &Regex, skip: bool| {
        pattern
            .replace_all(input, |caps: &regex::Captures| if skip { String::new() } else { caps[1].to_string() })
            .to_string()
    };
    let result = step(template, &UNLESS_SKIP_PUPPETEER, flags.skip_puppeteer);
    let result = step(&result, &UNLESS_SKIP_TEST_SUITE, flags.skip_test_suite);
    step(&result, &UNLESS_SKIP_REGRESSION, flags.skip_regression)
}

/// Replace a literal `{{PLACEHOLDER}}` marker with `value`.
///
/// Plain string replacement, same limitation as the reference tool this was
/// modeled on: the marker must not appear in literal example text within a
/// template asset.
fn substitute(template: &str, marker: &str, value: &str) -> String {
    template.replace(marker, value)
}

/// Render the initializer prompt: substitutes `{{TARGET_BRANCH}}` and
/// `{{SPEC_SLUG}}`, then applies conditional blocks.
pub fn render_initializer_prompt(
    raw: &str,
    target_branch: &str,
    spec_slug_with_hash: &str,
    flags: TemplateFlags,
) -> String {
    let rendered = substitute(raw, "{{TARGET_BRANCH}}", target_branch);
    let rendered = substitute(&rendered, "{{SPEC_SLUG}}", spec_slug_with_hash);
    apply_conditionals(&rendered, flags)
}

/// Render the coding prompt: substitutes only `{{SPEC_SLUG}}`.
pub fn render_coding_prompt(raw: &str, spec_slug_with_hash: &str, flags: TemplateFlags) -> String {
    let rendered = substitute(raw, "{{SPEC_SLUG}}", spec_slug_with_hash);
    apply_conditionals(&rendered, flags)
}

/// Render the MR creation prompt: substitutes `{{SPEC_SLUG}}` and
/// `{{TARGET_BRANCH}}`.
pub fn render_mr_creation_prompt(
    raw: &str,
    spec_slug_with_hash: &str,
    target_branch: &str,
    flags: TemplateFlags,
) -> String {
    let rendered = substitute(raw, "{{SPEC_SLUG}}", spec_slug_with_hash);
    let rendered = substitute(&rendered, "{{TARGET_BRANCH}}", target_branch);
    apply_conditionals(&rendered, flags)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

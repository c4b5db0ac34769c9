// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn substitutes_target_branch_and_spec_slug() {
    let raw = "target: {{TARGET_BRANCH}} slug: {{SPEC_SLUG}}";
    let rendered = render_initializer_prompt(raw, "main", "demo-abcd1", TemplateFlags::default());
    assert_eq!(rendered, "target: main slug: demo-abcd1");
}

#[test]
fn coding_prompt_only_substitutes_spec_slug() {
    let raw = "slug={{SPEC_SLUG}} branch={{TARGET_BRANCH}}";
    let rendered = render_coding_prompt(raw, "demo-abcd1", TemplateFlags::default());
    assert_eq!(rendered, "slug=demo-abcd1 branch={{TARGET_BRANCH}}");
}

#[test]
fn mr_creation_prompt_substitutes_both() {
    let raw = "{{SPEC_SLUG}} -> {{TARGET_BRANCH}}";
    let rendered = render_mr_creation_prompt(raw, "demo-abcd1", "develop", TemplateFlags::default());
    assert_eq!(rendered, "demo-abcd1 -> develop");
}

#[test]
fn conditional_block_is_kept_unwrapped_when_flag_is_false() {
    let raw = "before {{#UNLESS_SKIP_PUPPETEER}}run puppeteer{{/UNLESS_SKIP_PUPPETEER}} after";
    let rendered = render_coding_prompt(raw, "x-1", TemplateFlags::default());
    assert_eq!(rendered, "before run puppeteer after");
}

#[test]
fn conditional_block_is_erased_when_flag_is_true() {
    let raw = "before {{#UNLESS_SKIP_PUPPETEER}}run puppeteer{{/UNLESS_SKIP_PUPPETEER}} after";
    let flags = TemplateFlags { skip_puppeteer: true, ..TemplateFlags::default() };
    let rendered = render_coding_prompt(raw, "x-1", flags);
    assert_eq!(rendered, "before  after");
}

#[test]
fn conditional_block_body_may_span_multiple_lines() {
    let raw = "{{#UNLESS_SKIP_TEST_SUITE}}\nrun tests\ncheck output\n{{/UNLESS_SKIP_TEST_SUITE}}";
    let rendered = render_coding_prompt(raw, "x-1", TemplateFlags::default());
    assert_eq!(rendered, "\nrun tests\ncheck output\n");
}

#[test]
fn each_flag_only_matches_its_own_delimiters() {
    let raw =
        "{{#UNLESS_SKIP_REGRESSION}}reg{{/UNLESS_SKIP_REGRESSION}}{{#UNLESS_SKIP_TEST_SUITE}}test{{/UNLESS_SKIP_TEST_SUITE}}";
    let flags = TemplateFlags { skip_regression: true, skip_test_suite: false, ..TemplateFlags::default() };
    let rendered = render_coding_prompt(raw, "x-1", flags);
    assert_eq!(rendered, "test");
}

#[test]
fn non_greedy_matching_handles_two_separate_blocks() {
    let raw = "{{#UNLESS_SKIP_PUPPETEER}}a{{/UNLESS_SKIP_PUPPETEER}} mid {{#UNLESS_SKIP_PUPPETEER}}b{{/UNLESS_SKIP_PUPPETEER}}";
    let rendered = render_coding_prompt(raw, "x-1", TemplateFlags::default());
    assert_eq!(rendered, "a mid b");
}

#[test]
fn unknown_placeholder_markers_outside_the_known_set_are_left_untouched() {
    let raw = "{{SOMETHING_ELSE}} {{SPEC_SLUG}}";
    let rendered = render_coding_prompt(raw, "x-1", TemplateFlags::default());
    assert_eq!(rendered, "{{SOMETHING_ELSE}} x-1");
}

use super::*;

#[test]
fn initializer_prompt_substitutes_branch_and_combined_slug() {
    let rendered =
        get_initializer_prompt("main", "demo", "abcd1", false, TemplateFlags::default()).unwrap();
    assert!(rendered.contains("main"));
    assert!(rendered.contains("demo-abcd1"));
}

#[test]
fn initializer_prompt_rejects_empty_target_branch() {
    let result = get_initializer_prompt("", "demo", "abcd1", false, TemplateFlags::default());
    assert!(result.is_err());
}

#[test]
fn coding_prompt_selects_file_only_variant_and_substitutes_slug() {
    let rendered = get_coding_prompt("demo", "abcd1", true, TemplateFlags::default()).unwrap();
    assert!(rendered.contains("demo-abcd1"));
    assert!(rendered.contains("file-only"));
}

#[test]
fn coding_prompt_rejects_empty_spec_hash() {
    let result = get_coding_prompt("demo", "", false, TemplateFlags::default());
    assert!(result.is_err());
}

#[test]
fn mr_creation_prompt_substitutes_slug_and_branch() {
    let rendered =
        get_mr_creation_prompt("demo", "abcd1", "develop", false, TemplateFlags::default()).unwrap();
    assert!(rendered.contains("demo-abcd1"));
    assert!(rendered.contains("develop"));
}

#[test]
fn mr_creation_prompt_rejects_empty_target_branch() {
    let result = get_mr_creation_prompt("demo", "abcd1", "", false, TemplateFlags::default());
    assert!(result.is_err());
}

#[test]
fn conditional_blocks_respond_to_flags_end_to_end() {
    let flags = TemplateFlags { skip_test_suite: true, ..TemplateFlags::default() };
    let rendered = get_coding_prompt("demo", "abcd1", false, flags).unwrap();
    assert!(!rendered.contains("Run the project's test suite"));
}

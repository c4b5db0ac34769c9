use super::*;

#[test]
fn initializer_prompt_selects_file_only_variant() {
    assert_eq!(initializer_prompt(true), INITIALIZER_PROMPT_FILE_ONLY);
    assert_eq!(initializer_prompt(false), INITIALIZER_PROMPT);
}

#[test]
fn coding_prompt_selects_file_only_variant() {
    assert_eq!(coding_prompt(true), CODING_PROMPT_FILE_ONLY);
    assert_eq!(coding_prompt(false), CODING_PROMPT);
}

#[test]
fn mr_creation_prompt_selects_file_only_variant() {
    assert_eq!(mr_creation_prompt(true), MR_CREATION_PROMPT_FILE_ONLY);
    assert_eq!(mr_creation_prompt(false), MR_CREATION_PROMPT);
}

#[test]
fn all_six_assets_are_non_empty() {
    for asset in [
        INITIALIZER_PROMPT,
        INITIALIZER_PROMPT_FILE_ONLY,
        CODING_PROMPT,
        CODING_PROMPT_FILE_ONLY,
        MR_CREATION_PROMPT,
        MR_CREATION_PROMPT_FILE_ONLY,
    ] {
        assert!(!asset.trim().is_empty());
    }
}

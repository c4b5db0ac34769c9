use super::*;

#[test]
fn slug_collapses_punctuation_and_lowercases() {
    assert_eq!(slug("My Great Spec  v2!.txt"), "my-great-spec-v2");
}

#[test]
fn slug_falls_back_to_default_when_empty() {
    assert_eq!(slug("!!!.md"), "default");
}

#[test]
fn slug_trims_leading_and_trailing_hyphens() {
    assert_eq!(slug("--weird--.md"), "weird");
}

#[test]
fn slug_strips_directory_and_extension() {
    assert_eq!(slug("/some/dir/Spec_File.v1.txt"), "spec-file-v1");
}

#[test]
fn slug_never_contains_illegal_chars() {
    for input in ["a/b/c.txt", "  ", "123.txt", "日本語.md", "a--b__c.txt"] {
        let s = slug(input);
        assert!(!s.is_empty());
        assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!s.starts_with('-') && !s.ends_with('-'));
    }
}

#[test]
fn hash_content_has_correct_length_and_alphabet() {
    let h = hash_content("some spec content");
    assert_eq!(h.len(), HASH_LEN);
    assert!(h.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn hash_content_varies_across_calls_due_to_random_bytes() {
    let h1 = hash_content("same content");
    let h2 = hash_content("same content");
    // Overwhelmingly likely to differ because of the random suffix bytes.
    assert_ne!(h1, h2);
}

#[test]
fn hash_reads_spec_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    std::fs::write(&path, "hello world").unwrap();
    let h = hash(&path).unwrap();
    assert_eq!(h.len(), HASH_LEN);
}

#[test]
fn hash_fails_on_missing_file() {
    let path = std::path::Path::new("/nonexistent/spec/path.txt");
    assert!(hash(path).is_err());
}

#[test]
fn base62_encode_pads_to_width() {
    assert_eq!(base62_encode(0, 8), "00000000");
    assert_eq!(base62_encode(61, 3), "00z");
}

use super::*;

#[test]
fn state_error_displays_path() {
    let err = StateError::Read {
        path: "/tmp/x.json".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert!(err.to_string().contains("/tmp/x.json"));
}

#[test]
fn harness_error_converts_from_state_error() {
    let state_err = StateError::Malformed {
        path: "foo.json".into(),
        source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
    };
    let harness: HarnessError = state_err.into();
    match harness {
        HarnessError::State(_) => {}
        _ => panic!("expected State variant"),
    }
}

#[test]
fn harness_error_converts_from_checkpoint_error() {
    let cp_err = CheckpointError::NotFound {
        checkpoint_id: "cp-1".into(),
        scope: "global".into(),
    };
    let harness: HarnessError = cp_err.into();
    assert!(harness.to_string().contains("cp-1"));
}

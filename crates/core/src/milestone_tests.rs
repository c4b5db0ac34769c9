use super::*;

#[test]
fn empty_milestone_is_uninitialized() {
    let m = MilestoneState::empty();
    assert!(!m.initialized);
    assert!(!m.all_issues_closed);
    assert!(!m.milestone_closed);
}

#[test]
fn round_trips_through_json() {
    let mut m = MilestoneState::empty();
    m.initialized = true;
    m.total_issues = 5;
    m.all_issues_closed = true;
    let json = serde_json::to_string(&m).unwrap();
    let back: MilestoneState = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}

#[test]
fn missing_optional_fields_deserialize_as_none() {
    let m: MilestoneState = serde_json::from_str(r#"{"initialized": true}"#).unwrap();
    assert!(m.initialized);
    assert!(m.repository.is_none());
    assert_eq!(m.total_issues, 0);
}

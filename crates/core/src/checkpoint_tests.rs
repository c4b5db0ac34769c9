use super::*;

fn record(id: &str, kind: CheckpointType, created_at: u64, completed: bool, status: CheckpointStatus) -> CheckpointRecord {
    CheckpointRecord {
        checkpoint_id: id.to_string(),
        checkpoint_type: kind,
        status,
        created_at,
        completed,
        context: serde_json::Value::Null,
        decision: None,
        notes: None,
        modifications: None,
    }
}

#[test]
fn checkpoint_type_round_trips_known_variants() {
    for kind in [
        CheckpointType::IssueEnrichment,
        CheckpointType::RegressionApproval,
        CheckpointType::IssueSelection,
        CheckpointType::MrPhaseTransition,
    ] {
        let s = kind.to_string();
        let parsed = CheckpointType::from(s.as_str());
        assert_eq!(parsed, kind);
    }
}

#[test]
fn checkpoint_type_unknown_becomes_other() {
    let kind = CheckpointType::from("SOMETHING_NEW");
    assert_eq!(kind, CheckpointType::Other("SOMETHING_NEW".to_string()));
}

#[test]
fn latest_pending_picks_max_created_at() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 100, false, CheckpointStatus::Pending),
    );
    log.append(
        GLOBAL_SCOPE,
        record("cp-2", CheckpointType::IssueSelection, 200, false, CheckpointStatus::Pending),
    );
    let (scope, latest) = log.latest_pending().unwrap();
    assert_eq!(scope, GLOBAL_SCOPE);
    assert_eq!(latest.checkpoint_id, "cp-2");
}

#[test]
fn latest_pending_ties_break_by_insertion_order() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 100, false, CheckpointStatus::Pending),
    );
    log.append(
        GLOBAL_SCOPE,
        record("cp-2", CheckpointType::IssueSelection, 100, false, CheckpointStatus::Pending),
    );
    let (_, latest) = log.latest_pending().unwrap();
    assert_eq!(latest.checkpoint_id, "cp-2", "later insertion wins on a created_at tie");
}

#[test]
fn latest_pending_ignores_completed_records() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 999, true, CheckpointStatus::Approved),
    );
    assert!(log.latest_pending().is_none());
}

#[test]
fn is_type_approved_reflects_latest_record_of_that_type() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::MrPhaseTransition, 1, true, CheckpointStatus::Rejected),
    );
    assert!(!log.is_type_approved(&CheckpointType::MrPhaseTransition));

    log.append(
        GLOBAL_SCOPE,
        record("cp-2", CheckpointType::MrPhaseTransition, 2, true, CheckpointStatus::Approved),
    );
    assert!(log.is_type_approved(&CheckpointType::MrPhaseTransition));
}

#[test]
fn find_mut_locates_record_across_scopes() {
    let mut log = CheckpointLog::empty();
    log.append(
        "issue-7",
        record("cp-1", CheckpointType::IssueEnrichment, 1, false, CheckpointStatus::Pending),
    );
    let found = log.find_mut("cp-1").expect("record exists");
    found.status = CheckpointStatus::Approved;
    found.completed = true;
    assert!(log.latest_pending().is_none());
}

#[test]
fn no_duplicate_ids_within_scope_by_default() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 1, false, CheckpointStatus::Pending),
    );
    assert!(!log.has_duplicate_ids_within_scope());

    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 2, false, CheckpointStatus::Pending),
    );
    assert!(log.has_duplicate_ids_within_scope());
}

#[test]
fn checkpoint_log_serializes_as_flat_scope_map() {
    let mut log = CheckpointLog::empty();
    log.append(
        GLOBAL_SCOPE,
        record("cp-1", CheckpointType::IssueSelection, 1, false, CheckpointStatus::Pending),
    );
    let json = serde_json::to_value(&log).unwrap();
    assert!(json.get(GLOBAL_SCOPE).is_some());
}

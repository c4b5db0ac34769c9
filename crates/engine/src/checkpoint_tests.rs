use super::*;
use oj_core::{CheckpointStatus, CheckpointType};

fn record(checkpoint_type: CheckpointType, context: serde_json::Value) -> CheckpointRecord {
    CheckpointRecord::new_pending(checkpoint_type, 1, context)
}

#[test]
fn issue_enrichment_selects_issues_needing_enrichment() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let context = serde_json::json!({
        "all_issues_with_judgments": [
            {"issue_iid": 1, "llm_judgment": {"decision": "needs_enrichment"}},
            {"issue_iid": 2, "llm_judgment": {"decision": "ready"}},
            {"issue_iid": 3, "llm_judgment": {"decision": "needs_enrichment"}},
        ]
    });
    let resolution = dispatcher.dispatch(&record(CheckpointType::IssueEnrichment, context));
    assert_eq!(resolution.status, Some(CheckpointStatus::Approved));
    assert_eq!(
        resolution.modifications.unwrap(),
        serde_json::json!({"selected_issue_iids": [1, 3]})
    );
}

#[test]
fn issue_enrichment_with_no_matching_issues_selects_none() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let context = serde_json::json!({"all_issues_with_judgments": [{"issue_iid": 1, "llm_judgment": {"decision": "ready"}}]});
    let resolution = dispatcher.dispatch(&record(CheckpointType::IssueEnrichment, context));
    assert_eq!(resolution.modifications.unwrap(), serde_json::json!({"selected_issue_iids": []}));
}

#[test]
fn regression_approval_decides_fix_now() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let resolution = dispatcher.dispatch(&record(CheckpointType::RegressionApproval, serde_json::json!({})));
    assert_eq!(resolution.decision.as_deref(), Some("fix_now"));
    assert_eq!(resolution.status, Some(CheckpointStatus::Approved));
}

#[test]
fn issue_selection_uses_recommended_issue_when_present() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let context = serde_json::json!({"recommended_issue_iid": 7});
    let resolution = dispatcher.dispatch(&record(CheckpointType::IssueSelection, context));
    assert_eq!(resolution.modifications.unwrap(), serde_json::json!({"selected_issue_iid": 7}));
}

#[test]
fn issue_selection_without_recommendation_approves_with_no_modifications() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let resolution = dispatcher.dispatch(&record(CheckpointType::IssueSelection, serde_json::json!({})));
    assert_eq!(resolution.status, Some(CheckpointStatus::Approved));
    assert!(resolution.modifications.is_none());
}

#[test]
fn unknown_checkpoint_type_falls_through_to_default_handler() {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let checkpoint_type = CheckpointType::from("SOME_NEW_KIND");
    let resolution = dispatcher.dispatch(&record(checkpoint_type, serde_json::json!({})));
    assert_eq!(resolution.status, Some(CheckpointStatus::Approved));
    assert!(resolution.decision.is_none());
    assert!(resolution.modifications.is_none());
}

#[test]
fn custom_handler_is_consulted_before_the_catch_all() {
    struct AlwaysRejects;
    impl CheckpointHandler for AlwaysRejects {
        fn can_handle(&self, checkpoint_type: &CheckpointType) -> bool {
            *checkpoint_type == CheckpointType::from("CUSTOM_KIND")
        }
        fn auto_approve(&self, _record: &CheckpointRecord) -> Resolution {
            Resolution { status: Some(CheckpointStatus::Rejected), ..Default::default() }
        }
    }

    let dispatcher = CheckpointDispatcher::with_builtin_handlers().with_handler(Box::new(AlwaysRejects));
    let checkpoint_type = CheckpointType::from("CUSTOM_KIND");
    let resolution = dispatcher.dispatch(&record(checkpoint_type, serde_json::json!({})));
    assert_eq!(resolution.status, Some(CheckpointStatus::Rejected));
}

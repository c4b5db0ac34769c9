use super::*;

fn milestone(name: Option<&str>, total: u32, all_closed: bool, closed: bool) -> MilestoneState {
    let mut milestone = MilestoneState::default();
    milestone.milestone_name = name.map(str::to_string);
    milestone.total_issues = total;
    milestone.all_issues_closed = all_closed;
    milestone.milestone_closed = closed;
    milestone
}

#[test]
fn session_header_names_the_initializer_kind() {
    let header = session_header(1, Phase::Initializer);
    assert!(header.contains("session 1"));
    assert!(header.contains("INITIALIZER"));
}

#[test]
fn session_header_names_the_coding_agent_kind_for_coding_and_mr_phases() {
    assert!(session_header(2, Phase::Coding).contains("CODING AGENT"));
    assert!(session_header(3, Phase::MrCreation).contains("CODING AGENT"));
}

#[test]
fn phase_info_block_is_a_fixed_note_for_initializer() {
    let block = phase_info_block(Phase::Initializer, "/proj", &MilestoneState::default());
    assert!(block.contains("first session"));
}

#[test]
fn phase_info_block_is_a_progress_summary_for_coding() {
    let milestone = milestone(Some("Sprint 1"), 4, false, false);
    let block = phase_info_block(Phase::Coding, "/proj", &milestone);
    assert!(block.contains("/proj"));
    assert!(block.contains("Sprint 1"));
    assert!(block.contains('4'));
    assert!(block.contains("in progress"));
}

#[test]
fn progress_summary_reports_all_issues_closed_before_milestone_close() {
    let milestone = milestone(Some("Sprint 1"), 4, true, false);
    assert!(progress_summary("/proj", &milestone).contains("all issues closed"));
}

#[test]
fn progress_summary_reports_closed_once_milestone_closed() {
    let milestone = milestone(Some("Sprint 1"), 4, true, true);
    assert!(progress_summary("/proj", &milestone).contains("closed"));
}

#[test]
fn checkpoint_awaiting_banner_includes_the_checkpoint_id() {
    assert!(checkpoint_awaiting_banner("ckpt-123").contains("ckpt-123"));
}

#[test]
fn final_summary_includes_project_dir_and_progress() {
    let milestone = milestone(Some("Sprint 1"), 2, false, false);
    let summary = final_summary("/proj", &milestone);
    assert!(summary.contains("/proj"));
    assert!(summary.contains("Sprint 1"));
}

use super::*;

fn inputs(is_initialized: bool, all_issues_closed: bool, skip_mr_creation: bool, mr_approved: bool) -> PhaseInputs {
    PhaseInputs {
        is_initialized,
        all_issues_closed,
        skip_mr_creation,
        mr_phase_transition_approved: mr_approved,
    }
}

#[test]
fn uninitialized_run_is_always_initializer() {
    assert_eq!(determine_phase(inputs(false, false, false, false)), Phase::Initializer);
    assert_eq!(determine_phase(inputs(false, true, true, true)), Phase::Initializer);
}

#[test]
fn initialized_with_open_issues_is_coding() {
    assert_eq!(determine_phase(inputs(true, false, false, false)), Phase::Coding);
}

#[test]
fn closed_issues_with_skip_mr_stays_coding() {
    assert_eq!(determine_phase(inputs(true, true, true, false)), Phase::Coding);
    assert_eq!(determine_phase(inputs(true, true, true, true)), Phase::Coding);
}

#[test]
fn closed_issues_without_mr_approval_stays_coding() {
    assert_eq!(determine_phase(inputs(true, true, false, false)), Phase::Coding);
}

#[test]
fn closed_issues_with_mr_approval_moves_to_mr_creation() {
    assert_eq!(determine_phase(inputs(true, true, false, true)), Phase::MrCreation);
}

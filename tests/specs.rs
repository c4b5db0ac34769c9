// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level integration tests covering §8's testable properties
//! end to end, against the crates' real public APIs rather than mocks.

use oj_core::{determine_phase, identifier, AgentConfig, AgentId, AgentRecord, AgentStatus, PhaseInputs};
use oj_daemon::state::DaemonState;
use oj_shell::security::{check_command, SecurityVerdict};
use tempfile::TempDir;

/// S1 (slugging).
#[test]
fn spec_filename_slugging() {
    assert_eq!(identifier::slug("My Great Spec  v2!.txt"), "my-great-spec-v2");
    assert_eq!(identifier::slug("!!!.md"), "default");
}

/// S2 (deny command).
#[test]
fn deny_command_not_on_the_allowlist() {
    let cwd = std::env::current_dir().unwrap();
    match check_command("ls && rm -rf /", &cwd) {
        SecurityVerdict::Deny(reason) => {
            assert_eq!(reason, "command 'rm' is not in the allowed commands list");
        }
        SecurityVerdict::Allow => panic!("expected denial"),
    }
}

/// S3 (deny substitution).
#[test]
fn deny_command_substitution() {
    let cwd = std::env::current_dir().unwrap();
    match check_command("echo $(whoami)", &cwd) {
        SecurityVerdict::Deny(reason) => {
            assert!(
                reason.to_lowercase().contains("substitution") || reason.to_lowercase().contains("subshell"),
                "unexpected denial reason: {reason}"
            );
        }
        SecurityVerdict::Allow => panic!("expected denial"),
    }
}

/// S4 (allow start.sh).
#[test]
fn allow_a_real_start_sh_invocation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("start.sh"), "#!/bin/sh\necho dev\n").unwrap();
    let verdict = check_command("./start.sh dev", dir.path());
    assert_eq!(verdict, SecurityVerdict::Allow);
}

/// S5 (deny start.sh with a dangerous character).
#[test]
fn deny_start_sh_with_a_dangerous_character() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("start.sh"), "#!/bin/sh\necho dev\n").unwrap();
    match check_command("./start.sh ; rm -rf /", dir.path()) {
        SecurityVerdict::Deny(reason) => {
            assert!(reason.to_lowercase().contains("character"), "unexpected denial reason: {reason}");
        }
        SecurityVerdict::Allow => panic!("expected denial"),
    }
}

/// S6 (phase selection).
#[test]
fn phase_selection_follows_the_decision_table() {
    use oj_core::Phase;

    let coding = determine_phase(PhaseInputs {
        is_initialized: true,
        all_issues_closed: true,
        skip_mr_creation: false,
        mr_phase_transition_approved: false,
    });
    assert_eq!(coding, Phase::Coding);

    let mr_creation = determine_phase(PhaseInputs {
        is_initialized: true,
        all_issues_closed: true,
        skip_mr_creation: false,
        mr_phase_transition_approved: true,
    });
    assert_eq!(mr_creation, Phase::MrCreation);
}

/// S7 (auto-approve enrichment) — exercised at the checkpoint-dispatch
/// level via `oj_engine`, which owns the handler table.
#[test]
fn auto_approve_enrichment_selects_only_issues_needing_enrichment() {
    use oj_core::{CheckpointRecord, CheckpointStatus, CheckpointType};
    use oj_engine::checkpoint::CheckpointDispatcher;

    let context = serde_json::json!({
        "all_issues_with_judgments": [
            {"issue_iid": 1, "llm_judgment": {"decision": "needs_enrichment"}},
            {"issue_iid": 2, "llm_judgment": {"decision": "ok"}},
        ]
    });
    let record = CheckpointRecord::new_pending(CheckpointType::IssueEnrichment, 1, context);

    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let resolution = dispatcher.dispatch(&record);

    assert_eq!(resolution.status, Some(CheckpointStatus::Approved));
    assert_eq!(resolution.modifications.unwrap(), serde_json::json!({"selected_issue_iids": [1]}));
}

/// S8 (daemon restart fidelity): register agent A (running) and agent B
/// (ready), persist, reload as a fresh daemon process would, and reconcile.
#[tokio::test]
async fn daemon_restart_coerces_running_agents_to_stopped() {
    use oj_daemon::manager::AgentManager;

    let dir = TempDir::new().unwrap();
    let spec_file = dir.path().join("spec.md");
    std::fs::write(&spec_file, "# spec\n").unwrap();
    let state_path = dir.path().join("daemon_state.json");

    let config = AgentConfig {
        spec_file: spec_file.display().to_string(),
        project_dir: dir.path().display().to_string(),
        target_branch: "main".to_string(),
        max_iterations: None,
        auto_accept: false,
        spec_slug: None,
        spec_hash: None,
        file_only_mode: true,
        skip_mr_creation: true,
        skip_puppeteer: true,
        skip_test_suite: true,
        skip_regression: true,
    };

    let agent_a = AgentId::new();
    let agent_b = AgentId::new();

    let mut state = DaemonState::default();
    let mut record_a = AgentRecord::new(agent_a, config.clone());
    record_a.status = AgentStatus::Running;
    state.agents.insert(agent_a, record_a);
    state.agents.insert(agent_b, AgentRecord::new(agent_b, config));
    state.save(&state_path).unwrap();

    // Simulate the daemon process dying and a fresh one starting up.
    let mut reloaded = DaemonState::load(&state_path).unwrap();
    reloaded.reconcile_on_startup();
    reloaded.save(&state_path).unwrap();

    let manager = AgentManager::new(reloaded, state_path);
    let agents = manager.list().await;
    assert_eq!(agents.len(), 2);

    let a = agents.iter().find(|record| record.agent_id == agent_a).unwrap();
    let b = agents.iter().find(|record| record.agent_id == agent_b).unwrap();
    assert_eq!(a.status, AgentStatus::Stopped);
    assert_eq!(b.status, AgentStatus::Ready);
}

use super::*;
use tempfile::tempdir;

fn sample_config(spec_file: &str) -> oj_core::AgentConfig {
    oj_core::AgentConfig {
        spec_file: spec_file.to_string(),
        project_dir: ".".into(),
        target_branch: "main".into(),
        max_iterations: None,
        auto_accept: false,
        spec_slug: None,
        spec_hash: None,
        file_only_mode: false,
        skip_mr_creation: false,
        skip_puppeteer: false,
        skip_test_suite: false,
        skip_regression: false,
    }
}

#[test]
fn load_missing_file_returns_empty_state() {
    let dir = tempdir().unwrap();
    let state = DaemonState::load(&dir.path().join("daemon_state.json")).unwrap();
    assert!(state.agents.is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("daemon_state.json");

    let mut state = DaemonState::default();
    let agent_id = AgentId::new();
    state.agents.insert(agent_id, AgentRecord::new(agent_id, sample_config("spec.md")));
    state.save(&path).unwrap();

    let reloaded = DaemonState::load(&path).unwrap();
    assert_eq!(reloaded, state);
}

#[test]
fn reconcile_drops_agents_whose_spec_file_is_gone() {
    let mut state = DaemonState::default();
    let missing = AgentId::new();
    state.agents.insert(missing, AgentRecord::new(missing, sample_config("/nonexistent/spec.md")));

    state.reconcile_on_startup();

    assert!(state.agents.is_empty());
}

#[test]
fn reconcile_coerces_running_to_stopped_for_surviving_agents() {
    let dir = tempdir().unwrap();
    let spec_file = dir.path().join("spec.md");
    std::fs::write(&spec_file, "spec").unwrap();

    let mut state = DaemonState::default();
    let agent_id = AgentId::new();
    let mut record = AgentRecord::new(agent_id, sample_config(&spec_file.to_string_lossy()));
    record.status = oj_core::AgentStatus::Running;
    state.agents.insert(agent_id, record);

    state.reconcile_on_startup();

    assert_eq!(state.agents.get(&agent_id).unwrap().status, oj_core::AgentStatus::Stopped);
}

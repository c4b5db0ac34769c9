use super::*;
use tempfile::tempdir;

fn sample_config(project_dir: &str) -> AgentConfig {
    AgentConfig {
        spec_file: "spec.md".into(),
        project_dir: project_dir.to_string(),
        target_branch: "main".into(),
        max_iterations: None,
        auto_accept: false,
        spec_slug: Some("demo".into()),
        spec_hash: Some("abc123".into()),
        file_only_mode: false,
        skip_mr_creation: false,
        skip_puppeteer: false,
        skip_test_suite: false,
        skip_regression: false,
    }
}

fn manager(dir: &std::path::Path) -> AgentManager {
    AgentManager::new(DaemonState::default(), dir.join("daemon_state.json"))
}

#[tokio::test]
async fn register_creates_a_ready_agent() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let agent_id = AgentId::new();

    let record = manager.register(agent_id, sample_config(".")).await.unwrap();
    assert_eq!(record.status, AgentStatus::Ready);
    assert_eq!(manager.list().await.len(), 1);
}

#[tokio::test]
async fn register_rejects_duplicate_agent_id() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let agent_id = AgentId::new();

    manager.register(agent_id, sample_config(".")).await.unwrap();
    let err = manager.register(agent_id, sample_config(".")).await.unwrap_err();
    assert!(matches!(err, ManagerError::AlreadyExists(id) if id == agent_id));
}

#[tokio::test]
async fn status_reports_not_found_for_unknown_agent() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let err = manager.status(AgentId::new()).await.unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
}

#[tokio::test]
async fn start_spawns_a_process_and_stop_records_exit_code() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let agent_id = AgentId::new();

    let script_path = dir.path().join("fake-agent.sh");
    std::fs::write(&script_path, "#!/bin/sh\nsleep 30\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    std::env::set_var("HARNESS_AGENT_BIN", &script_path);

    let config = sample_config(&dir.path().to_string_lossy());
    let started = manager.start(agent_id, config.clone()).await.unwrap();
    assert_eq!(started.status, AgentStatus::Running);

    let second_start = manager.start(agent_id, config).await;
    assert!(matches!(second_start, Err(ManagerError::AlreadyRunning(_))));

    let stopped = manager.stop(agent_id).await.unwrap();
    assert_eq!(stopped.status, AgentStatus::Stopped);
    assert!(stopped.exit_code.is_some());
    assert!(stopped.stopped_at.is_some());

    std::env::remove_var("HARNESS_AGENT_BIN");
}

#[tokio::test]
async fn start_derives_and_persists_a_missing_slug_and_hash() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let agent_id = AgentId::new();

    let script_path = dir.path().join("fake-agent.sh");
    std::fs::write(&script_path, "#!/bin/sh\nsleep 30\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    std::env::set_var("HARNESS_AGENT_BIN", &script_path);

    let spec_path = dir.path().join("spec.md");
    std::fs::write(&spec_path, "do the thing").unwrap();

    let mut config = sample_config(&dir.path().to_string_lossy());
    config.spec_file = spec_path.display().to_string();
    config.spec_slug = None;
    config.spec_hash = None;

    let started = manager.start(agent_id, config).await.unwrap();
    assert_eq!(started.config.spec_slug.as_deref(), Some("spec"));
    assert!(started.config.spec_hash.is_some());

    manager.stop(agent_id).await.unwrap();

    let mut restart_config = sample_config(&dir.path().to_string_lossy());
    restart_config.spec_file = spec_path.display().to_string();
    restart_config.spec_slug = None;
    restart_config.spec_hash = None;
    let restarted = manager.start(agent_id, restart_config).await.unwrap();
    assert_eq!(restarted.config.spec_slug, started.config.spec_slug);
    assert_eq!(restarted.config.spec_hash, started.config.spec_hash);

    manager.stop(agent_id).await.unwrap();
    std::env::remove_var("HARNESS_AGENT_BIN");
}

#[tokio::test]
async fn remove_requires_the_agent_to_exist() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let err = manager.remove(AgentId::new()).await.unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
}

#[tokio::test]
async fn remove_deletes_a_registered_agent() {
    let dir = tempdir().unwrap();
    let manager = manager(dir.path());
    let agent_id = AgentId::new();
    manager.register(agent_id, sample_config(".")).await.unwrap();

    manager.remove(agent_id).await.unwrap();
    assert!(manager.status(agent_id).await.is_err());
}

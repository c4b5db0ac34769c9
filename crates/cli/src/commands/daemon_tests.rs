use super::*;

fn base_args() -> AgentConfigArgs {
    AgentConfigArgs {
        agent_id: None,
        spec_file: PathBuf::from("spec.md"),
        project_dir: PathBuf::from("/tmp/project"),
        target_branch: "main".to_string(),
        max_iterations: None,
        auto_accept: false,
        file_only: false,
        skip_mr: false,
        skip_puppeteer: false,
        skip_test_suite: false,
        skip_regression: false,
    }
}

#[test]
fn agent_id_mints_a_fresh_id_when_none_is_given() {
    let args = base_args();
    let first = args.agent_id();
    let second = args.agent_id();
    assert_ne!(first, second, "each call with no --agent-id should mint a distinct id");
}

#[test]
fn agent_id_reuses_the_given_id() {
    let mut args = base_args();
    args.agent_id = Some("fixed-id".to_string());
    assert_eq!(args.agent_id(), AgentId::from_string("fixed-id"));
}

#[test]
fn config_maps_every_flag_through() {
    let mut args = base_args();
    args.target_branch = "release".to_string();
    args.max_iterations = Some(5);
    args.auto_accept = true;
    args.file_only = true;
    args.skip_mr = true;
    args.skip_puppeteer = true;
    args.skip_test_suite = true;
    args.skip_regression = true;

    let config = args.config();
    assert_eq!(config.spec_file, "spec.md");
    assert_eq!(config.project_dir, "/tmp/project");
    assert_eq!(config.target_branch, "release");
    assert_eq!(config.max_iterations, Some(5));
    assert!(config.auto_accept);
    assert!(config.file_only_mode);
    assert!(config.skip_mr_creation);
    assert!(config.skip_puppeteer);
    assert!(config.skip_test_suite);
    assert!(config.skip_regression);
    assert_eq!(config.spec_slug, None);
    assert_eq!(config.spec_hash, None);
}

#[tokio::test]
async fn status_against_a_live_daemon_lists_its_tracked_agents() {
    use oj_daemon::{AgentManager, DaemonState};
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let socket_path = dir.path().join("daemon.sock");
    let state_path = dir.path().join("daemon_state.json");

    let listener = oj_daemon::listener::bind(&socket_path).await.unwrap();
    let manager = AgentManager::new(DaemonState::default(), state_path);
    let (shutdown_tx, _shutdown_rx) = tokio::sync::watch::channel(false);
    let server = tokio::spawn(oj_daemon::listener::serve(listener, manager, shutdown_tx.clone()));

    let body = crate::daemon_client::call_ok(&socket_path, Request::List).await.unwrap();
    assert_eq!(body, ResponseBody::Agents { agents: Vec::new() });

    let _ = shutdown_tx.send(true);
    server.abort();
}

#[test]
fn find_ojd_binary_falls_back_to_the_bare_name_off_path() {
    let path = find_ojd_binary();
    assert!(path == PathBuf::from("ojd") || path.file_name().map(|name| name == "ojd").unwrap_or(false));
}

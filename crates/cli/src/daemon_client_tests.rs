use super::*;
use oj_daemon::{AgentManager, DaemonState};
use oj_wire::ResponseBody;
use tempfile::TempDir;

#[tokio::test]
async fn not_running_is_reported_when_nothing_listens() {
    let dir = TempDir::new().unwrap();
    let socket_path = dir.path().join("daemon.sock");
    let err = call(&socket_path, Request::Ping).await.unwrap_err();
    assert!(err.is_not_running());
}

#[tokio::test]
async fn ping_round_trips_through_a_live_daemon() {
    let dir = TempDir::new().unwrap();
    let socket_path = dir.path().join("daemon.sock");
    let state_path = dir.path().join("daemon_state.json");

    let listener = oj_daemon::listener::bind(&socket_path).await.unwrap();
    let manager = AgentManager::new(DaemonState::default(), state_path);
    let (shutdown_tx, _shutdown_rx) = tokio::sync::watch::channel(false);
    let server = tokio::spawn(oj_daemon::listener::serve(listener, manager, shutdown_tx.clone()));

    let body = call_ok(&socket_path, Request::Ping).await.unwrap();
    assert_eq!(body, ResponseBody::Pong);

    let _ = shutdown_tx.send(true);
    server.abort();
}

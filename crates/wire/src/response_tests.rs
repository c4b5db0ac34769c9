use super::*;
use oj_core::{AgentConfig, AgentId, AgentRecord};

fn sample_config() -> AgentConfig {
    AgentConfig {
        spec_file: "spec.md".into(),
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
fn pong_serializes_with_ok_status_and_pong_type() {
    let json = serde_json::to_string(&Response::ok(ResponseBody::Pong)).unwrap();
    assert!(json.contains(r#""status":"ok""#));
    assert!(json.contains(r#""type":"pong""#));
}

#[test]
fn error_serializes_with_error_status_and_message() {
    let response = Response::error("agent not found");
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains(r#""status":"error""#));
    assert!(json.contains(r#""message":"agent not found""#));
    assert!(response.is_error());
}

#[test]
fn agent_response_round_trips() {
    let agent = AgentRecord::new(AgentId::new(), sample_config());
    let response = Response::ok(ResponseBody::Agent { agent: agent.clone() });
    let json = serde_json::to_string(&response).unwrap();
    let decoded: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, response);
}

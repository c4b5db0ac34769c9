use super::*;

#[test]
fn ping_round_trips_through_json() {
    let json = serde_json::to_string(&Request::Ping).unwrap();
    assert_eq!(json, r#"{"cmd":"ping"}"#);
    assert_eq!(serde_json::from_str::<Request>(&json).unwrap(), Request::Ping);
}

#[test]
fn stop_round_trips_with_agent_id() {
    let agent_id = AgentId::new();
    let request = Request::Stop { agent_id: agent_id.clone() };
    let json = serde_json::to_string(&request).unwrap();
    let decoded: Request = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn unknown_cmd_fails_to_deserialize() {
    let result: Result<Request, _> = serde_json::from_str(r#"{"cmd":"nonsense"}"#);
    assert!(result.is_err());
}

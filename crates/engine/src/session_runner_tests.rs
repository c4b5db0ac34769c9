use super::*;
use oj_adapters::{FakeSessionAdapter, SessionAdapterError};
use std::path::Path;

#[tokio::test]
async fn forwards_assistant_text_and_accumulates_it() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![
        SessionEvent::AssistantText("hello ".into()),
        SessionEvent::AssistantText("world".into()),
    ]));

    let mut outputs = Vec::new();
    let outcome =
        run_agent_session(&adapter, Path::new("/tmp"), "prompt", |text| outputs.push(text.to_string()), |_, _, _| {})
            .await;

    assert_eq!(outputs, vec!["hello ".to_string(), "world".to_string()]);
    assert_eq!(outcome, SessionOutcome::Continue("hello world".to_string()));
}

#[tokio::test]
async fn truncates_tool_use_summary_to_200_chars() {
    let adapter = FakeSessionAdapter::new();
    let long_summary = "x".repeat(300);
    adapter.push_response(Ok(vec![SessionEvent::ToolUse { name: "Bash".into(), input_summary: long_summary }]));

    let mut tools = Vec::new();
    run_agent_session(&adapter, Path::new("/tmp"), "p", |_| {}, |name, summary, is_error| {
        tools.push((name.to_string(), summary.to_string(), is_error));
    })
    .await;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].0, "Bash");
    assert_eq!(tools[0].1.len(), 200);
    assert!(!tools[0].2);
}

#[tokio::test]
async fn tool_result_success_forwards_done() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![SessionEvent::ToolResult { body: "ok".into(), is_error: false }]));

    let mut tools = Vec::new();
    run_agent_session(&adapter, Path::new("/tmp"), "p", |_| {}, |name, summary, is_error| {
        tools.push((name.to_string(), summary.to_string(), is_error));
    })
    .await;

    assert_eq!(tools[0], ("ToolResult".to_string(), "[Done]".to_string(), false));
}

#[tokio::test]
async fn tool_result_with_blocked_body_is_flagged_error() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![SessionEvent::ToolResult { body: "Request was BLOCKED by policy".into(), is_error: false }]));

    let mut tools = Vec::new();
    run_agent_session(&adapter, Path::new("/tmp"), "p", |_| {}, |name, summary, is_error| {
        tools.push((name.to_string(), summary.to_string(), is_error));
    })
    .await;

    assert!(tools[0].1.starts_with("[BLOCKED]"));
    assert!(tools[0].2);
}

#[tokio::test]
async fn tool_result_error_is_truncated_to_500_chars() {
    let adapter = FakeSessionAdapter::new();
    let long_body = "e".repeat(600);
    adapter.push_response(Ok(vec![SessionEvent::ToolResult { body: long_body, is_error: true }]));

    let mut tools = Vec::new();
    run_agent_session(&adapter, Path::new("/tmp"), "p", |_| {}, |name, summary, is_error| {
        tools.push((name.to_string(), summary.to_string(), is_error));
    })
    .await;

    assert!(tools[0].1.starts_with("[Error] "));
    assert_eq!(tools[0].1.len(), "[Error] ".len() + 500);
    assert!(tools[0].2);
}

#[tokio::test]
async fn adapter_error_becomes_error_outcome() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Err(SessionAdapterError::Failed("network blew up".into())));

    let outcome = run_agent_session(&adapter, Path::new("/tmp"), "p", |_| {}, |_, _, _| {}).await;

    match outcome {
        SessionOutcome::Error(message) => assert!(message.contains("network blew up")),
        SessionOutcome::Continue(_) => panic!("expected error outcome"),
    }
}

#[tokio::test]
async fn session_is_bounded_at_1000_assistant_turns() {
    let adapter = FakeSessionAdapter::new();
    let events = (0..1_500).map(|i| SessionEvent::AssistantText(format!("{i} "))).collect();
    adapter.push_response(Ok(events));

    let mut count = 0;
    run_agent_session(&adapter, Path::new("/tmp"), "p", |_| count += 1, |_, _, _| {}).await;

    assert_eq!(count, MAX_ASSISTANT_TURNS);
}

use super::*;
use std::path::Path;

#[tokio::test]
async fn fake_adapter_records_calls_in_order() {
    let adapter = FakeSessionAdapter::new();
    adapter.run_session(Path::new("/tmp/a"), "first").await.unwrap();
    adapter.run_session(Path::new("/tmp/b"), "second").await.unwrap();

    let calls = adapter.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].prompt, "first");
    assert_eq!(calls[1].prompt, "second");
}

#[tokio::test]
async fn fake_adapter_returns_empty_session_when_no_response_queued() {
    let adapter = FakeSessionAdapter::new();
    let events = adapter.run_session(Path::new("/tmp"), "prompt").await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn fake_adapter_returns_queued_responses_in_fifo_order() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![SessionEvent::AssistantText("first".into())]));
    adapter.push_response(Ok(vec![SessionEvent::AssistantText("second".into())]));

    let first = adapter.run_session(Path::new("/tmp"), "p1").await.unwrap();
    let second = adapter.run_session(Path::new("/tmp"), "p2").await.unwrap();

    assert_eq!(first, vec![SessionEvent::AssistantText("first".into())]);
    assert_eq!(second, vec![SessionEvent::AssistantText("second".into())]);
}

#[tokio::test]
async fn fake_adapter_can_queue_an_error() {
    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Err(SessionAdapterError::Failed("boom".into())));

    let result = adapter.run_session(Path::new("/tmp"), "p").await;
    assert!(result.is_err());
}

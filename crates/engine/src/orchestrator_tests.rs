use super::*;
use oj_adapters::FakeSessionAdapter;
use oj_core::{CheckpointLog, CheckpointRecord, CheckpointType, MilestoneState, Resolution, WorkspaceInfo};
use oj_storage::atomic::write_json;
use oj_storage::initializer::{initialize, InitializerFlags};
use oj_storage::repository::run_dir;
use tempfile::tempdir;

struct RecordingObserver {
    checkpoint_awaits: Vec<String>,
    sessions_started: Vec<(u32, Phase)>,
}

impl RecordingObserver {
    fn new() -> Self {
        Self { checkpoint_awaits: Vec::new(), sessions_started: Vec::new() }
    }
}

impl OrchestratorObserver for RecordingObserver {
    fn checkpoint_awaiting(&mut self, checkpoint_id: &str) {
        self.checkpoint_awaits.push(checkpoint_id.to_string());
    }

    fn session_starting(&mut self, session_number: u32, phase: Phase) {
        self.sessions_started.push((session_number, phase));
    }
}

fn setup_run(project: &std::path::Path) -> RunIdentity {
    let scratch = tempdir().unwrap();
    let spec = scratch.path().join("demo.txt");
    std::fs::write(&spec, "spec content").unwrap();
    let run = initialize(project, &spec, "main", InitializerFlags::default()).unwrap();
    RunIdentity {
        project_dir: project.to_path_buf(),
        spec_slug: run.slug,
        spec_hash: run.hash,
        target_branch: "main".to_string(),
        max_iterations: Some(0),
    }
}

fn milestone_path(identity: &RunIdentity) -> std::path::PathBuf {
    run_dir(&identity.project_dir, &identity.spec_slug, &identity.spec_hash).join(".gitlab_milestone.json")
}

fn workspace_path(identity: &RunIdentity) -> std::path::PathBuf {
    run_dir(&identity.project_dir, &identity.spec_slug, &identity.spec_hash).join(".workspace_info.json")
}

fn checkpoint_log_path(identity: &RunIdentity) -> std::path::PathBuf {
    run_dir(&identity.project_dir, &identity.spec_slug, &identity.spec_hash).join(".hitl_checkpoint_log.json")
}

#[tokio::test]
async fn stop_signal_checked_first_exits_immediately() {
    let project = tempdir().unwrap();
    let identity = setup_run(project.path());
    let adapter = FakeSessionAdapter::new();
    let stop = StopSignal::new();
    stop.stop();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::Stopped);
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn max_iterations_zero_exits_without_running_a_session() {
    let project = tempdir().unwrap();
    let identity = setup_run(project.path());
    let adapter = FakeSessionAdapter::new();
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::MaxIterationsReached);
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn milestone_closed_exits_without_running_a_session() {
    let project = tempdir().unwrap();
    let mut identity = setup_run(project.path());
    identity.max_iterations = None;
    write_json(&milestone_path(&identity), &MilestoneState { milestone_closed: true, ..MilestoneState::empty() })
        .unwrap();

    let adapter = FakeSessionAdapter::new();
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::MilestoneClosed);
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn skip_mr_creation_with_all_issues_closed_exits() {
    let project = tempdir().unwrap();
    let mut identity = setup_run(project.path());
    identity.max_iterations = None;

    let mut info = WorkspaceInfo::new(&identity.spec_slug, &identity.spec_hash, "app_spec.txt", "main");
    info.skip_mr_creation = true;
    write_json(&workspace_path(&identity), &info).unwrap();
    write_json(
        &milestone_path(&identity),
        &MilestoneState { initialized: true, all_issues_closed: true, ..MilestoneState::empty() },
    )
    .unwrap();

    let adapter = FakeSessionAdapter::new();
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::SkipMrCreationAndAllIssuesClosed);
    assert!(adapter.calls().is_empty());
}

#[tokio::test]
async fn uninitialized_run_sends_initializer_prompt() {
    let project = tempdir().unwrap();
    let mut identity = setup_run(project.path());
    identity.max_iterations = Some(1);

    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![]));
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::MaxIterationsReached);
    assert_eq!(observer.sessions_started, vec![(1, Phase::Initializer)]);
    let calls = adapter.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("main"));
}

#[tokio::test(start_paused = true)]
async fn auto_accept_resolves_pending_checkpoint_then_continues() {
    let project = tempdir().unwrap();
    let mut identity = setup_run(project.path());
    identity.max_iterations = Some(1);

    let mut info = WorkspaceInfo::new(&identity.spec_slug, &identity.spec_hash, "app_spec.txt", "main");
    info.auto_accept = true;
    write_json(&workspace_path(&identity), &info).unwrap();

    let mut log = CheckpointLog::empty();
    let record = CheckpointRecord::new_pending(CheckpointType::IssueSelection, 1, serde_json::json!({}));
    let checkpoint_id = record.checkpoint_id.clone();
    log.append("global", record);
    write_json(&checkpoint_log_path(&identity), &log).unwrap();

    let adapter = FakeSessionAdapter::new();
    adapter.push_response(Ok(vec![]));
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::MaxIterationsReached);
    assert!(observer.checkpoint_awaits.is_empty());

    let reloaded: CheckpointLog = oj_storage::atomic::read_json(&checkpoint_log_path(&identity)).unwrap().unwrap();
    let resolved = reloaded.scopes.get("global").unwrap().iter().find(|r| r.checkpoint_id == checkpoint_id).unwrap();
    assert!(resolved.completed);
    assert_eq!(resolved.status, oj_core::CheckpointStatus::Approved);
}

#[tokio::test(start_paused = true)]
async fn non_auto_accept_pending_checkpoint_blocks_until_stopped() {
    let project = tempdir().unwrap();
    let mut identity = setup_run(project.path());
    identity.max_iterations = None;

    let mut log = CheckpointLog::empty();
    let record = CheckpointRecord::new_pending(CheckpointType::IssueSelection, 1, serde_json::json!({}));
    log.append("global", record);
    write_json(&checkpoint_log_path(&identity), &log).unwrap();

    let adapter = FakeSessionAdapter::new();
    let stop = StopSignal::new();
    let pause = PauseSignal::new();
    let mut observer = RecordingObserver::new();

    let stop_clone = stop.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(20)).await;
        stop_clone.stop();
    });

    let result = run(&adapter, &identity, &stop, &pause, &mut observer).await.unwrap();

    assert_eq!(result, ExitReason::Stopped);
    assert_eq!(observer.checkpoint_awaits.len(), 1);
    assert!(adapter.calls().is_empty());
}

#[test]
fn find_record_locates_record_across_scopes() {
    let mut log = CheckpointLog::empty();
    let record = CheckpointRecord::new_pending(CheckpointType::IssueSelection, 1, serde_json::json!({}));
    let id = record.checkpoint_id.clone();
    log.append("issue-1", record);

    assert!(find_record(&log, &id).is_some());
    assert!(find_record(&log, "missing").is_none());
}

#[allow(dead_code)]
fn unused_import_anchor(_: Resolution) {}

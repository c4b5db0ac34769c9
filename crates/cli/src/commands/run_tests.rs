use super::*;
use oj_storage::atomic::write_json;
use tempfile::TempDir;

fn observer_over(project_dir: PathBuf, spec_slug: &str, spec_hash: &str) -> RunObserver {
    RunObserver { project_dir, spec_slug: spec_slug.to_string(), spec_hash: spec_hash.to_string() }
}

#[test]
fn milestone_defaults_to_empty_when_nothing_has_been_written() {
    let dir = TempDir::new().unwrap();
    let observer = observer_over(dir.path().to_path_buf(), "slug", "hash");
    assert_eq!(observer.milestone(), MilestoneState::default());
}

#[test]
fn milestone_reflects_the_on_disk_document() {
    let dir = TempDir::new().unwrap();
    let run_dir = oj_storage::repository::run_dir(dir.path(), "slug", "hash");
    std::fs::create_dir_all(&run_dir).unwrap();
    let mut milestone = MilestoneState::default();
    milestone.milestone_name = Some("Sprint 1".to_string());
    milestone.total_issues = 3;
    write_json(&run_dir.join(".gitlab_milestone.json"), &milestone).unwrap();

    let observer = observer_over(dir.path().to_path_buf(), "slug", "hash");
    assert_eq!(observer.milestone().milestone_name.as_deref(), Some("Sprint 1"));
    assert_eq!(observer.milestone().total_issues, 3);
}

use super::*;
use tempfile::tempdir;

#[test]
fn bootstrap_workspace_returns_agent_dir_slug_and_hash() {
    let project = tempdir().unwrap();
    let scratch = tempdir().unwrap();
    let spec = scratch.path().join("My Feature.txt");
    std::fs::write(&spec, "do the thing").unwrap();

    let (agent_dir, slug, hash) =
        bootstrap_workspace(project.path(), &spec, "main", false, false, None, None).unwrap();

    assert!(agent_dir.ends_with(format!("{slug}-{hash}")));
    assert_eq!(slug, "my-feature");
    assert!(agent_dir.join("app_spec.txt").is_file());
}

#[test]
fn bootstrap_workspace_reuses_a_supplied_slug_and_hash() {
    let project = tempdir().unwrap();
    let scratch = tempdir().unwrap();
    let spec = scratch.path().join("spec.txt");
    std::fs::write(&spec, "content").unwrap();

    let first = bootstrap_workspace(project.path(), &spec, "main", false, false, None, None).unwrap();
    let second = bootstrap_workspace(
        project.path(),
        &spec,
        "main",
        false,
        false,
        Some(first.1.clone()),
        Some(first.2.clone()),
    )
    .unwrap();

    assert_eq!(first, second);
}

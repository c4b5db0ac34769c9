use super::*;
use tempfile::tempdir;

#[test]
fn acquire_creates_lock_file() {
    let dir = tempdir().unwrap();
    let lock = OrchestratorLock::acquire(dir.path()).unwrap();
    assert!(dir.path().join(".orchestrator.lock").exists());
    drop(lock);
}

#[test]
fn drop_removes_the_lock_file() {
    let dir = tempdir().unwrap();
    let lock = OrchestratorLock::acquire(dir.path()).unwrap();
    drop(lock);
    assert!(!dir.path().join(".orchestrator.lock").exists());
}

#[test]
fn second_acquire_after_drop_succeeds() {
    let dir = tempdir().unwrap();
    let first = OrchestratorLock::acquire(dir.path()).unwrap();
    drop(first);
    let second = OrchestratorLock::acquire(dir.path());
    assert!(second.is_ok());
}

#[test]
fn concurrent_acquire_by_a_live_process_is_denied() {
    let dir = tempdir().unwrap();
    let _first = OrchestratorLock::acquire(dir.path()).unwrap();
    // The lock file now records our own (very much alive) pid, so a second
    // acquire attempt in the same process must be refused.
    let second = OrchestratorLock::acquire(dir.path());
    assert!(second.is_err());
}

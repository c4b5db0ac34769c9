// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory lock guarding a run directory against concurrent orchestrators.
//!
//! Resolves §9 Open Question (i): two orchestrator processes pointed at
//! the same `(project, slug, hash)` run directory would otherwise race on
//! every file in it. `.orchestrator.lock` is created with OS-level
//! exclusive-lock semantics (`fs2`) and carries the owning PID and start
//! time so a lock left behind by a crashed orchestrator can be reclaimed
//! rather than wedging every future run of that spec.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use oj_core::StateError;

const LOCK_FILE_NAME: &str = ".orchestrator.lock";

#[derive(Debug, Serialize, Deserialize)]
struct LockInfo {
    pid: u32,
    started_at: DateTime<Utc>,
}

/// Held for the lifetime of one orchestrator run. Releases the OS lock
/// and removes the lock file on drop.
pub struct OrchestratorLock {
    path: PathBuf,
    file: std::fs::File,
}

impl OrchestratorLock {
    /// Acquires the lock for `run_dir`, reclaiming it if the previous
    /// holder's process is no longer alive.
    pub fn acquire(run_dir: &Path) -> Result<Self, StateError> {
        let path = run_dir.join(LOCK_FILE_NAME);
        let to_err = |source: io::Error| StateError::Write { path: path.display().to_string(), source };

        let file = OpenOptions::new().create(true).read(true).write(true).open(&path).map_err(to_err)?;

        if file.try_lock_exclusive().is_err() {
            let holder_alive = read_lock_info(&path).is_some_and(|info| process_is_alive(info.pid));
            if holder_alive {
                return Err(to_err(io::Error::new(
                    io::ErrorKind::WouldBlock,
                    format!("run directory {} is locked by another live orchestrator", run_dir.display()),
                )));
            }
            // Previous holder is gone; the OS released its lock along with
            // the process exit, so a retry here succeeds.
            file.try_lock_exclusive().map_err(to_err)?;
        }

        let info = LockInfo { pid: process::id(), started_at: Utc::now() };
        crate::atomic::write_json(&path, &info)?;

        Ok(Self { path, file })
    }
}

impl Drop for OrchestratorLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        let _ = std::fs::remove_file(&self.path);
    }
}

fn read_lock_info(path: &Path) -> Option<LockInfo> {
    crate::atomic::read_json(path).ok().flatten()
}

#[cfg(unix)]
fn process_is_alive(pid: u32) -> bool {
    nix::sys::signal::kill(nix::unistd::Pid::from_raw(pid as i32), None).is_ok()
}

#[cfg(not(unix))]
fn process_is_alive(_pid: u32) -> bool {
    true
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;

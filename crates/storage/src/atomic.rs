// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-whole-document persistence: serialize, write to a sibling temp
//! file, rename into place. Never a torn read, even if the process dies
//! mid-write. Backup rotation follows the `.bak`/`.bak.2`/`.bak.3` scheme
//! used elsewhere in the harness for crash-recoverable snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use oj_core::StateError;

const MAX_BAK_FILES: u32 = 3;

/// Picks the next `.bak` / `.bak.N` path for `path`, rotating older
/// backups out and removing the oldest once [`MAX_BAK_FILES`] is reached.
fn rotate_bak_path(path: &Path) -> PathBuf {
    let bak = |n: u32| {
        if n == 1 {
            path.with_extension("bak")
        } else {
            path.with_extension(format!("bak.{n}"))
        }
    };

    let oldest = bak(MAX_BAK_FILES);
    if oldest.exists() {
        let _ = fs::remove_file(&oldest);
    }
    for n in (1..MAX_BAK_FILES).rev() {
        let src = bak(n);
        if src.exists() {
            let _ = fs::rename(&src, bak(n + 1));
        }
    }
    bak(1)
}

/// Serializes `value` as pretty JSON and atomically replaces `path`,
/// rotating the previous contents into a `.bak` file first. Creates the
/// parent directory if it doesn't exist.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StateError> {
    let path_str = path.display().to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StateError::Write { path: path_str.clone(), source })?;
    }

    let body = serde_json::to_vec_pretty(value)
        .map_err(|source| StateError::Malformed { path: path_str.clone(), source })?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &body).map_err(|source| StateError::Write { path: path_str.clone(), source })?;

    if path.exists() {
        let bak = rotate_bak_path(path);
        let _ = fs::copy(path, bak);
    }

    fs::rename(&tmp_path, path).map_err(|source| StateError::Write { path: path_str, source })?;
    Ok(())
}

/// Reads and parses `path` as JSON. Returns `Ok(None)` when the file is
/// missing; a malformed file is still surfaced as `Err` so the caller
/// (the State Repository) can decide to log and fall back to empty.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, StateError> {
    let path_str = path.display().to_string();
    let body = match fs::read(path) {
        Ok(body) => body,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StateError::Read { path: path_str, source }),
    };
    let value = serde_json::from_slice(&body)
        .map_err(|source| StateError::Malformed { path: path_str, source })?;
    Ok(Some(value))
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;

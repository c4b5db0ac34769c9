// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run identity: spec slug and spec hash derivation.

use crate::error::StateError;
use sha2::{Digest, Sha256};
use std::path::Path;

const BASE62_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const HASH_LEN: usize = 8;

/// Derive a kebab-case slug from a spec filename.
///
/// Strips directories and extension, lowercases, collapses any run of
/// characters outside `[a-z0-9]` to a single `-`, trims leading/trailing
/// hyphens, and falls back to `"default"` when nothing survives.
pub fn slug(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let mut out = String::with_capacity(stem.len());
    let mut pending_hyphen = false;
    for ch in stem.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lower);
        } else {
            pending_hyphen = true;
        }
    }

    if out.is_empty() {
        "default".to_string()
    } else {
        out
    }
}

/// Derive the 8-character base62 spec hash: SHA-256(content)[..4] concatenated
/// with 4 cryptographically random bytes, read big-endian, base62-encoded and
/// left-zero-padded to 8 characters.
pub fn hash(spec_path: &Path) -> Result<String, StateError> {
    let content = std::fs::read_to_string(spec_path).map_err(|source| StateError::SpecRead {
        path: spec_path.display().to_string(),
        source,
    })?;
    Ok(hash_content(&content))
}

/// Core of [`hash`], separated out so it can be exercised without touching
/// the filesystem.
pub fn hash_content(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut bytes = [0u8; 8];
    bytes[..4].copy_from_slice(&digest[..4]);

    let random: [u8; 4] = rand::random();
    bytes[4..].copy_from_slice(&random);

    let value = u64::from_be_bytes(bytes);
    base62_encode(value, HASH_LEN)
}

fn base62_encode(mut value: u64, width: usize) -> String {
    if value == 0 {
        return "0".repeat(width);
    }
    let mut digits = Vec::with_capacity(width);
    while value > 0 {
        let rem = (value % 62) as usize;
        digits.push(BASE62_ALPHABET[rem]);
        value /= 62;
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.reverse();
    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;

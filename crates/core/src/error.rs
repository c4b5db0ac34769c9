// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Three-tier error taxonomy shared by every layer of the harness.

use thiserror::Error;

/// Errors raised while loading, validating, or persisting on-disk state
/// (workspace info, milestone state, checkpoint log).
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("spec file {path} could not be read as UTF-8: {source}")]
    SpecRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the checkpoint engine.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("no handler registered for checkpoint type {0:?}")]
    NoHandler(String),

    #[error("checkpoint {checkpoint_id} not found in scope {scope}")]
    NotFound { checkpoint_id: String, scope: String },

    #[error("checkpoint {checkpoint_id} could not be persisted: {source}")]
    Persist {
        checkpoint_id: String,
        #[source]
        source: StateError,
    },
}

/// The umbrella error type. Every fallible operation in the harness core
/// eventually surfaces one of these.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error("session error: {0}")]
    Session(String),

    #[error("daemon error: {0}")]
    Daemon(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("command rejected by security filter: {0}")]
    Security(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj-storage: write-whole-document persistence for the harness's on-disk
//! state — the State Repository, the Workspace Initializer, and the
//! advisory lock guarding a run directory against concurrent orchestrators.

pub mod atomic;
pub mod initializer;
pub mod lock;
pub mod repository;

pub use initializer::{InitializedRun, InitializerFlags};
pub use lock::OrchestratorLock;
pub use repository::{
    append_checkpoint, is_checkpoint_type_approved, load, load_pending_checkpoint, resolve_checkpoint,
    run_dir,
};

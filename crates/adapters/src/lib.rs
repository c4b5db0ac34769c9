// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj-adapters: the adapter trait boundary between the harness core and
//! the external LLM SDK client that actually drives a coding session.

pub mod process;
pub mod session;

pub use process::ProcessSessionAdapter;
pub use session::{SessionAdapter, SessionAdapterError, SessionEvent};

#[cfg(any(test, feature = "test-support"))]
pub use session::{FakeSessionAdapter, SessionCall};

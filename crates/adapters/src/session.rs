// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from a session adapter's single request/response round trip.
#[derive(Debug, Error)]
pub enum SessionAdapterError {
    #[error("session failed: {0}")]
    Failed(String),
}

/// One event emitted while an LLM session runs, in submission order.
///
/// This mirrors the event shapes the Session Runner needs to translate into
/// `onOutput`/`onTool` callbacks: assistant text, assistant tool use, and the
/// tool-result that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AssistantText(String),
    ToolUse { name: String, input_summary: String },
    ToolResult { body: String, is_error: bool },
}

/// Adapter over the LLM SDK client that drives one coding-agent session.
///
/// The real implementation (spawning an actual LLM session and streaming
/// its response) is out of scope; this trait is the seam the Session
/// Runner and Phase Orchestrator are built against, so they can be driven
/// by a deterministic fake in tests.
#[async_trait]
pub trait SessionAdapter: Clone + Send + Sync + 'static {
    /// Submit `prompt` to a new session rooted at `project_dir` and return
    /// the full ordered sequence of events the session produced.
    async fn run_session(&self, project_dir: &Path, prompt: &str) -> Result<Vec<SessionEvent>, SessionAdapterError>;
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{SessionAdapter, SessionAdapterError, SessionEvent};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// One recorded `run_session` call.
    #[derive(Debug, Clone)]
    pub struct SessionCall {
        pub project_dir: PathBuf,
        pub prompt: String,
    }

    struct FakeSessionState {
        calls: Vec<SessionCall>,
        responses: VecDeque<Result<Vec<SessionEvent>, SessionAdapterError>>,
    }

    /// Fake session adapter for testing the Session Runner and Phase
    /// Orchestrator without a real LLM SDK client.
    ///
    /// Responses are consumed in FIFO order via [`FakeSessionAdapter::push_response`];
    /// once exhausted, calls return an empty successful session.
    #[derive(Clone)]
    pub struct FakeSessionAdapter {
        inner: Arc<Mutex<FakeSessionState>>,
    }

    impl Default for FakeSessionAdapter {
        fn default() -> Self {
            Self { inner: Arc::new(Mutex::new(FakeSessionState { calls: Vec::new(), responses: VecDeque::new() })) }
        }
    }

    impl FakeSessionAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the events (or error) the next `run_session` call returns.
        pub fn push_response(&self, response: Result<Vec<SessionEvent>, SessionAdapterError>) {
            self.inner.lock().responses.push_back(response);
        }

        /// All calls made to this adapter so far, in order.
        pub fn calls(&self) -> Vec<SessionCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl SessionAdapter for FakeSessionAdapter {
        async fn run_session(
            &self,
            project_dir: &Path,
            prompt: &str,
        ) -> Result<Vec<SessionEvent>, SessionAdapterError> {
            let mut state = self.inner.lock();
            state.calls.push(SessionCall { project_dir: project_dir.to_path_buf(), prompt: prompt.to_string() });
            state.responses.pop_front().unwrap_or(Ok(Vec::new()))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSessionAdapter, SessionCall};

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

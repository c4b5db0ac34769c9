// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The one concrete, non-test [`SessionAdapter`]: shells out to the
//! external LLM SDK's CLI rather than linking it in-process.
//!
//! The actual LLM SDK is out of scope (it is treated as an opaque
//! streaming client); this adapter is the thinnest possible binding to
//! it, not a reimplementation of its wire protocol.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::session::{SessionAdapter, SessionAdapterError, SessionEvent};

/// Invokes an external command once per session, passing the prompt as an
/// argument and treating its stdout as one block of assistant text.
#[derive(Debug, Clone)]
pub struct ProcessSessionAdapter {
    command: String,
}

impl ProcessSessionAdapter {
    /// `command` is looked up on `PATH`; overridden in practice by
    /// `CLAUDE_CODE_COMMAND` (falls back to `"claude"`).
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("CLAUDE_CODE_COMMAND").unwrap_or_else(|_| "claude".to_string()))
    }
}

#[async_trait]
impl SessionAdapter for ProcessSessionAdapter {
    async fn run_session(&self, project_dir: &Path, prompt: &str) -> Result<Vec<SessionEvent>, SessionAdapterError> {
        debug!(command = %self.command, ?project_dir, "invoking external session adapter");
        let output = Command::new(&self.command)
            .current_dir(project_dir)
            .arg("--print")
            .arg(prompt)
            .output()
            .await
            .map_err(|err| SessionAdapterError::Failed(format!("failed to spawn {}: {err}", self.command)))?;

        if !output.status.success() {
            return Err(SessionAdapterError::Failed(format!(
                "{} exited with {:?}: {}",
                self.command,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![SessionEvent::AssistantText(text)])
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

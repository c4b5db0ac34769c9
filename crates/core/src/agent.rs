// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent identifier, configuration, and daemon-managed status.
//!
//! An "agent" here is one orchestrator subprocess the daemon supervises —
//! distinct from the LLM's own notion of an agent/assistant turn.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a daemon-managed orchestrator subprocess.
    pub struct AgentId("agt-");
}

/// The configuration the daemon uses to spawn (or respawn) an orchestrator
/// subprocess. Mirrors the CLI flags of `oj run` one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub spec_file: String,
    pub project_dir: String,
    pub target_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,
    #[serde(default)]
    pub auto_accept: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    #[serde(default)]
    pub file_only_mode: bool,
    #[serde(default)]
    pub skip_mr_creation: bool,
    #[serde(default)]
    pub skip_puppeteer: bool,
    #[serde(default)]
    pub skip_test_suite: bool,
    #[serde(default)]
    pub skip_regression: bool,
}

/// Lifecycle status of a daemon-managed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Starting,
    Running,
    Ready,
    Stopped,
    Failed,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Ready => "ready",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// One entry in `daemon_state.json`. `process` is intentionally absent from
/// this serialisable record — a live [`std::process::Child`] handle never
/// survives a daemon restart, which is exactly §8 invariant 9.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub agent_id: AgentId,
    pub config: AgentConfig,
    pub status: AgentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl AgentRecord {
    pub fn new(agent_id: AgentId, config: AgentConfig) -> Self {
        Self {
            agent_id,
            config,
            status: AgentStatus::Ready,
            log_file: None,
            started_at: None,
            stopped_at: None,
            exit_code: None,
        }
    }

    /// Applied to every record loaded from disk at daemon startup: a
    /// `running` status recorded before a crash cannot correspond to a live
    /// process, so it is unconditionally coerced to `stopped`.
    pub fn coerce_running_to_stopped(&mut self) {
        if self.status == AgentStatus::Running {
            self.status = AgentStatus::Stopped;
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Requests the CLI (or any RPC client) sends to the Agent Daemon.

use oj_core::{AgentConfig, AgentId};
use serde::{Deserialize, Serialize};

/// One line of the daemon's JSON-RPC protocol, read in from the socket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    /// Liveness check.
    Ping,
    /// List every agent the daemon currently tracks.
    List,
    /// Create a new agent record in `ready` status; error if `agent_id` already exists.
    Register { agent_id: AgentId, config: AgentConfig },
    /// Start (spawning if necessary) the named agent; error if already running.
    Start { agent_id: AgentId, config: AgentConfig },
    /// Terminate the named agent's subprocess.
    Stop { agent_id: AgentId },
    /// Fetch one agent's current record.
    Status { agent_id: AgentId },
    /// Stop (if running) and delete the named agent's record.
    Remove { agent_id: AgentId },
    /// Stop every agent and exit the daemon process.
    Shutdown,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

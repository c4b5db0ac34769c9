// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Responses the Agent Daemon sends back over the socket, one per request.

use oj_core::AgentRecord;
use serde::{Deserialize, Serialize};

/// The daemon's reply to one [`crate::Request`] line.
///
/// Wraps every reply in the `{"status": "ok"|"error", ...}` envelope §6
/// requires; on success the `type` tag within [`ResponseBody`] identifies
/// which command produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok {
        #[serde(flatten)]
        body: ResponseBody,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn ok(body: ResponseBody) -> Self {
        Self::Ok { body }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// The command-specific payload carried by a successful [`Response`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBody {
    Pong,
    Agents { agents: Vec<AgentRecord> },
    Agent { agent: AgentRecord },
    Removed,
    ShuttingDown,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session Runner: a bounded single-session executor. Submits a prompt to
//! a [`SessionAdapter`] and translates its events into `onOutput`/`onTool`
//! callbacks.

use std::path::Path;

use oj_adapters::{SessionAdapter, SessionEvent};

/// The maximum number of assistant turns (text or tool-use blocks) a single
/// session may produce before the runner stops consuming further events.
pub const MAX_ASSISTANT_TURNS: usize = 1_000;

/// The result of running one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Normal end of stream (or the turn cap was reached); carries the
    /// concatenation of every assistant text block forwarded.
    Continue(String),
    /// The adapter raised an error; carries its message.
    Error(String),
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Run one bounded session: submit `prompt` via `adapter`, then replay its
/// events through `on_output`/`on_tool` in order.
pub async fn run_agent_session<A: SessionAdapter>(
    adapter: &A,
    project_dir: &Path,
    prompt: &str,
    mut on_output: impl FnMut(&str),
    mut on_tool: impl FnMut(&str, &str, bool),
) -> SessionOutcome {
    let events = match adapter.run_session(project_dir, prompt).await {
        Ok(events) => events,
        Err(err) => return SessionOutcome::Error(err.to_string()),
    };

    let mut turns = 0usize;
    let mut accumulated = String::new();

    for event in events {
        if turns >= MAX_ASSISTANT_TURNS {
            break;
        }
        match event {
            SessionEvent::AssistantText(text) => {
                turns += 1;
                on_output(&text);
                accumulated.push_str(&text);
            }
            SessionEvent::ToolUse { name, input_summary } => {
                turns += 1;
                on_tool(&name, &truncate_chars(&input_summary, 200), false);
            }
            SessionEvent::ToolResult { body, is_error } => {
                if is_error {
                    on_tool("ToolResult", &format!("[Error] {}", truncate_chars(&body, 500)), true);
                } else if body.to_lowercase().contains("blocked") {
                    on_tool("ToolResult", &format!("[BLOCKED] {body}"), true);
                } else {
                    on_tool("ToolResult", "[Done]", false);
                }
            }
        }
    }

    SessionOutcome::Continue(accumulated)
}

#[cfg(test)]
#[path = "session_runner_tests.rs"]
mod tests;

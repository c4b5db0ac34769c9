// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure formatting functions for `oj run`'s console narration (§3.1),
//! grounded in the reference harness's own session/phase/checkpoint
//! console output. No I/O lives here — the `run` command prints whatever
//! these functions return.

use oj_core::{MilestoneState, Phase};

use crate::color;

/// Printed at the start of each LLM session.
pub fn session_header(session_number: u32, phase: Phase) -> String {
    let kind = match phase {
        Phase::Initializer => "INITIALIZER",
        Phase::Coding | Phase::MrCreation => "CODING AGENT",
    };
    color::header(&format!("── session {session_number}: {kind} ──"))
}

/// One line summarising milestone progress, reused by the phase-info
/// block and the final summary.
pub fn progress_summary(project_dir: &str, milestone: &MilestoneState) -> String {
    let name = milestone.milestone_name.as_deref().unwrap_or("(unnamed)");
    let state = if milestone.milestone_closed {
        "closed"
    } else if milestone.all_issues_closed {
        "all issues closed"
    } else {
        "in progress"
    };
    format!(
        "project: {project_dir} | milestone: {name} | issues: {} | {state}",
        milestone.total_issues
    )
}

/// Printed before each session starts.
pub fn phase_info_block(phase: Phase, project_dir: &str, milestone: &MilestoneState) -> String {
    match phase {
        Phase::Initializer => {
            "note: the first session sets up the milestone and may take significantly longer than later ones."
                .to_string()
        }
        Phase::Coding | Phase::MrCreation => progress_summary(project_dir, milestone),
    }
}

/// Printed whenever the orchestrator is about to block on a pending
/// checkpoint outside `auto_accept` mode.
pub fn checkpoint_awaiting_banner(checkpoint_id: &str) -> String {
    color::header(&format!("awaiting human review of checkpoint {checkpoint_id} — resolve it to continue"))
}

/// Printed once the run loop exits, for any [`oj_engine::ExitReason`].
pub fn final_summary(project_dir: &str, milestone: &MilestoneState) -> String {
    format!("run finished. {}", progress_summary(project_dir, milestone))
}

#[cfg(test)]
#[path = "narration_tests.rs"]
mod tests;

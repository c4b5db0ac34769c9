// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase Orchestrator: the main loop. Runs in its own process, spawned by
//! the daemon, and is strictly sequential — no two sessions ever run
//! concurrently within it.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use oj_adapters::SessionAdapter;
use oj_core::{
    determine_phase, CheckpointRecord, CheckpointStatus, CheckpointType, HarnessResult, Phase, PhaseInputs,
};
use oj_runbook::{get_coding_prompt, get_initializer_prompt, get_mr_creation_prompt, TemplateFlags};
use oj_storage::repository::{load, load_pending_checkpoint, resolve_checkpoint};

use crate::checkpoint::CheckpointDispatcher;
use crate::session_runner::{run_agent_session, SessionOutcome};

const CHECKPOINT_POLL_INTERVAL: Duration = Duration::from_secs(5);
const SESSION_COOLDOWN: Duration = Duration::from_secs(3);

/// Cooperative stop flag; checked at every decision point and every sleep.
#[derive(Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cooperative pause flag; the loop blocks at its decision point while
/// asserted, without counting toward `max_iterations`.
#[derive(Clone, Default)]
pub struct PauseSignal(Arc<AtomicBool>);

impl PauseSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, paused: bool) {
        self.0.store(paused, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Static identity of the run the orchestrator is driving.
#[derive(Debug, Clone)]
pub struct RunIdentity {
    pub project_dir: PathBuf,
    pub spec_slug: String,
    pub spec_hash: String,
    pub target_branch: String,
    pub max_iterations: Option<u32>,
}

/// Why the orchestrator loop exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    Stopped,
    MaxIterationsReached,
    CheckpointRejected,
    MilestoneClosed,
    SkipMrCreationAndAllIssuesClosed,
}

/// Narration hooks the orchestrator fires at session boundaries, consumed
/// by the CLI's output-formatting layer (§3.1); the orchestrator itself
/// performs no I/O beyond state repository reads/writes.
pub trait OrchestratorObserver {
    fn session_starting(&mut self, _session_number: u32, _phase: Phase) {}
    fn checkpoint_awaiting(&mut self, _checkpoint_id: &str) {}
    fn session_completed(&mut self, _phase: Phase, _outcome: &SessionOutcome) {}
    fn tool_event(&mut self, _name: &str, _summary: &str, _is_error: bool) {}
}

/// A no-op observer for callers that don't need narration (tests, headless
/// daemon-driven runs).
pub struct NullObserver;
impl OrchestratorObserver for NullObserver {}

async fn sleep_with_stop_check(duration: Duration, stop: &StopSignal) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        if stop.is_stopped() {
            return;
        }
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        if remaining.is_zero() {
            return;
        }
        tokio::time::sleep(remaining.min(Duration::from_millis(200))).await;
    }
}

fn find_record<'a>(log: &'a oj_core::CheckpointLog, checkpoint_id: &str) -> Option<&'a CheckpointRecord> {
    log.scopes.values().flatten().find(|r| r.checkpoint_id == checkpoint_id)
}

fn prompt_for_phase(
    phase: Phase,
    identity: &RunIdentity,
    flags: TemplateFlags,
    file_only_mode: bool,
) -> HarnessResult<String> {
    match phase {
        Phase::Initializer => get_initializer_prompt(
            &identity.target_branch,
            &identity.spec_slug,
            &identity.spec_hash,
            file_only_mode,
            flags,
        ),
        Phase::Coding => get_coding_prompt(&identity.spec_slug, &identity.spec_hash, file_only_mode, flags),
        Phase::MrCreation => get_mr_creation_prompt(
            &identity.spec_slug,
            &identity.spec_hash,
            &identity.target_branch,
            file_only_mode,
            flags,
        ),
    }
}

/// Run the orchestrator loop to completion, per §4.7's pseudocode.
pub async fn run<A: SessionAdapter>(
    adapter: &A,
    identity: &RunIdentity,
    stop: &StopSignal,
    pause: &PauseSignal,
    observer: &mut impl OrchestratorObserver,
) -> HarnessResult<ExitReason> {
    let dispatcher = CheckpointDispatcher::with_builtin_handlers();
    let mut iteration: u32 = 0;
    let mut session_number: u32 = 0;

    loop {
        iteration += 1;
        if stop.is_stopped() {
            return Ok(ExitReason::Stopped);
        }
        while pause.is_paused() {
            if stop.is_stopped() {
                return Ok(ExitReason::Stopped);
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        if let Some(max) = identity.max_iterations {
            if iteration > max {
                return Ok(ExitReason::MaxIterationsReached);
            }
        }

        let state = load(&identity.project_dir, &identity.spec_slug, &identity.spec_hash);

        if let Some(pending) = load_pending_checkpoint(&identity.project_dir, &identity.spec_slug, &identity.spec_hash)
        {
            if state.auto_accept() {
                let resolution = dispatcher.dispatch(&pending);
                resolve_checkpoint(
                    &identity.project_dir,
                    &identity.spec_slug,
                    &identity.spec_hash,
                    &pending.checkpoint_id,
                    resolution,
                )?;
            } else {
                observer.checkpoint_awaiting(&pending.checkpoint_id);
                loop {
                    sleep_with_stop_check(CHECKPOINT_POLL_INTERVAL, stop).await;
                    if stop.is_stopped() {
                        return Ok(ExitReason::Stopped);
                    }
                    let reloaded =
                        load(&identity.project_dir, &identity.spec_slug, &identity.spec_hash);
                    let Some(log) = reloaded.checkpoint_log.as_ref() else { continue };
                    let Some(record) = find_record(log, &pending.checkpoint_id) else { break };
                    if record.status.is_pending() {
                        continue;
                    }
                    if record.status == CheckpointStatus::Rejected {
                        return Ok(ExitReason::CheckpointRejected);
                    }
                    break;
                }
            }
        }

        let state = load(&identity.project_dir, &identity.spec_slug, &identity.spec_hash);

        if state.milestone_closed() {
            return Ok(ExitReason::MilestoneClosed);
        }
        if state.skip_mr_creation() && state.all_issues_closed() {
            return Ok(ExitReason::SkipMrCreationAndAllIssuesClosed);
        }

        let mr_approved = state
            .checkpoint_log
            .as_ref()
            .map(|log| log.is_type_approved(&CheckpointType::MrPhaseTransition))
            .unwrap_or(false);

        let phase = determine_phase(PhaseInputs {
            is_initialized: state.is_initialized(),
            all_issues_closed: state.all_issues_closed(),
            skip_mr_creation: state.skip_mr_creation(),
            mr_phase_transition_approved: mr_approved,
        });

        let flags = TemplateFlags {
            skip_puppeteer: state.workspace.as_ref().map(|w| w.skip_puppeteer).unwrap_or(false),
            skip_test_suite: state.workspace.as_ref().map(|w| w.skip_test_suite).unwrap_or(false),
            skip_regression: state.workspace.as_ref().map(|w| w.skip_regression).unwrap_or(false),
        };
        let prompt = prompt_for_phase(phase, identity, flags, state.file_only_mode())?;

        session_number += 1;
        observer.session_starting(session_number, phase);

        let project_dir: &Path = &identity.project_dir;
        let outcome = run_agent_session(
            adapter,
            project_dir,
            &prompt,
            |_text| {},
            |name, summary, is_error| observer.tool_event(name, summary, is_error),
        )
        .await;
        observer.session_completed(phase, &outcome);

        match outcome {
            SessionOutcome::Continue(_) | SessionOutcome::Error(_) => {
                sleep_with_stop_check(SESSION_COOLDOWN, stop).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

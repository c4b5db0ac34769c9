// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oj run` — runs the Phase Orchestrator loop to completion in-process,
//! printing the session narration to stdout as it goes.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use oj_adapters::ProcessSessionAdapter;
use oj_core::{MilestoneState, Phase};
use oj_engine::{orchestrator, ExitReason, OrchestratorObserver, PauseSignal, RunIdentity, StopSignal};
use oj_runbook::bootstrap::bootstrap_workspace;

use crate::exit_error::ExitError;
use crate::preflight;

const VALIDATION_FAILURE: i32 = 1;
const INTERRUPTED: i32 = 130;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the feature spec the orchestrator builds against.
    #[arg(long)]
    pub spec_file: PathBuf,

    /// Repository root the agent operates in. Defaults to the current directory.
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Branch merge requests target.
    #[arg(long, default_value = "main")]
    pub target_branch: String,

    /// Stop after this many orchestrator iterations. Unbounded by default.
    #[arg(long)]
    pub max_iterations: Option<u32>,

    #[arg(long)]
    pub file_only: bool,

    #[arg(long)]
    pub skip_mr: bool,

    #[arg(long)]
    pub skip_puppeteer: bool,

    #[arg(long)]
    pub skip_test_suite: bool,

    #[arg(long)]
    pub skip_regression: bool,

    /// Override the auto-derived spec hash (advanced; must match a prior run's).
    #[arg(long)]
    pub spec_hash: Option<String>,

    /// Override the auto-derived spec slug (advanced; must match a prior run's).
    #[arg(long)]
    pub spec_slug: Option<String>,
}

/// Prints `oj run`'s narration via `narration.rs` and reloads milestone
/// state from disk at each callback, since the orchestrator itself never
/// hands narration callers anything beyond the bare phase/outcome.
struct RunObserver {
    project_dir: PathBuf,
    spec_slug: String,
    spec_hash: String,
}

impl RunObserver {
    fn milestone(&self) -> MilestoneState {
        oj_storage::repository::load(&self.project_dir, &self.spec_slug, &self.spec_hash)
            .milestone
            .unwrap_or_default()
    }
}

impl OrchestratorObserver for RunObserver {
    fn session_starting(&mut self, session_number: u32, phase: Phase) {
        println!("{}", crate::narration::session_header(session_number, phase));
        println!(
            "{}",
            crate::narration::phase_info_block(phase, &self.project_dir.display().to_string(), &self.milestone())
        );
    }

    fn checkpoint_awaiting(&mut self, checkpoint_id: &str) {
        println!("{}", crate::narration::checkpoint_awaiting_banner(checkpoint_id));
    }

    fn session_completed(&mut self, _phase: Phase, outcome: &oj_engine::SessionOutcome) {
        if let oj_engine::SessionOutcome::Error(message) = outcome {
            eprintln!("session error: {message}");
        }
    }

    fn tool_event(&mut self, name: &str, summary: &str, is_error: bool) {
        if is_error {
            eprintln!("[{name}] {summary}");
        } else {
            println!("[{name}] {summary}");
        }
    }
}

pub async fn run(args: RunArgs) -> Result<()> {
    preflight::check_session_environment()?;

    let project_dir = args.project_dir.clone().unwrap_or(std::env::current_dir()?);
    preflight::check_project_preconditions(&args.spec_file, &project_dir)?;

    let (_run_dir, spec_slug, spec_hash) = bootstrap_workspace(
        &project_dir,
        &args.spec_file,
        &args.target_branch,
        args.file_only,
        args.skip_mr,
        args.spec_slug.clone(),
        args.spec_hash.clone(),
    )
    .map_err(|source| ExitError::new(VALIDATION_FAILURE, source.to_string()))?;

    let run_dir = oj_storage::repository::run_dir(&project_dir, &spec_slug, &spec_hash);
    let _lock = oj_storage::OrchestratorLock::acquire(&run_dir)
        .map_err(|source| ExitError::new(VALIDATION_FAILURE, source.to_string()))?;

    let identity = RunIdentity {
        project_dir: project_dir.clone(),
        spec_slug: spec_slug.clone(),
        spec_hash: spec_hash.clone(),
        target_branch: args.target_branch.clone(),
        max_iterations: args.max_iterations,
    };

    let adapter = ProcessSessionAdapter::from_env();
    let stop = StopSignal::new();
    let pause = PauseSignal::new();

    let stop_for_signal = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_for_signal.stop();
        }
    });

    let mut observer = RunObserver { project_dir, spec_slug, spec_hash };

    let exit_reason = orchestrator::run(&adapter, &identity, &stop, &pause, &mut observer)
        .await
        .map_err(|source| ExitError::new(VALIDATION_FAILURE, source.to_string()))?;

    println!("{}", crate::narration::final_summary(&observer.project_dir.display().to_string(), &observer.milestone()));

    if exit_reason == ExitReason::Stopped {
        return Err(ExitError::new(INTERRUPTED, String::new()).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

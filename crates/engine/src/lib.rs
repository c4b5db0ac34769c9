// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint Engine, Session Runner, and Phase Orchestrator: the pieces
//! that drive one agent run's main loop.

pub mod checkpoint;
pub mod orchestrator;
pub mod session_runner;

pub use checkpoint::{CheckpointDispatcher, CheckpointHandler};
pub use orchestrator::{
    run, ExitReason, NullObserver, OrchestratorObserver, PauseSignal, RunIdentity, StopSignal,
};
pub use session_runner::{run_agent_session, SessionOutcome, MAX_ASSISTANT_TURNS};

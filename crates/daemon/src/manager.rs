// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `AgentManager`: the daemon's single source of truth for the running set
//! of agent subprocesses, wired to the persisted [`DaemonState`].

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use oj_core::{hash, slug, AgentConfig, AgentId, AgentRecord, AgentStatus};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{info, warn};

use crate::process;
use crate::state::DaemonState;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("agent {0} already exists")]
    AlreadyExists(AgentId),
    #[error("agent {0} not found")]
    NotFound(AgentId),
    #[error("agent {0} is already running")]
    AlreadyRunning(AgentId),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to derive spec slug/hash: {0}")]
    SpecHash(#[from] oj_core::StateError),
}

enum Signal {
    Stop(oneshot::Sender<Option<i32>>),
}

struct AgentHandle {
    signal_tx: mpsc::Sender<Signal>,
}

struct Shared {
    state: Mutex<DaemonState>,
    state_path: PathBuf,
    handles: Mutex<HashMap<AgentId, AgentHandle>>,
}

/// Owns every live agent subprocess and the persisted registry describing
/// it. Cheap to clone: all state lives behind the inner `Arc`.
#[derive(Clone)]
pub struct AgentManager {
    shared: Arc<Shared>,
}

impl AgentManager {
    pub fn new(state: DaemonState, state_path: PathBuf) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                state_path,
                handles: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub async fn list(&self) -> Vec<AgentRecord> {
        self.shared.state.lock().await.agents.values().cloned().collect()
    }

    pub async fn status(&self, agent_id: AgentId) -> Result<AgentRecord, ManagerError> {
        self.shared
            .state
            .lock()
            .await
            .agents
            .get(&agent_id)
            .cloned()
            .ok_or(ManagerError::NotFound(agent_id))
    }

    pub async fn register(&self, agent_id: AgentId, config: AgentConfig) -> Result<AgentRecord, ManagerError> {
        let mut state = self.shared.state.lock().await;
        if state.agents.contains_key(&agent_id) {
            return Err(ManagerError::AlreadyExists(agent_id));
        }
        let record = AgentRecord::new(agent_id, config);
        state.agents.insert(agent_id, record.clone());
        self.persist(&state)?;
        info!(%agent_id, "registered agent");
        Ok(record)
    }

    pub async fn start(&self, agent_id: AgentId, mut config: AgentConfig) -> Result<AgentRecord, ManagerError> {
        {
            let state = self.shared.state.lock().await;
            if let Some(existing) = state.agents.get(&agent_id) {
                if existing.status == AgentStatus::Running {
                    return Err(ManagerError::AlreadyRunning(agent_id));
                }
                // Reuse whatever slug/hash a prior run already settled on so a
                // restart lands back in the same run directory.
                if config.spec_slug.is_none() {
                    config.spec_slug = existing.config.spec_slug.clone();
                }
                if config.spec_hash.is_none() {
                    config.spec_hash = existing.config.spec_hash.clone();
                }
            }
        }

        if config.spec_slug.is_none() {
            config.spec_slug = Some(slug(&config.spec_file));
        }
        if config.spec_hash.is_none() {
            config.spec_hash = Some(hash(std::path::Path::new(&config.spec_file))?);
        }

        let started_at = now_unix();
        let (child, log_path) = process::spawn(&config, agent_id, started_at)?;
        let pid = child.id();

        let record = {
            let mut state = self.shared.state.lock().await;
            let mut record = AgentRecord::new(agent_id, config);
            record.status = AgentStatus::Running;
            record.log_file = Some(log_path.display().to_string());
            record.started_at = Some(started_at);
            state.agents.insert(agent_id, record.clone());
            self.persist(&state)?;
            record
        };

        let (signal_tx, signal_rx) = mpsc::channel(1);
        self.shared.handles.lock().await.insert(agent_id, AgentHandle { signal_tx });
        tokio::spawn(monitor(self.shared.clone(), agent_id, child, log_path, signal_rx));

        info!(%agent_id, pid, "started agent");
        Ok(record)
    }

    pub async fn stop(&self, agent_id: AgentId) -> Result<AgentRecord, ManagerError> {
        let signal_tx = {
            let handles = self.shared.handles.lock().await;
            handles.get(&agent_id).map(|handle| handle.signal_tx.clone())
        };

        match signal_tx {
            Some(tx) => {
                let (reply_tx, reply_rx) = oneshot::channel();
                if tx.send(Signal::Stop(reply_tx)).await.is_ok() {
                    let _ = reply_rx.await;
                }
            }
            None => {
                // Not running under this daemon instance (or already
                // exited); just make sure the record reflects that.
                let mut state = self.shared.state.lock().await;
                let record = state.agents.get_mut(&agent_id).ok_or(ManagerError::NotFound(agent_id))?;
                record.coerce_running_to_stopped();
                self.persist(&state)?;
            }
        }

        self.status(agent_id).await
    }

    pub async fn remove(&self, agent_id: AgentId) -> Result<(), ManagerError> {
        {
            let state = self.shared.state.lock().await;
            if !state.agents.contains_key(&agent_id) {
                return Err(ManagerError::NotFound(agent_id));
            }
        }
        self.stop(agent_id).await?;
        let mut state = self.shared.state.lock().await;
        state.agents.remove(&agent_id);
        self.persist(&state)?;
        info!(%agent_id, "removed agent");
        Ok(())
    }

    /// Stop every running agent. Used on `shutdown` and on process signal.
    pub async fn shutdown_all(&self) {
        let agent_ids: Vec<AgentId> = self.shared.handles.lock().await.keys().copied().collect();
        for agent_id in agent_ids {
            if let Err(err) = self.stop(agent_id).await {
                warn!(%agent_id, %err, "error stopping agent during shutdown");
            }
        }
    }

    fn persist(&self, state: &DaemonState) -> Result<(), ManagerError> {
        state.save(&self.shared.state_path).map_err(ManagerError::from)
    }
}

async fn monitor(
    shared: Arc<Shared>,
    agent_id: AgentId,
    mut child: tokio::process::Child,
    log_path: PathBuf,
    mut signal_rx: mpsc::Receiver<Signal>,
) {
    let exit_code = tokio::select! {
        status = child.wait() => status.ok().and_then(|s| s.code()),
        signal = signal_rx.recv() => {
            match signal {
                Some(Signal::Stop(reply)) => {
                    let code = process::stop(&mut child, agent_id).await.ok().flatten();
                    finish(&shared, agent_id, &log_path, code).await;
                    let _ = reply.send(code);
                    shared.handles.lock().await.remove(&agent_id);
                    return;
                }
                None => child.wait().await.ok().and_then(|s| s.code()),
            }
        }
    };

    finish(&shared, agent_id, &log_path, exit_code).await;
    shared.handles.lock().await.remove(&agent_id);
}

async fn finish(shared: &Arc<Shared>, agent_id: AgentId, log_path: &std::path::Path, exit_code: Option<i32>) {
    let stopped_at = now_unix();
    if let Ok(mut file) = std::fs::OpenOptions::new().append(true).open(log_path) {
        let _ = writeln!(file, "=== agent {agent_id} exited with code {exit_code:?} at {stopped_at} ===");
    }

    let mut state = shared.state.lock().await;
    if let Some(record) = state.agents.get_mut(&agent_id) {
        record.status = AgentStatus::Stopped;
        record.stopped_at = Some(stopped_at);
        record.exit_code = exit_code;
    }
    if let Err(err) = state.save(&shared.state_path) {
        warn!(%agent_id, %err, "failed to persist daemon state after agent exit");
    }
    info!(%agent_id, ?exit_code, "agent exited");
}

fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;

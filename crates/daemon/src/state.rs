// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `daemon_state.json`: the persisted registry of every agent the daemon
//! has ever registered, survived across restarts.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use oj_core::{AgentId, AgentRecord};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaemonState {
    #[serde(default)]
    pub agents: HashMap<AgentId, AgentRecord>,
}

impl DaemonState {
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Write the whole document to a temp file, then rename into place, so a
    /// concurrent reader never observes a half-written file.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, serde_json::to_vec_pretty(self)?)?;
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Applied once at daemon startup (§4.8 step 2): for every recorded
    /// agent, drop it if its spec file is gone; otherwise coerce a
    /// `running` status (which cannot correspond to a live process
    /// recorded before a crash) to `stopped`.
    pub fn reconcile_on_startup(&mut self) {
        self.agents.retain(|agent_id, record| {
            let exists = Path::new(&record.config.spec_file).exists();
            if !exists {
                warn!(%agent_id, spec_file = %record.config.spec_file, "dropping agent with missing spec file");
            }
            exists
        });
        for record in self.agents.values_mut() {
            record.coerce_running_to_stopped();
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

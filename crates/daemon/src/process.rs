// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning, monitoring, and terminating one agent subprocess.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use oj_core::{hash, slug, AgentConfig, AgentId};
use tokio::process::{Child, Command};
use tracing::{info, warn};

/// How long `stop` waits for a graceful exit before escalating to SIGKILL.
pub const GRACEFUL_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// The binary spawned for each agent subprocess, overridable for tests.
pub fn agent_binary() -> PathBuf {
    std::env::var("HARNESS_AGENT_BIN").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("oj"))
}

/// Builds the command line for spawning one agent subprocess from its
/// config, per §4.8: spec file, project dir, target branch, then the
/// optional flags.
pub fn build_command(config: &AgentConfig) -> Command {
    let mut command = Command::new(agent_binary());
    command.arg("run");
    command.arg("--spec-file").arg(&config.spec_file);
    command.arg("--project-dir").arg(&config.project_dir);
    command.arg("--target-branch").arg(&config.target_branch);
    if let Some(max_iterations) = config.max_iterations {
        command.arg("--max-iterations").arg(max_iterations.to_string());
    }
    if config.file_only_mode {
        command.arg("--file-only");
    }
    if config.skip_mr_creation {
        command.arg("--skip-mr");
    }
    if config.skip_puppeteer {
        command.arg("--skip-puppeteer");
    }
    if config.skip_test_suite {
        command.arg("--skip-test-suite");
    }
    if config.skip_regression {
        command.arg("--skip-regression");
    }
    if let Some(spec_slug) = &config.spec_slug {
        command.arg("--spec-slug").arg(spec_slug);
    }
    if let Some(spec_hash) = &config.spec_hash {
        command.arg("--spec-hash").arg(spec_hash);
    }
    if config.auto_accept {
        command.env("CODING_HARNESS_AUTO_ACCEPT", "1");
    }
    command
}

/// Where the merged stdout/stderr log for one agent run lands, per §6's
/// run directory layout.
pub fn log_path(config: &AgentConfig, agent_id: AgentId, started_at: u64) -> PathBuf {
    let spec_slug = config.spec_slug.clone().unwrap_or_else(|| slug(&config.spec_file));
    let spec_hash = config
        .spec_hash
        .clone()
        .unwrap_or_else(|| hash(std::path::Path::new(&config.spec_file)).unwrap_or_default());
    let timestamp = format_timestamp(started_at);
    PathBuf::from(&config.project_dir)
        .join(".claude-agent")
        .join(format!("{spec_slug}-{spec_hash}"))
        .join("logs")
        .join(format!("{agent_id}-{timestamp}.log"))
}

fn format_timestamp(unix_secs: u64) -> String {
    // YYYYmmdd-HHMMSS, UTC, without pulling in a calendar crate for one call site.
    let days = unix_secs / 86_400;
    let secs_of_day = unix_secs % 86_400;
    let (year, month, day) = civil_from_days(days as i64);
    let hour = secs_of_day / 3600;
    let minute = (secs_of_day % 3600) / 60;
    let second = secs_of_day % 60;
    format!("{year:04}{month:02}{day:02}-{hour:02}{minute:02}{second:02}")
}

/// Howard Hinnant's `civil_from_days` algorithm: days-since-epoch to (y, m, d).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Spawn `config`'s subprocess detached into its own session, with its
/// merged stdout/stderr redirected to a fresh log file preceded by a header.
pub fn spawn(config: &AgentConfig, agent_id: AgentId, started_at: u64) -> std::io::Result<(Child, PathBuf)> {
    let path = log_path(config, agent_id, started_at);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut command = build_command(config);
    let mut header = std::fs::File::create(&path)?;
    {
        use std::io::Write;
        writeln!(header, "=== agent {agent_id} started at {started_at} ===")?;
        writeln!(header, "command: {command:?}")?;
        writeln!(header, "cwd: {}", config.project_dir)?;
    }
    let log_for_stdout = std::fs::OpenOptions::new().append(true).open(&path)?;
    let log_for_stderr = std::fs::OpenOptions::new().append(true).open(&path)?;

    command.stdin(Stdio::null());
    command.stdout(Stdio::from(log_for_stdout));
    command.stderr(Stdio::from(log_for_stderr));
    command.process_group(0);

    let child = command.spawn()?;
    info!(%agent_id, log_path = %path.display(), "spawned agent subprocess");
    Ok((child, path))
}

/// Send SIGTERM, wait up to [`GRACEFUL_STOP_TIMEOUT`], then SIGKILL.
/// Returns the exit code once the process has actually exited.
pub async fn stop(child: &mut Child, agent_id: AgentId) -> std::io::Result<Option<i32>> {
    if let Some(pid) = child.id() {
        let pid = nix::unistd::Pid::from_raw(pid as i32);
        let _ = nix::sys::signal::kill(pid, nix::sys::signal::Signal::SIGTERM);
    }

    match tokio::time::timeout(GRACEFUL_STOP_TIMEOUT, child.wait()).await {
        Ok(status) => Ok(status?.code()),
        Err(_) => {
            warn!(%agent_id, "agent did not exit within grace period, sending SIGKILL");
            child.kill().await?;
            Ok(child.wait().await?.code())
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

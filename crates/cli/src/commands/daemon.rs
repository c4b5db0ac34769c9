// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oj daemon` — controls the Agent Daemon process lifecycle, and
//! `oj daemon agent` — thin RPC clients over its socket for each of
//! §4.8's eight commands.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use oj_core::{AgentConfig, AgentId};
use oj_daemon::paths::SOCKET_PATH;
use oj_wire::{Request, ResponseBody};

use crate::daemon_client::call_ok;

#[derive(Args)]
pub struct DaemonArgs {
    #[command(subcommand)]
    pub command: DaemonCommand,
}

#[derive(Subcommand)]
pub enum DaemonCommand {
    /// Spawn the daemon process in the background.
    Start,
    /// Send a shutdown RPC and wait for the process to exit.
    Stop,
    /// Report whether the daemon is running.
    Status,
    /// Stop, then start, the daemon.
    Restart,
    /// Print the daemon's own log file.
    Logs {
        #[arg(short = 'n', long, default_value = "200")]
        lines: usize,
    },
    /// Commands against one agent the daemon supervises.
    Agent {
        #[command(subcommand)]
        command: AgentCommand,
    },
}

#[derive(Subcommand)]
pub enum AgentCommand {
    /// Create a new agent record without starting it.
    Register(AgentConfigArgs),
    /// Start (spawning if necessary) an agent.
    Start(AgentConfigArgs),
    /// Terminate a running agent's subprocess.
    Stop { agent_id: String },
    /// Fetch one agent's current record.
    Status { agent_id: String },
    /// Stop (if running) and delete an agent's record.
    Remove { agent_id: String },
    /// List every agent the daemon currently tracks.
    List,
}

#[derive(Args)]
pub struct AgentConfigArgs {
    /// Reuse an existing agent id rather than minting a new one.
    #[arg(long)]
    pub agent_id: Option<String>,

    #[arg(long)]
    pub spec_file: PathBuf,

    #[arg(long)]
    pub project_dir: PathBuf,

    #[arg(long, default_value = "main")]
    pub target_branch: String,

    #[arg(long)]
    pub max_iterations: Option<u32>,

    #[arg(long)]
    pub auto_accept: bool,

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

    /// Override the auto-derived spec slug (advanced; must match a prior run's).
    #[arg(long)]
    pub spec_slug: Option<String>,

    /// Override the auto-derived spec hash (advanced; must match a prior run's).
    #[arg(long)]
    pub spec_hash: Option<String>,
}

impl AgentConfigArgs {
    fn agent_id(&self) -> AgentId {
        self.agent_id.as_deref().map(AgentId::from_string).unwrap_or_default()
    }

    fn config(&self) -> AgentConfig {
        AgentConfig {
            spec_file: self.spec_file.display().to_string(),
            project_dir: self.project_dir.display().to_string(),
            target_branch: self.target_branch.clone(),
            max_iterations: self.max_iterations,
            auto_accept: self.auto_accept,
            spec_slug: self.spec_slug.clone(),
            spec_hash: self.spec_hash.clone(),
            file_only_mode: self.file_only,
            skip_mr_creation: self.skip_mr,
            skip_puppeteer: self.skip_puppeteer,
            skip_test_suite: self.skip_test_suite,
            skip_regression: self.skip_regression,
        }
    }
}

pub async fn daemon(args: DaemonArgs) -> Result<()> {
    match args.command {
        DaemonCommand::Start => start().await,
        DaemonCommand::Stop => stop().await,
        DaemonCommand::Status => status().await,
        DaemonCommand::Restart => restart().await,
        DaemonCommand::Logs { lines } => logs(lines).await,
        DaemonCommand::Agent { command } => agent(command).await,
    }
}

fn socket_path() -> PathBuf {
    PathBuf::from(SOCKET_PATH)
}

async fn start() -> Result<()> {
    if call_ok(&socket_path(), Request::Ping).await.is_ok() {
        println!("daemon already running");
        return Ok(());
    }

    let ojd_path = find_ojd_binary();
    std::process::Command::new(ojd_path)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map_err(|err| anyhow!("failed to spawn daemon: {err}"))?;

    for _ in 0..50 {
        if call_ok(&socket_path(), Request::Ping).await.is_ok() {
            println!("daemon started");
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Err(anyhow!("daemon did not become ready in time"))
}

async fn stop() -> Result<()> {
    match call_ok(&socket_path(), Request::Shutdown).await {
        Ok(_) => {
            println!("daemon stopping");
            Ok(())
        }
        Err(err) if err.is_not_running() => {
            println!("daemon not running");
            Ok(())
        }
        Err(err) => Err(anyhow!("{err}")),
    }
}

async fn restart() -> Result<()> {
    stop().await?;
    tokio::time::sleep(Duration::from_millis(300)).await;
    start().await
}

async fn status() -> Result<()> {
    match call_ok(&socket_path(), Request::List).await {
        Ok(ResponseBody::Agents { agents }) => {
            println!("daemon running ({} agent(s) tracked)", agents.len());
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) if err.is_not_running() => {
            println!("daemon not running");
            Ok(())
        }
        Err(err) => Err(anyhow!("{err}")),
    }
}

async fn logs(lines: usize) -> Result<()> {
    let log_path = oj_daemon::paths::data_dir().join("daemon.log");

    if !log_path.exists() {
        println!("no daemon log found at {}", log_path.display());
        return Ok(());
    }
    let content = std::fs::read_to_string(&log_path)?;
    let tail: Vec<&str> = content.lines().collect();
    let start = tail.len().saturating_sub(lines);
    for line in &tail[start..] {
        println!("{line}");
    }
    Ok(())
}

async fn agent(command: AgentCommand) -> Result<()> {
    match command {
        AgentCommand::Register(args) => {
            let agent_id = args.agent_id();
            let body = call_ok(&socket_path(), Request::Register { agent_id, config: args.config() }).await?;
            print_agent(body)
        }
        AgentCommand::Start(args) => {
            let agent_id = args.agent_id();
            let body = call_ok(&socket_path(), Request::Start { agent_id, config: args.config() }).await?;
            print_agent(body)
        }
        AgentCommand::Stop { agent_id } => {
            let body = call_ok(&socket_path(), Request::Stop { agent_id: AgentId::from_string(agent_id) }).await?;
            print_agent(body)
        }
        AgentCommand::Status { agent_id } => {
            let body = call_ok(&socket_path(), Request::Status { agent_id: AgentId::from_string(agent_id) }).await?;
            print_agent(body)
        }
        AgentCommand::Remove { agent_id } => {
            call_ok(&socket_path(), Request::Remove { agent_id: AgentId::from_string(agent_id) }).await?;
            println!("removed");
            Ok(())
        }
        AgentCommand::List => {
            let body = call_ok(&socket_path(), Request::List).await?;
            match body {
                ResponseBody::Agents { agents } => {
                    if agents.is_empty() {
                        println!("no agents tracked");
                    }
                    for record in agents {
                        println!("{} {} {}", record.agent_id, record.status, record.config.spec_file);
                    }
                    Ok(())
                }
                _ => Ok(()),
            }
        }
    }
}

fn print_agent(body: ResponseBody) -> Result<()> {
    if let ResponseBody::Agent { agent } = body {
        println!("{} {} {}", agent.agent_id, agent.status, agent.config.spec_file);
    }
    Ok(())
}

fn find_ojd_binary() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let sibling = dir.join("ojd");
            if sibling.exists() {
                return sibling;
            }
        }
    }
    PathBuf::from("ojd")
}

#[cfg(test)]
#[path = "daemon_tests.rs"]
mod tests;

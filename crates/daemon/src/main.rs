// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ojd`: the Agent Daemon binary entry point.

use std::io::Write;

use fs2::FileExt;
use oj_daemon::manager::AgentManager;
use oj_daemon::state::DaemonState;
use oj_daemon::{listener, paths};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let log_path = paths::data_dir().join("daemon.log");
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let log_file = std::fs::OpenOptions::new().create(true).append(true).open(&log_path).ok();

    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init(),
        None => tracing_subscriber::fmt().with_env_filter(filter()).with_writer(std::io::stderr).init(),
    }

    if let Err(err) = run().await {
        error!(%err, "daemon exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pid_path = std::path::Path::new(paths::PID_PATH);
    let lock_file = std::fs::OpenOptions::new().write(true).create(true).truncate(false).open(pid_path)?;
    lock_file.try_lock_exclusive().map_err(|_| "another daemon instance already holds the pid file")?;
    {
        let mut lock_file = &lock_file;
        lock_file.set_len(0)?;
        writeln!(lock_file, "{}", std::process::id())?;
    }

    let state_path = paths::daemon_state_path();
    let mut state = DaemonState::load(&state_path)?;
    state.reconcile_on_startup();
    state.save(&state_path)?;
    info!(agents = state.agents.len(), "reconciled daemon state on startup");

    let socket_path = std::path::Path::new(paths::SOCKET_PATH);
    let unix_listener = listener::bind(socket_path).await?;
    info!(socket = %socket_path.display(), "listening");

    let manager = AgentManager::new(state, state_path);
    let (shutdown_tx, _shutdown_rx) = tokio::sync::watch::channel(false);

    let manager_for_signals = manager.clone();
    let shutdown_tx_for_signals = shutdown_tx.clone();
    tokio::spawn(async move {
        wait_for_termination_signal().await;
        info!("received termination signal, stopping all agents");
        manager_for_signals.shutdown_all().await;
        let _ = shutdown_tx_for_signals.send(true);
    });

    listener::serve(unix_listener, manager, shutdown_tx).await;

    let _ = std::fs::remove_file(socket_path);
    let _ = std::fs::remove_file(pid_path);
    Ok(())
}

#[cfg(unix)]
async fn wait_for_termination_signal() {
    use tokio::signal::unix::{signal, SignalKind};
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

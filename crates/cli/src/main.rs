// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oj`: the command-line entry point for running and supervising
//! spec-driven coding sessions.

use clap::{Parser, Subcommand};
use oj::commands::{daemon, init, run, security_check};
use oj::exit_error::ExitError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oj", version, about = "Run and supervise spec-driven coding sessions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an orchestrated coding session against a spec file.
    Run(run::RunArgs),
    /// Prepare a project workspace without starting a session.
    Init(init::InitArgs),
    /// Control the Agent Daemon process and the agents it supervises.
    Daemon(daemon::DaemonArgs),
    /// Check whether a shell command would be allowed to run.
    SecurityCheck(security_check::SecurityCheckArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => run::run(args).await,
        Command::Init(args) => init::init(args).await,
        Command::Daemon(args) => daemon::daemon(args).await,
        Command::SecurityCheck(args) => security_check::security_check(args).await,
    };

    if let Err(err) = result {
        match err.downcast::<ExitError>() {
            Ok(exit_error) => {
                if !exit_error.message.is_empty() {
                    eprintln!("{exit_error}");
                }
                std::process::exit(exit_error.code);
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

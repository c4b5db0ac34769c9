// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oj security-check` — exposes the Security Filter standalone for
//! scripting/debugging.

use anyhow::Result;
use clap::Args;
use oj_shell::security::{check_command, SecurityVerdict};

use crate::exit_error::ExitError;

const DENIED: i32 = 1;

#[derive(Args, Debug)]
pub struct SecurityCheckArgs {
    /// The command line to evaluate, taken verbatim (pass after `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub async fn security_check(args: SecurityCheckArgs) -> Result<()> {
    let command = args.command.join(" ");
    let cwd = std::env::current_dir()?;

    match check_command(&command, &cwd) {
        SecurityVerdict::Allow => {
            println!("allow");
            Ok(())
        }
        SecurityVerdict::Deny(reason) => {
            println!("deny {reason}");
            Err(ExitError::new(DENIED, reason).into())
        }
    }
}

#[cfg(test)]
#[path = "security_check_tests.rs"]
mod tests;

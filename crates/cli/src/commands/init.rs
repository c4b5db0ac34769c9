// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oj init` — runs the Workspace Bootstrap only, without starting a
//! session.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use oj_runbook::bootstrap::bootstrap_workspace;

use crate::preflight;

#[derive(Args, Debug)]
pub struct InitArgs {
    #[arg(long)]
    pub spec_file: PathBuf,

    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    #[arg(long, default_value = "main")]
    pub target_branch: String,

    #[arg(long)]
    pub file_only: bool,

    #[arg(long)]
    pub skip_mr: bool,
}

pub async fn init(args: InitArgs) -> Result<()> {
    let project_dir = args.project_dir.clone().unwrap_or(std::env::current_dir()?);
    preflight::check_project_preconditions(&args.spec_file, &project_dir)?;

    let (run_dir, spec_slug, spec_hash) =
        bootstrap_workspace(&project_dir, &args.spec_file, &args.target_branch, args.file_only, args.skip_mr, None, None)?;

    println!("workspace ready: {}", run_dir.display());
    println!("spec_slug: {spec_slug}");
    println!("spec_hash: {spec_hash}");
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

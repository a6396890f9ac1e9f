// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the env-config generator.

use clap::Parser;
use std::path::PathBuf;

/// Browser env-config generator
#[derive(Parser, Clone, Debug)]
#[command(
    name = "envgen",
    version,
    about = "Generate public/env-config.js from the environment and .env"
)]
pub struct Cli {
    /// Project root containing .env and the public/ output directory
    #[arg(long, env = "ENVGEN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Artifact path override; relative paths resolve under the project root
    #[arg(long, env = "ENVGEN_OUTPUT", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report resolved values without writing the artifact
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

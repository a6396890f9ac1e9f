// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The build-time generation pipeline.
//!
//! One synchronous, run-to-completion pass: merge the environment, render
//! the artifact, overwrite the output file. The output directory is never
//! created here; a missing `public/` fails the invoking build.

use crate::envfile::{EnvFile, EnvFileError};
use envgen_config::artifact;
use envgen_config::EnvConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default artifact location, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "public/env-config.js";

/// Errors that can occur during a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    EnvFile(#[from] EnvFileError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build-time generator: merges the environment and writes the artifact.
#[derive(Clone, Debug)]
pub struct Generator {
    root: PathBuf,
    output: PathBuf,
}

impl Generator {
    /// Generator for `root` with the default artifact path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output = root.join(DEFAULT_OUTPUT);
        Self { root, output }
    }

    /// Override the artifact path. Relative paths resolve under the root.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        self.output = if output.is_absolute() {
            output
        } else {
            self.root.join(output)
        };
        self
    }

    /// Path the artifact will be written to.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Resolve the record a generation run would write.
    ///
    /// Ambient process environment wins over `.env` values; unset keys
    /// resolve to the empty string.
    pub fn resolve(&self) -> Result<EnvConfig, GenerateError> {
        let envfile = EnvFile::load(&self.root)?;
        Ok(EnvConfig::from_lookup(|key| envfile.lookup(key)))
    }

    /// Run the full pipeline and return the written path.
    ///
    /// Overwrites any existing artifact unconditionally, with no backup and
    /// no diff check. Repeated runs against an unchanged environment produce
    /// byte-identical output.
    pub fn run(&self) -> Result<PathBuf, GenerateError> {
        let config = self.resolve()?;
        let text = artifact::render(&config);
        std::fs::write(&self.output, text).map_err(|source| GenerateError::Write {
            path: self.output.clone(),
            source,
        })?;
        Ok(self.output.clone())
    }
}

/// Per-key status report for `--check` mode.
pub fn check_report(config: &EnvConfig) -> String {
    let mut report = String::new();
    for key in envgen_config::KEYS {
        let status = match config.get(key) {
            Some("") | None => "empty",
            Some(_) => "set",
        };
        report.push_str(key);
        report.push_str(": ");
        report.push_str(status);
        report.push('\n');
    }
    report
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
